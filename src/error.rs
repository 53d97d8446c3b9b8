//! src/error.rs

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Failure of the byte streams a stage reads from or writes to.
///
/// Bad data never produces one of these; only the underlying I/O can.
#[derive(thiserror::Error)]
pub enum StreamError {
    #[error("Failed to read input line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output")]
    Write(#[source] std::io::Error),
}

impl std::fmt::Debug for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}
