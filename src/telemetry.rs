//! src/telemetry.rs
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. `RUST_LOG` wins over `default_directive`;
/// a directive that does not parse falls back to `warn`.
///
/// Everything goes to stderr; stdout is reserved for stage output.
pub fn init_tracing(service_name: &'static str, default_directive: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init()?;

    tracing::debug!(service_name, "Tracing initialised");
    Ok(())
}

/// Maps repeated `-v` flags onto a filter directive.
pub fn directive_for_verbosity(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
