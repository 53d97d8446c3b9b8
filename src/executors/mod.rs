//! src/executors/mod.rs
use crate::error::StreamError;
use std::io::{BufRead, Write};

/// Drives a stage over an input stream until end of input.
pub trait Executor {
    type Report;
    fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<Self::Report, StreamError>;
}

mod map;
pub use map::MapExecutor;

mod reduce;
pub use reduce::ReduceExecutor;

mod sequential;
pub use sequential::{shuffle, PipelineReport, SequentialExecutor};

/// Yields `(line_number, line)` pairs, numbered from 1, without the
/// terminating `\n`. Invalid UTF-8 is replaced lossily.
fn numbered_lines<R: BufRead>(
    input: R,
) -> impl Iterator<Item = Result<(usize, String), StreamError>> {
    input.split(b'\n').enumerate().map(|(index, bytes)| {
        let line = index + 1;
        bytes
            .map(|bytes| (line, String::from_utf8_lossy(&bytes).into_owned()))
            .map_err(|source| StreamError::Read { line, source })
    })
}
