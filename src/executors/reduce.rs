//! src/executors/reduce.rs
use crate::error::StreamError;
use crate::executors::{numbered_lines, Executor};
use crate::functions::{LineEmitter, Reducer};
use crate::outcome::ScanReport;
use crate::reducers::Adder;
use std::io::{BufRead, Write};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReduceExecutor;

impl Executor for ReduceExecutor {
    type Report = ScanReport;

    #[tracing::instrument(name = "Reduce stage", skip_all, fields(run_id = %Uuid::new_v4()))]
    fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<ScanReport, StreamError> {
        let mut adder = Adder::build(LineEmitter::new(output));
        let mut report = ScanReport::default();
        for line in numbered_lines(input) {
            let (line_number, line) = line?;
            let outcome = adder.reduce(&line).map_err(StreamError::Write)?;
            report.record(line_number, &outcome);
        }
        let emitter = adder.finish().map_err(StreamError::Write)?;
        report.set_emitted(emitter.written());
        emitter.into_inner().map_err(StreamError::Write)?;
        report.log_summary("reduce");
        Ok(report)
    }
}
