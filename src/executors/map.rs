//! src/executors/map.rs
use crate::configuration::PipelineSettings;
use crate::error::StreamError;
use crate::executors::{numbered_lines, Executor};
use crate::functions::{LineEmitter, Mapper};
use crate::mappers::GoalMapper;
use crate::outcome::ScanReport;
use std::io::{BufRead, Write};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct MapExecutor {
    settings: PipelineSettings,
}

impl MapExecutor {
    pub fn new(settings: PipelineSettings) -> Self {
        Self { settings }
    }
}

impl Executor for MapExecutor {
    type Report = ScanReport;

    #[tracing::instrument(name = "Map stage", skip_all, fields(run_id = %Uuid::new_v4()))]
    fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<ScanReport, StreamError> {
        let mut mapper = GoalMapper::with_settings(self.settings.clone(), LineEmitter::new(output));
        let mut report = ScanReport::default();
        for line in numbered_lines(input) {
            let (line_number, line) = line?;
            let outcome = mapper.map(&line).map_err(StreamError::Write)?;
            report.record(line_number, &outcome);
        }
        let emitter = mapper.into_emitter();
        report.set_emitted(emitter.written());
        emitter.into_inner().map_err(StreamError::Write)?;
        report.log_summary("map");
        Ok(report)
    }
}
