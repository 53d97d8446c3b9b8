//! src/executors/sequential.rs
use crate::configuration::PipelineSettings;
use crate::error::StreamError;
use crate::executors::{Executor, MapExecutor, ReduceExecutor};
use crate::outcome::ScanReport;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub map: ScanReport,
    pub reduce: ScanReport,
}

/// Runs map, shuffle and reduce in one process.
///
/// The whole mapper output is held in memory for the sort.
#[derive(Debug, Clone, Default)]
pub struct SequentialExecutor {
    settings: PipelineSettings,
}

impl SequentialExecutor {
    pub fn new(settings: PipelineSettings) -> Self {
        Self { settings }
    }
}

impl Executor for SequentialExecutor {
    type Report = PipelineReport;

    #[tracing::instrument(name = "Local pipeline", skip_all)]
    fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<PipelineReport, StreamError> {
        let mut intermediate = Vec::new();
        let map = MapExecutor::new(self.settings.clone()).run(input, &mut intermediate)?;
        let shuffled = shuffle(&intermediate);
        tracing::debug!(bytes = shuffled.len(), "Shuffled map output");
        let reduce = ReduceExecutor.run(&shuffled[..], output)?;
        Ok(PipelineReport { map, reduce })
    }
}

/// Brings equal keys together by stably sorting `key<TAB>value` lines on
/// their key bytes, the way the framework's shuffle would.
pub fn shuffle(intermediate: &[u8]) -> Vec<u8> {
    let text = String::from_utf8_lossy(intermediate);
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
    let mut shuffled = String::with_capacity(text.len() + 1);
    for line in lines {
        shuffled.push_str(line);
        shuffled.push('\n');
    }
    shuffled.into_bytes()
}

fn sort_key(line: &str) -> &str {
    line.split_once('\t').map_or(line, |(key, _)| key)
}
