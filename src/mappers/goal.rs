//! src/mappers/goal.rs
use crate::configuration::PipelineSettings;
use crate::functions::{MapEmitter, Mapper};
use crate::outcome::{LineOutcome, SkipReason};
use crate::record::Record;
use std::io;

/// Each record counts once towards its group.
const COUNT: u8 = 1;

/// Emits `title|completed<TAB>1` for every usable goal record.
pub struct GoalMapper<E: MapEmitter> {
    emitter: E,
    settings: PipelineSettings,
    at_first_line: bool,
}

impl<E: MapEmitter> GoalMapper<E> {
    pub fn with_settings(settings: PipelineSettings, emitter: E) -> Self {
        Self {
            emitter,
            settings,
            at_first_line: true,
        }
    }

    fn is_header(&self, line: &str) -> bool {
        line.to_lowercase()
            .starts_with(&self.settings.header_prefix.to_lowercase())
    }
}

impl<E: MapEmitter> Mapper for GoalMapper<E> {
    type Emitter = E;

    fn build(emitter: E) -> Self {
        Self::with_settings(PipelineSettings::default(), emitter)
    }

    fn map(&mut self, line: &str) -> io::Result<LineOutcome<()>> {
        // Only the very first line of the stream may be a header.
        let first = std::mem::replace(&mut self.at_first_line, false);
        if first && self.is_header(line) {
            return Ok(Err(SkipReason::Header));
        }

        let key = match Record::parse(line, self.settings.delimiter)
            .and_then(|record| record.group_key(&self.settings.key_separator))
        {
            Ok(key) => key,
            Err(reason) => return Ok(Err(reason)),
        };
        self.emitter.emit(key.as_str(), COUNT)?;
        Ok(Ok(()))
    }

    fn into_emitter(self) -> E {
        self.emitter
    }
}
