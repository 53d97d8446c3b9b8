//! src/reducers/adder.rs
use crate::functions::{ReduceEmitter, Reducer};
use crate::outcome::{LineOutcome, SkipReason};
use std::io;

/// One `key<TAB>value` input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue<'a> {
    pub key: &'a str,
    pub value: i64,
}

impl<'a> KeyValue<'a> {
    /// Only the outer line is trimmed before splitting on the first tab, so
    /// whitespace just before the tab stays part of the key.
    pub fn parse(line: &'a str) -> LineOutcome<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(SkipReason::Blank);
        }
        let (key, value) = line.split_once('\t').ok_or(SkipReason::MissingSeparator)?;
        let value = value
            .trim()
            .parse::<i64>()
            .map_err(|source| SkipReason::InvalidValue {
                value: value.to_string(),
                source,
            })?;
        Ok(KeyValue { key, value })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub key: String,
    pub sum: i64,
}

/// Sum of the contiguous run of pairs currently being read.
///
/// Only the open run is remembered. A key that shows up again after a
/// different one starts a fresh run.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    current: Option<Aggregate>,
}

impl RunAccumulator {
    /// Folds `pair` in. Returns the finished run when `pair` starts a new one.
    /// On overflow the state is left as it was.
    pub fn push(&mut self, pair: KeyValue<'_>) -> LineOutcome<Option<Aggregate>> {
        if let Some(open) = self.current.as_mut() {
            if open.key == pair.key {
                open.sum = open
                    .sum
                    .checked_add(pair.value)
                    .ok_or(SkipReason::Overflow { value: pair.value })?;
                return Ok(None);
            }
        }
        Ok(self.current.replace(Aggregate {
            key: pair.key.to_string(),
            sum: pair.value,
        }))
    }

    pub fn current(&self) -> Option<&Aggregate> {
        self.current.as_ref()
    }

    pub fn finish(self) -> Option<Aggregate> {
        self.current
    }
}

/// Sums the values of each run of identical keys.
pub struct Adder<E: ReduceEmitter> {
    emitter: E,
    run: RunAccumulator,
}

impl<E: ReduceEmitter> Adder<E> {
    fn emit(&mut self, aggregate: &Aggregate) -> io::Result<()> {
        self.emitter.emit(&aggregate.key, aggregate.sum)
    }
}

impl<E: ReduceEmitter> Reducer for Adder<E> {
    type Emitter = E;

    fn build(emitter: E) -> Self {
        Self {
            emitter,
            run: RunAccumulator::default(),
        }
    }

    fn reduce(&mut self, line: &str) -> io::Result<LineOutcome<()>> {
        let pushed = KeyValue::parse(line).and_then(|pair| self.run.push(pair));
        match pushed {
            Ok(Some(finished)) => {
                self.emit(&finished)?;
                Ok(Ok(()))
            }
            Ok(None) => Ok(Ok(())),
            Err(reason) => Ok(Err(reason)),
        }
    }

    fn finish(self) -> io::Result<E> {
        let Adder { mut emitter, run } = self;
        if let Some(last) = run.finish() {
            emitter.emit(&last.key, last.sum)?;
        }
        Ok(emitter)
    }
}
