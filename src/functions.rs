//! src/functions.rs
use crate::outcome::LineOutcome;
use std::fmt::Display;
use std::io::{self, Write};

pub trait MapEmitter {
    fn emit<V: Display>(&mut self, key: &str, value: V) -> io::Result<()>;
}

pub trait ReduceEmitter {
    fn emit<V: Display>(&mut self, key: &str, value: V) -> io::Result<()>;
}

/// Turns one raw input line into zero or one emissions.
///
/// The outer `io::Result` is the emitter failing; the inner
/// [`LineOutcome`] says whether the line was used or why it was skipped.
pub trait Mapper {
    type Emitter: MapEmitter;
    fn build(emitter: Self::Emitter) -> Self;
    fn map(&mut self, line: &str) -> io::Result<LineOutcome<()>>;
    fn into_emitter(self) -> Self::Emitter;
}

/// Streaming reducer over lines that arrive grouped by key.
pub trait Reducer {
    type Emitter: ReduceEmitter;
    fn build(emitter: Self::Emitter) -> Self;
    fn reduce(&mut self, line: &str) -> io::Result<LineOutcome<()>>;
    /// Flushes whatever group is still open and hands back the emitter.
    fn finish(self) -> io::Result<Self::Emitter>;
}

/// Writes `key<TAB>value` lines to any [`Write`] sink.
pub struct LineEmitter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    fn write_line<V: Display>(&mut self, key: &str, value: V) -> io::Result<()> {
        writeln!(self.writer, "{}\t{}", key, value)?;
        self.written += 1;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> MapEmitter for LineEmitter<W> {
    fn emit<V: Display>(&mut self, key: &str, value: V) -> io::Result<()> {
        self.write_line(key, value)
    }
}

impl<W: Write> ReduceEmitter for LineEmitter<W> {
    fn emit<V: Display>(&mut self, key: &str, value: V) -> io::Result<()> {
        self.write_line(key, value)
    }
}
