//! Diagnostic sinks for extracted labels.
//!
//! Every resolved label is handed to a [`LabelSink`] as it is produced, in
//! ascending index order. Sinks never fail the extraction.

use std::io::Write;

use compact_str::CompactString;

pub trait LabelSink {
    /// Receive the resolved label for position `index` of the leading axis.
    fn emit(&mut self, index: usize, label: &str);
}

impl<S: LabelSink + ?Sized> LabelSink for &mut S {
    fn emit(&mut self, index: usize, label: &str) {
        (**self).emit(index, label);
    }
}

impl<S: LabelSink + ?Sized> LabelSink for Box<S> {
    fn emit(&mut self, index: usize, label: &str) {
        (**self).emit(index, label);
    }
}

/// Collects the emitted labels.
impl LabelSink for Vec<CompactString> {
    fn emit(&mut self, _index: usize, label: &str) {
        self.push(CompactString::from(label));
    }
}

/// Emits each label as a `tracing` event at `INFO`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LabelSink for TracingSink {
    fn emit(&mut self, index: usize, label: &str) {
        tracing::info!(index, label, "dimension label");
    }
}

/// Discards every label.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl LabelSink for SilentSink {
    fn emit(&mut self, _index: usize, _label: &str) {}
}

/// Writes one label per line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> LabelSink for WriterSink<W> {
    fn emit(&mut self, index: usize, label: &str) {
        if let Err(err) = writeln!(self.writer, "{label}") {
            tracing::warn!(index, error = %err, "failed to write dimension label");
        }
    }
}

/// Adapts a closure into a [`LabelSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(usize, &str)> LabelSink for FnSink<F> {
    fn emit(&mut self, index: usize, label: &str) {
        (self.0)(index, label);
    }
}
