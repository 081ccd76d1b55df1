use std::fmt::Display;
use std::io::{self, Write};

use sllist::{List, ListResult};

/// Line-oriented writer for the diffable task output.
pub struct Transcript<W: Write> {
    out: W,
    delimiter: String,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W, delimiter: impl Into<String>) -> Self {
        Self {
            out,
            delimiter: delimiter.into(),
        }
    }

    /// `<delimiter> <name>`
    pub fn section(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", self.delimiter, name)
    }

    /// `<label>: [v1 v2 ...] size=<n>`
    pub fn list(&mut self, label: &str, list: &List) -> io::Result<()> {
        writeln!(self.out, "{}: {} size={}", label, list, list.len())
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Renders a value for the transcript, `N/A` when it is absent.
pub fn shown(value: Option<i32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Same as [`shown`] for results of `front`/`back`.
pub fn shown_result(value: ListResult<i32>) -> String {
    shown(value.ok())
}
