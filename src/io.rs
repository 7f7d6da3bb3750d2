//! Output sinks for rendered documents.

#[cfg(test)]
mod tests;

use crate::error::Result;

/// A sink receiving the rendered output of a document.
///
/// Rendering only ever issues two kinds of event: a run of text free of
/// newlines, and a line break carrying the indentation of the line that
/// follows it.
pub trait Writer {
    /// Append `text` verbatim.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Append a newline followed by `indent` spaces.
    ///
    /// Indents of zero or less emit a bare newline.
    fn line(&mut self, indent: isize) -> Result<()>;
}

impl Writer for String {
    fn write(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }

    fn line(&mut self, indent: isize) -> Result<()> {
        self.push('\n');
        for _ in 0..indent {
            self.push(' ');
        }
        Ok(())
    }
}

/// A writer wrapping a byte stream, flushing after each chunk of output.
#[derive(Debug)]
pub struct StreamWriter<W> {
    stream: W,
}

impl<W: std::io::Write> StreamWriter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Hand back the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: std::io::Write> Writer for StreamWriter<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.stream.write_all(text.as_bytes())?;
        self.stream.flush()?;
        Ok(())
    }

    fn line(&mut self, indent: isize) -> Result<()> {
        self.stream.write_all(b"\n")?;
        for _ in 0..indent {
            self.stream.write_all(b" ")?;
        }
        self.stream.flush()?;
        Ok(())
    }
}
