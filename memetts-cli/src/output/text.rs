//! Plain text output formatter

use super::{OutputFormatter, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one `clip` or `speech` line per token
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &TokenRecord) -> Result<()> {
        match &token.clip {
            Some(clip) => writeln!(self.writer, "clip\t{}\t{}", token.text, clip)?,
            None => writeln!(self.writer, "speech\t{}", token.text.replace('\n', "\\n"))?,
        }
        self.writer.flush()?;
        Ok(())
    }

    fn format_boundary(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
