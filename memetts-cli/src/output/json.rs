//! JSON output formatter

use super::{OutputFormatter, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - a token array at the end, or one object per line
pub struct JsonFormatter<W: Write> {
    writer: W,
    tokens: Vec<TokenRecord>,
    pretty: bool,
    lines: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Collect tokens and write one array on finish
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tokens: Vec::new(),
            pretty: true,
            lines: false,
        }
    }

    /// Write each token as a JSON line immediately
    pub fn lines(writer: W) -> Self {
        Self {
            lines: true,
            ..Self::new(writer)
        }
    }

    /// Toggle pretty printing of the final array
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &TokenRecord) -> Result<()> {
        if self.lines {
            serde_json::to_writer(&mut self.writer, token)?;
            writeln!(self.writer)?;
            self.writer.flush()?;
        } else {
            self.tokens.push(token.clone());
        }
        Ok(())
    }

    // Records carry their segment index.
    fn format_boundary(&mut self) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.lines {
            if self.pretty {
                serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
            } else {
                serde_json::to_writer(&mut self.writer, &self.tokens)?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
