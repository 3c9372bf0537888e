//! Markdown output formatter

use super::{OutputFormatter, TokenRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs tokens as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
    clip_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
            clip_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_token(&mut self, token: &TokenRecord) -> Result<()> {
        self.token_count += 1;
        match &token.clip {
            Some(clip) => {
                self.clip_count += 1;
                writeln!(
                    self.writer,
                    "{}. **{}** (`{}`)",
                    self.token_count, token.text, clip
                )?;
            }
            None => writeln!(self.writer, "{}. {}", self.token_count, token.text.trim())?,
        }
        Ok(())
    }

    fn format_boundary(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total tokens: {} ({} clips)*",
            self.token_count, self.clip_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_numbered_list_with_totals() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_token(&TokenRecord::speech(" 他说 ".to_string(), 0))
            .unwrap();
        formatter
            .format_token(&TokenRecord::clip(
                "我不是神鹰".to_string(),
                Path::new("a.mp3"),
                0,
            ))
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert!(output.starts_with("1. 他说\n2. **我不是神鹰** (`a.mp3`)\n"));
        assert!(output.ends_with("---\n*Total tokens: 2 (1 clips)*\n"));
    }
}
