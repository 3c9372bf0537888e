//! Segmentation units: characters or whitespace-separated words

use clap::ValueEnum;
use memetts_core::{Dictionary, Sequence};

/// Symbol granularity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    /// Match phrases character by character
    Char,
    /// Match phrases word by word
    Word,
}

/// A sequence type the CLI can read from and render to text
pub trait TextUnit: Sequence {
    /// Parse raw text into a sequence
    fn parse(text: &str) -> Self;

    /// Render a sequence for display
    fn render(&self) -> String;
}

impl TextUnit for String {
    fn parse(text: &str) -> Self {
        text.to_string()
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl TextUnit for Vec<String> {
    fn parse(text: &str) -> Self {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn render(&self) -> String {
        self.join(" ")
    }
}

/// Re-key a text dictionary for another unit
pub fn convert<Q: TextUnit, L: Clone>(dictionary: &Dictionary<String, L>) -> Dictionary<Q, L> {
    dictionary
        .iter()
        .map(|(phrase, label)| (Q::parse(phrase), label.clone()))
        .collect()
}
