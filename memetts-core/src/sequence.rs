//! Sequence kinds a prefix tree can store
//!
//! A phrase is an ordered run of symbols. The kind of a phrase decides how
//! matched symbols are put back together: character sequences are
//! concatenated into a `String`, generic token sequences are appended into a
//! `Vec<T>`. The kind is chosen at compile time through the [`Sequence`]
//! implementation, so a single trie can never hold phrases of two kinds.

use std::fmt;
use std::hash::Hash;

/// How matched symbols are reassembled into a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SequenceKind {
    /// Character sequences, reassembled by concatenation
    Text,
    /// Generic token lists, reassembled by appending
    Tokens,
}

impl SequenceKind {
    /// Lowercase name used in messages and output
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceKind::Text => "text",
            SequenceKind::Tokens => "tokens",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phrase type that can be split into symbols and rebuilt from them
pub trait Sequence: Clone + Default + Eq + Hash + fmt::Debug {
    /// Unit of matching (one trie edge)
    type Symbol: Clone + Eq + Hash + fmt::Debug;

    /// Reassembly kind of this sequence type
    const KIND: SequenceKind;

    /// Split the sequence into its symbols
    fn to_symbols(&self) -> Vec<Self::Symbol>;

    /// Append one symbol at the end
    fn push_symbol(&mut self, symbol: Self::Symbol);

    /// Number of symbols (not bytes)
    fn symbol_count(&self) -> usize;

    /// Rebuild a sequence from borrowed symbols
    fn from_symbols<'a, I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Symbol>,
        Self::Symbol: 'a,
    {
        let mut seq = Self::default();
        for symbol in symbols {
            seq.push_symbol(symbol.clone());
        }
        seq
    }
}

impl Sequence for String {
    type Symbol = char;

    const KIND: SequenceKind = SequenceKind::Text;

    fn to_symbols(&self) -> Vec<char> {
        self.chars().collect()
    }

    fn push_symbol(&mut self, symbol: char) {
        self.push(symbol);
    }

    fn symbol_count(&self) -> usize {
        self.chars().count()
    }
}

impl<T> Sequence for Vec<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    type Symbol = T;

    const KIND: SequenceKind = SequenceKind::Tokens;

    fn to_symbols(&self) -> Vec<T> {
        self.clone()
    }

    fn push_symbol(&mut self, symbol: T) {
        self.push(symbol);
    }

    fn symbol_count(&self) -> usize {
        self.len()
    }
}
