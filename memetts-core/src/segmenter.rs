//! Dictionary-backed segmenter

use crate::config::{SegmenterConfig, SegmenterConfigBuilder};
use crate::dictionary::Dictionary;
use crate::error::{Result, TrieError};
use crate::sequence::Sequence;
use crate::token::{Signal, Token};
use crate::tokenizer::{batch, SplitStream, StreamTokenizer};
use crate::trie::Trie;

/// What a caller should do with a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a, L> {
    /// The token is a dictionary phrase with this label
    Clip(&'a L),
    /// The token has no label and should be spoken
    Speech,
}

/// Owns a dictionary and the prefix tree built from it
///
/// The tree is built once and only read afterwards, so a segmenter can be
/// shared between threads and drive any number of independent streams.
#[derive(Debug, Clone)]
pub struct Segmenter<Q: Sequence, L> {
    dictionary: Dictionary<Q, L>,
    trie: Trie<Q>,
    config: SegmenterConfig,
}

impl<Q: Sequence, L> Segmenter<Q, L> {
    /// Create a segmenter with default configuration
    pub fn new(dictionary: Dictionary<Q, L>) -> Self {
        Self::with_config(dictionary, SegmenterConfig::default())
    }

    /// Create a segmenter with a validated configuration
    pub fn with_config(dictionary: Dictionary<Q, L>, config: SegmenterConfig) -> Self {
        let trie = Trie::from_dictionary(&dictionary);
        Self {
            dictionary,
            trie,
            config,
        }
    }

    /// Build a segmenter from labelled phrases and an unvalidated configuration
    ///
    /// Unlike collecting into a [`Dictionary`], an empty phrase is an error
    /// here rather than skipped.
    pub fn from_phrases<I>(phrases: I, config: SegmenterConfigBuilder) -> Result<Self>
    where
        I: IntoIterator<Item = (Q, L)>,
    {
        let config = config.build()?;
        let mut dictionary = Dictionary::new();
        for (phrase, label) in phrases {
            if phrase.symbol_count() == 0 {
                return Err(TrieError::EmptyPhrase.into());
            }
            dictionary.insert(phrase, label);
        }
        tracing::debug!(phrases = dictionary.len(), "segmenter built");
        Ok(Self::with_config(dictionary, config))
    }

    /// Split a complete input
    pub fn split(&self, text: &Q) -> Vec<Token<Q>> {
        batch::split_with_trie(text, &self.trie)
    }

    /// Split a signal source lazily
    pub fn split_stream<I>(&self, source: I) -> SplitStream<'_, Q, I::IntoIter>
    where
        I: IntoIterator<Item = Signal<Q::Symbol>>,
    {
        SplitStream::new(self.stream_tokenizer(), source.into_iter())
    }

    /// A push-mode tokenizer configured like this segmenter
    pub fn stream_tokenizer(&self) -> StreamTokenizer<'_, Q> {
        StreamTokenizer::new(&self.trie).with_literal_limit(self.config.literal_limit)
    }

    /// Label of the token's sequence, if it is a dictionary phrase
    pub fn lookup(&self, token: &Token<Q>) -> Option<&L> {
        self.dictionary.get(token.as_seq())
    }

    /// Decide whether a token plays a clip or is spoken
    pub fn classify(&self, token: &Token<Q>) -> Classified<'_, L> {
        match self.lookup(token) {
            Some(label) => Classified::Clip(label),
            None => Classified::Speech,
        }
    }

    /// The dictionary
    pub fn dictionary(&self) -> &Dictionary<Q, L> {
        &self.dictionary
    }

    /// The prefix tree
    pub fn trie(&self) -> &Trie<Q> {
        &self.trie
    }

    /// The configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }
}
