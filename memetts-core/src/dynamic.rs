//! Phrase sets whose kind is only known at run time
//!
//! Phrase files loaded from disk may hold plain strings (character phrases)
//! or lists of words (token phrases). [`AnyTrie::build`] picks the kind from
//! the first phrase and refuses to mix kinds afterwards.

use crate::error::TrieError;
use crate::sequence::SequenceKind;
use crate::trie::Trie;

/// A phrase of either supported kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnySequence {
    /// Character phrase
    Text(String),
    /// Token phrase
    Tokens(Vec<String>),
}

impl AnySequence {
    /// Kind of this phrase
    pub fn kind(&self) -> SequenceKind {
        match self {
            AnySequence::Text(_) => SequenceKind::Text,
            AnySequence::Tokens(_) => SequenceKind::Tokens,
        }
    }

    /// Interpret a JSON value as a phrase
    ///
    /// Strings become text phrases and arrays of strings become token
    /// phrases. Anything else has no defined reassembly and is rejected.
    #[cfg(feature = "serde")]
    pub fn from_json(value: &serde_json::Value) -> Result<Self, TrieError> {
        use serde_json::Value;

        match value {
            Value::String(text) => Ok(AnySequence::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(word) => Ok(word.clone()),
                    other => Err(TrieError::UnsupportedSequenceKind(format!(
                        "token list containing {}",
                        json_type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(AnySequence::Tokens),
            other => Err(TrieError::UnsupportedSequenceKind(
                json_type_name(other).to_string(),
            )),
        }
    }
}

#[cfg(feature = "serde")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<String> for AnySequence {
    fn from(text: String) -> Self {
        AnySequence::Text(text)
    }
}

impl From<Vec<String>> for AnySequence {
    fn from(tokens: Vec<String>) -> Self {
        AnySequence::Tokens(tokens)
    }
}

/// A prefix tree of either supported kind
#[derive(Debug, Clone)]
pub enum AnyTrie {
    /// Tree over character phrases
    Text(Trie<String>),
    /// Tree over token phrases
    Tokens(Trie<Vec<String>>),
}

impl AnyTrie {
    /// Build a tree whose kind is set by the first phrase
    ///
    /// An empty phrase set yields an empty token tree.
    pub fn build<I>(phrases: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = AnySequence>,
    {
        let mut phrases = phrases.into_iter();
        let mut trie = match phrases.next() {
            None => return Ok(AnyTrie::Tokens(Trie::new())),
            Some(first) => {
                let mut trie = AnyTrie::empty(first.kind());
                trie.insert(first)?;
                trie
            }
        };

        for phrase in phrases {
            trie.insert(phrase)?;
        }
        tracing::debug!(kind = %trie.kind(), phrases = trie.len(), "built dynamic prefix tree");
        Ok(trie)
    }

    fn empty(kind: SequenceKind) -> Self {
        match kind {
            SequenceKind::Text => AnyTrie::Text(Trie::new()),
            SequenceKind::Tokens => AnyTrie::Tokens(Trie::new()),
        }
    }

    /// Insert a phrase of the tree's kind
    pub fn insert(&mut self, phrase: AnySequence) -> Result<bool, TrieError> {
        match (self, phrase) {
            (AnyTrie::Text(trie), AnySequence::Text(text)) => trie.insert(&text),
            (AnyTrie::Tokens(trie), AnySequence::Tokens(tokens)) => trie.insert(&tokens),
            (trie, phrase) => Err(TrieError::SequenceKindMismatch {
                expected: trie.kind(),
                found: phrase.kind(),
            }),
        }
    }

    /// Kind of the stored phrases
    pub fn kind(&self) -> SequenceKind {
        match self {
            AnyTrie::Text(_) => SequenceKind::Text,
            AnyTrie::Tokens(_) => SequenceKind::Tokens,
        }
    }

    /// Exact membership; a phrase of the other kind is never contained
    pub fn contains(&self, phrase: &AnySequence) -> bool {
        match (self, phrase) {
            (AnyTrie::Text(trie), AnySequence::Text(text)) => trie.contains_phrase(text),
            (AnyTrie::Tokens(trie), AnySequence::Tokens(tokens)) => trie.contains_phrase(tokens),
            _ => false,
        }
    }

    /// Number of stored phrases
    pub fn len(&self) -> usize {
        match self {
            AnyTrie::Text(trie) => trie.len(),
            AnyTrie::Tokens(trie) => trie.len(),
        }
    }

    /// Whether no phrase is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in symbols of the longest stored phrase
    pub fn max_phrase_len(&self) -> usize {
        match self {
            AnyTrie::Text(trie) => trie.max_phrase_len(),
            AnyTrie::Tokens(trie) => trie.max_phrase_len(),
        }
    }

    /// Every stored phrase, in first-insertion order
    pub fn phrases(&self) -> Vec<AnySequence> {
        match self {
            AnyTrie::Text(trie) => trie.iter().map(AnySequence::Text).collect(),
            AnyTrie::Tokens(trie) => trie.iter().map(AnySequence::Tokens).collect(),
        }
    }
}

impl From<Trie<String>> for AnyTrie {
    fn from(trie: Trie<String>) -> Self {
        AnyTrie::Text(trie)
    }
}

impl From<Trie<Vec<String>>> for AnyTrie {
    fn from(trie: Trie<Vec<String>>) -> Self {
        AnyTrie::Tokens(trie)
    }
}
