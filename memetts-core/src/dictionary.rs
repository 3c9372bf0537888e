//! Phrase dictionary with opaque labels

use std::collections::{HashMap, HashSet};

use crate::sequence::Sequence;

/// Mapping from phrase to label that remembers insertion order
///
/// Labels are opaque to the segmentation core; the soundboard uses clip
/// paths. Re-inserting a phrase replaces its label without moving it.
#[derive(Debug, Clone)]
pub struct Dictionary<Q, L> {
    entries: Vec<(Q, L)>,
    index: HashMap<Q, usize>,
}

impl<Q, L> Default for Dictionary<Q, L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<Q: Sequence, L> Dictionary<Q, L> {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a phrase, returning the label it replaced
    ///
    /// Empty phrases are skipped: they would match zero symbols everywhere.
    pub fn insert(&mut self, phrase: Q, label: L) -> Option<L> {
        if phrase.symbol_count() == 0 {
            tracing::warn!("skipping empty dictionary phrase");
            return None;
        }

        match self.index.get(&phrase) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, label)),
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, label));
                None
            }
        }
    }

    /// Label of an exact phrase
    pub fn get(&self, phrase: &Q) -> Option<&L> {
        self.index.get(phrase).map(|&slot| &self.entries[slot].1)
    }

    /// Whether the phrase is present
    pub fn contains(&self, phrase: &Q) -> bool {
        self.index.contains_key(phrase)
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no phrase
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Q, &L)> {
        self.entries.iter().map(|(phrase, label)| (phrase, label))
    }

    /// Phrases in insertion order
    pub fn phrases(&self) -> impl Iterator<Item = &Q> {
        self.entries.iter().map(|(phrase, _)| phrase)
    }

    /// Phrases as a hash set, for membership-only consumers
    pub fn phrase_set(&self) -> HashSet<Q> {
        self.index.keys().cloned().collect()
    }

    /// Length in symbols of the longest phrase
    pub fn max_phrase_len(&self) -> usize {
        self.phrases().map(|phrase| phrase.symbol_count()).max().unwrap_or(0)
    }
}

impl<Q: Sequence, L> FromIterator<(Q, L)> for Dictionary<Q, L> {
    fn from_iter<I: IntoIterator<Item = (Q, L)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<Q: Sequence, L> Extend<(Q, L)> for Dictionary<Q, L> {
    fn extend<I: IntoIterator<Item = (Q, L)>>(&mut self, iter: I) {
        for (phrase, label) in iter {
            self.insert(phrase, label);
        }
    }
}
