//! Prefix tree over phrase symbols
//!
//! Nodes live in a flat arena and refer to each other by index, so the tree
//! has no recursive ownership. Every query walks at most one path from the
//! root, which keeps the cost proportional to the phrase length regardless of
//! how many phrases are stored.

use std::borrow::Borrow;
use std::collections::HashMap;

use smallvec::SmallVec;

use crate::dictionary::Dictionary;
use crate::error::TrieError;
use crate::sequence::Sequence;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct Node<S> {
    children: HashMap<S, NodeId>,
    terminal: bool,
    /// Edge leading into this node, `None` for the root
    parent: Option<(NodeId, S)>,
}

impl<S> Node<S> {
    fn root() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
            parent: None,
        }
    }

    fn child_of(parent: NodeId, symbol: S) -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
            parent: Some((parent, symbol)),
        }
    }
}

/// Outcome of walking the tree from the root along a run of symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Symbols consumed before the walk left the tree or ran out of input
    pub walked: usize,
    /// Length of the longest stored phrase seen along the walk
    pub longest: Option<usize>,
    /// Whether the node reached after `walked` symbols ends a phrase
    pub terminal: bool,
    /// Whether some stored phrase continues past the reached node
    pub extendable: bool,
}

impl Probe {
    /// The whole input of `len` symbols is a prefix of some stored phrase
    pub fn is_prefix_of_len(&self, len: usize) -> bool {
        self.walked == len
    }

    /// The whole input of `len` symbols is a phrase no longer phrase extends
    pub fn is_final_of_len(&self, len: usize) -> bool {
        self.walked == len && self.terminal && !self.extendable
    }
}

/// Prefix tree keyed by phrases of kind `Q`
#[derive(Debug, Clone)]
pub struct Trie<Q: Sequence> {
    nodes: Vec<Node<Q::Symbol>>,
    /// Terminal nodes in first-insertion order
    terminals: Vec<NodeId>,
    max_phrase_len: usize,
}

impl<Q: Sequence> Default for Trie<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Sequence> Trie<Q> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            terminals: Vec::new(),
            max_phrase_len: 0,
        }
    }

    /// Build a tree from a collection of phrases
    ///
    /// Fails on the first empty phrase; no partially built tree is returned.
    pub fn build<I>(phrases: I) -> Result<Self, TrieError>
    where
        I: IntoIterator,
        I::Item: Borrow<Q>,
    {
        let mut trie = Self::new();
        for phrase in phrases {
            trie.insert(phrase.borrow())?;
        }
        tracing::debug!(
            phrases = trie.len(),
            nodes = trie.nodes.len(),
            max_phrase_len = trie.max_phrase_len,
            "built prefix tree"
        );
        Ok(trie)
    }

    /// Build a tree from the phrases of a dictionary
    ///
    /// Dictionaries never hold empty phrases, so this cannot fail.
    pub fn from_dictionary<L>(dictionary: &Dictionary<Q, L>) -> Self {
        let mut trie = Self::new();
        for phrase in dictionary.phrases() {
            trie.insert_symbols(&phrase.to_symbols());
        }
        tracing::debug!(
            phrases = trie.len(),
            max_phrase_len = trie.max_phrase_len,
            "built prefix tree from dictionary"
        );
        trie
    }

    /// Insert a phrase
    ///
    /// Returns `Ok(false)` when the phrase was already stored.
    pub fn insert(&mut self, phrase: &Q) -> Result<bool, TrieError> {
        let symbols = phrase.to_symbols();
        if symbols.is_empty() {
            return Err(TrieError::EmptyPhrase);
        }
        Ok(self.insert_symbols(&symbols))
    }

    fn insert_symbols(&mut self, symbols: &[Q::Symbol]) -> bool {
        if symbols.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for symbol in symbols {
            node = match self.nodes[node].children.get(symbol) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::child_of(node, symbol.clone()));
                    self.nodes[node].children.insert(symbol.clone(), child);
                    child
                }
            };
        }

        if self.nodes[node].terminal {
            return false;
        }
        self.nodes[node].terminal = true;
        self.terminals.push(node);
        self.max_phrase_len = self.max_phrase_len.max(symbols.len());
        true
    }

    /// Walk from the root along `symbols` and report what was found
    pub fn probe<'a, I>(&self, symbols: I) -> Probe
    where
        I: IntoIterator<Item = &'a Q::Symbol>,
        Q::Symbol: 'a,
    {
        let mut node = ROOT;
        let mut walked = 0;
        let mut longest = None;

        for symbol in symbols {
            match self.nodes[node].children.get(symbol) {
                Some(&child) => node = child,
                None => break,
            }
            walked += 1;
            if self.nodes[node].terminal {
                longest = Some(walked);
            }
        }

        Probe {
            walked,
            longest,
            terminal: self.nodes[node].terminal,
            extendable: !self.nodes[node].children.is_empty(),
        }
    }

    /// Exact membership
    pub fn contains(&self, symbols: &[Q::Symbol]) -> bool {
        let probe = self.probe(symbols);
        probe.walked == symbols.len() && probe.terminal
    }

    /// Exact membership of a phrase value
    pub fn contains_phrase(&self, phrase: &Q) -> bool {
        self.contains(&phrase.to_symbols())
    }

    /// Whether `symbols` is a prefix of at least one stored phrase
    ///
    /// The empty run is a prefix of everything.
    pub fn is_prefix(&self, symbols: &[Q::Symbol]) -> bool {
        self.probe(symbols).is_prefix_of_len(symbols.len())
    }

    /// Whether `symbols` is a stored phrase that no longer phrase extends
    pub fn is_final(&self, symbols: &[Q::Symbol]) -> bool {
        self.probe(symbols).is_final_of_len(symbols.len())
    }

    /// Longest stored phrase that is a prefix of `symbols`
    ///
    /// With `anchored_at_end` the result always ends on a phrase boundary.
    /// Without it, the traversed prefix itself is returned when non-empty
    /// even if no phrase ends there, which only tells whether the input is
    /// still viable.
    pub fn longest(&self, symbols: &[Q::Symbol], anchored_at_end: bool) -> Option<Q> {
        let probe = self.probe(symbols);
        let len = if anchored_at_end {
            probe.longest?
        } else if probe.walked > 0 {
            probe.walked
        } else {
            return None;
        };
        Some(Q::from_symbols(&symbols[..len]))
    }

    /// Length of the longest stored phrase that is a prefix of `symbols`
    pub fn longest_len(&self, symbols: &[Q::Symbol]) -> Option<usize> {
        self.probe(symbols).longest
    }

    /// Smallest offset at which a stored phrase starts and also ends inside
    /// `symbols`
    pub fn index_of_any_match(&self, symbols: &[Q::Symbol]) -> Option<usize> {
        (0..symbols.len()).find(|&start| self.completes_within(&symbols[start..]))
    }

    fn completes_within(&self, symbols: &[Q::Symbol]) -> bool {
        let mut node = ROOT;
        for symbol in symbols {
            match self.nodes[node].children.get(symbol) {
                Some(&child) => node = child,
                None => return false,
            }
            if self.nodes[node].terminal {
                return true;
            }
        }
        false
    }

    /// Number of stored phrases
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// Whether no phrase is stored
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// Length in symbols of the longest stored phrase (0 when empty)
    pub fn max_phrase_len(&self) -> usize {
        self.max_phrase_len
    }

    /// Iterate over every stored phrase once, in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = Q> + '_ {
        self.terminals.iter().map(move |&node| self.phrase_at(node))
    }

    fn phrase_at(&self, mut node: NodeId) -> Q {
        let mut reversed: SmallVec<[&Q::Symbol; 16]> = SmallVec::new();
        while let Some((parent, symbol)) = &self.nodes[node].parent {
            reversed.push(symbol);
            node = *parent;
        }
        Q::from_symbols(reversed.into_iter().rev())
    }
}
