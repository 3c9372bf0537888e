//! Streaming tokenizer with bounded lookahead
//!
//! Symbols arrive one at a time from a producer that may never stop. The
//! tokenizer keeps at most as many unresolved symbols as the longest phrase
//! and commits a decision only once later input can no longer change it, so
//! the emitted tokens are exactly those the batch tokenizer would produce
//! for the same input. A flush is a hard boundary: everything pending is
//! resolved, and no phrase can span it.
//!
//! # Example
//!
//! ```rust
//! use memetts_core::{Dictionary, StreamEvent, StreamTokenizer, Token, Trie};
//!
//! let dictionary: Dictionary<String, &str> =
//!     [("ab".to_string(), "ab.wav"), ("abc".to_string(), "abc.wav")]
//!         .into_iter()
//!         .collect();
//! let trie = Trie::from_dictionary(&dictionary);
//! let mut tokenizer = StreamTokenizer::new(&trie);
//!
//! // "ab" may still grow into "abc", so nothing is decided yet
//! tokenizer.push_seq(&"xab".to_string());
//! assert_eq!(tokenizer.next_event(), None);
//!
//! tokenizer.push('c');
//! let events: Vec<_> = tokenizer.drain().collect();
//! assert_eq!(
//!     events,
//!     vec![
//!         StreamEvent::Token(Token::Literal("x".to_string())),
//!         StreamEvent::Token(Token::Phrase("abc".to_string())),
//!     ]
//! );
//! ```

mod iter;
mod state;

pub use iter::{split_stream, split_stream_with_separator, Separated, SplitStream};
pub use state::Phase;

use std::collections::VecDeque;

use crate::sequence::Sequence;
use crate::token::{Signal, StreamEvent, Token};
use crate::trie::Trie;
use state::{PendingState, Resolution};

/// Push-mode streaming tokenizer
///
/// Feed symbols with [`push`](Self::push), mark boundaries with
/// [`flush`](Self::flush), end the session with [`finish`](Self::finish),
/// and collect events with [`next_event`](Self::next_event) or
/// [`drain`](Self::drain).
#[derive(Debug)]
pub struct StreamTokenizer<'t, Q: Sequence> {
    trie: &'t Trie<Q>,
    pending: PendingState<Q>,
    literal_limit: Option<usize>,
    phase: Phase,
    ready: VecDeque<StreamEvent<Q>>,
}

impl<'t, Q: Sequence> StreamTokenizer<'t, Q> {
    /// Create a tokenizer over a built prefix tree
    pub fn new(trie: &'t Trie<Q>) -> Self {
        Self {
            trie,
            pending: PendingState::with_capacity(trie.max_phrase_len()),
            literal_limit: None,
            phase: Phase::Collecting,
            ready: VecDeque::new(),
        }
    }

    /// Emit literal runs early once they reach `limit` symbols
    ///
    /// Without a limit, literal runs are emitted only when a phrase follows
    /// them or at a flush, which keeps the output identical to the batch
    /// tokenizer. A limit splits long literal runs into several tokens.
    pub fn with_literal_limit(mut self, limit: Option<usize>) -> Self {
        self.literal_limit = limit.filter(|&limit| limit > 0);
        self
    }

    /// Feed one symbol
    pub fn push(&mut self, symbol: Q::Symbol) {
        self.pending.buffer.push_back(symbol);
        self.run(Resolution::Lazy);
    }

    /// Feed every symbol of a chunk, e.g. one streamed completion delta
    pub fn push_seq(&mut self, chunk: &Q) {
        for symbol in chunk.to_symbols() {
            self.push(symbol);
        }
    }

    /// Resolve everything pending and mark a hard boundary
    pub fn flush(&mut self) {
        self.run(Resolution::Forced);
        self.ready.push_back(StreamEvent::Boundary);
        self.pending.clear();
    }

    /// Resolve everything pending at the end of the stream
    ///
    /// Nothing buffered is lost when the source closes early.
    pub fn finish(&mut self) {
        self.run(Resolution::Forced);
        self.pending.clear();
    }

    /// Feed a symbol or a flush
    pub fn signal(&mut self, signal: Signal<Q::Symbol>) {
        match signal {
            Signal::Symbol(symbol) => self.push(symbol),
            Signal::Flush => self.flush(),
        }
    }

    /// Next produced event, if any
    pub fn next_event(&mut self) -> Option<StreamEvent<Q>> {
        self.ready.pop_front()
    }

    /// Take every produced event
    pub fn drain(&mut self) -> impl Iterator<Item = StreamEvent<Q>> + '_ {
        self.ready.drain(..)
    }

    /// Whether produced events are waiting to be taken
    pub fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Number of unresolved symbols in the lookahead buffer
    pub fn pending_len(&self) -> usize {
        self.pending.buffer.len()
    }

    /// Current phase of the step function
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Drop all pending symbols and undelivered events
    pub fn reset(&mut self) {
        self.pending.clear();
        self.ready.clear();
        self.phase = Phase::Collecting;
    }

    /// Single step function: move through the phases until collecting again
    fn run(&mut self, resolution: Resolution) {
        self.phase = Phase::ResolvingBuffer;
        while self.phase != Phase::Collecting {
            self.phase = match self.phase {
                Phase::ResolvingBuffer => match resolution {
                    Resolution::Lazy => self.resolve_lazy(),
                    Resolution::Forced => self.resolve_forced(),
                },
                Phase::FlushingLiteral => {
                    self.emit_literal();
                    Phase::Collecting
                }
                Phase::Collecting => Phase::Collecting,
            };
        }
        debug_assert!(
            self.pending.buffer.len() <= self.trie.max_phrase_len(),
            "lookahead buffer exceeded the longest phrase"
        );
    }

    /// Resolve the buffer front while later input cannot change the outcome
    fn resolve_lazy(&mut self) -> Phase {
        while !self.pending.buffer.is_empty() {
            let len = self.pending.buffer.len();
            let probe = self.trie.probe(self.pending.buffer.iter());

            // A longer phrase may still extend the buffer: wait for input.
            if probe.is_prefix_of_len(len) && !probe.is_final_of_len(len) {
                break;
            }
            self.resolve_front(probe.longest);
        }
        Phase::Collecting
    }

    /// Resolve the whole buffer; no more input belongs to this segment
    fn resolve_forced(&mut self) -> Phase {
        while !self.pending.buffer.is_empty() {
            let symbols = self.pending.buffer.make_contiguous();
            match self.trie.index_of_any_match(symbols) {
                Some(start) => {
                    // No phrase completes at any earlier offset.
                    self.shift_literal(start);
                    let longest = self.trie.longest_len(self.pending.buffer.make_contiguous());
                    self.resolve_front(longest);
                }
                None => {
                    let len = self.pending.buffer.len();
                    self.shift_literal(len);
                }
            }
        }
        Phase::FlushingLiteral
    }

    fn resolve_front(&mut self, longest: Option<usize>) {
        match longest {
            Some(len) => {
                self.emit_literal();
                let phrase = self.pending.take_phrase(len);
                tracing::trace!(?phrase, "phrase resolved");
                self.ready.push_back(StreamEvent::Token(Token::Phrase(phrase)));
            }
            None => self.shift_literal(1),
        }
    }

    /// Move symbols to the literal run, cutting it at the literal limit
    fn shift_literal(&mut self, count: usize) {
        for _ in 0..count {
            self.pending.shift_literal(1);
            if matches!(self.literal_limit, Some(limit) if self.pending.literal_len() >= limit) {
                self.emit_literal();
            }
        }
    }

    fn emit_literal(&mut self) {
        if let Some(literal) = self.pending.take_literal() {
            self.ready.push_back(StreamEvent::Token(Token::Literal(literal)));
        }
    }
}
