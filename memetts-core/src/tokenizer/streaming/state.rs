//! Pending state of the streaming tokenizer

use std::collections::VecDeque;

use crate::sequence::Sequence;

/// Where the step function currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next symbol; the buffer holds a viable prefix at most
    Collecting,
    /// Deciding what the front of the buffer is
    ResolvingBuffer,
    /// Emitting the accumulated literal run
    FlushingLiteral,
}

/// How much of the buffer may be decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Only decisions later input cannot change
    Lazy,
    /// No more input for this segment: decide everything
    Forced,
}

/// Unresolved symbols plus the literal run decided so far
#[derive(Debug, Clone)]
pub(crate) struct PendingState<Q: Sequence> {
    pub(crate) buffer: VecDeque<Q::Symbol>,
    literal: Q,
    literal_len: usize,
}

impl<Q: Sequence> PendingState<Q> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            literal: Q::default(),
            literal_len: 0,
        }
    }

    /// Move up to `count` symbols from the buffer front to the literal run
    pub(crate) fn shift_literal(&mut self, count: usize) {
        for _ in 0..count {
            match self.buffer.pop_front() {
                Some(symbol) => {
                    self.literal.push_symbol(symbol);
                    self.literal_len += 1;
                }
                None => break,
            }
        }
    }

    /// Remove `len` symbols from the buffer front as one phrase
    pub(crate) fn take_phrase(&mut self, len: usize) -> Q {
        let phrase = Q::from_symbols(self.buffer.range(..len));
        self.buffer.drain(..len);
        phrase
    }

    /// Take the literal run if it is non-empty
    pub(crate) fn take_literal(&mut self) -> Option<Q> {
        if self.literal_len == 0 {
            return None;
        }
        self.literal_len = 0;
        Some(std::mem::take(&mut self.literal))
    }

    pub(crate) fn literal_len(&self) -> usize {
        self.literal_len
    }

    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
        self.literal = Q::default();
        self.literal_len = 0;
    }
}
