//! Brute-force tokenizers used to cross-check the trie-based ones
//!
//! No prefix tree: every candidate substring is checked against a hash set,
//! longest first. Quadratic in the longest phrase length, kept only for tests
//! and benchmarks.

use std::collections::HashSet;

use crate::sequence::Sequence;
use crate::token::{Signal, StreamEvent, Token};

/// Split `text` by trying every candidate length, longest first
pub fn split<Q: Sequence>(text: &Q, phrases: &HashSet<Q>) -> Vec<Token<Q>> {
    let symbols = text.to_symbols();
    split_symbols(&symbols, phrases)
}

fn split_symbols<Q: Sequence>(symbols: &[Q::Symbol], phrases: &HashSet<Q>) -> Vec<Token<Q>> {
    let max_len = phrases.iter().map(|p| p.symbol_count()).max().unwrap_or(0);
    let mut tokens = Vec::new();
    let mut literal = Q::default();
    let mut literal_len = 0;
    let mut start = 0;

    while start < symbols.len() {
        let longest_end = (start + max_len).min(symbols.len());
        let found = (start + 1..=longest_end)
            .rev()
            .map(|end| Q::from_symbols(&symbols[start..end]))
            .find(|candidate| phrases.contains(candidate));

        match found {
            Some(phrase) => {
                if literal_len > 0 {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    literal_len = 0;
                }
                start += phrase.symbol_count();
                tokens.push(Token::Phrase(phrase));
            }
            None => {
                literal.push_symbol(symbols[start].clone());
                literal_len += 1;
                start += 1;
            }
        }
    }

    if literal_len > 0 {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Collect each flush-delimited segment and split it with [`split`]
pub fn split_stream<Q, I>(source: I, phrases: &HashSet<Q>) -> Vec<StreamEvent<Q>>
where
    Q: Sequence,
    I: IntoIterator<Item = Signal<Q::Symbol>>,
{
    let mut events = Vec::new();
    let mut segment = Vec::new();

    for signal in source {
        match signal {
            Signal::Symbol(symbol) => segment.push(symbol),
            Signal::Flush => {
                events.extend(
                    split_symbols(&segment, phrases)
                        .into_iter()
                        .map(StreamEvent::Token),
                );
                events.push(StreamEvent::Boundary);
                segment.clear();
            }
        }
    }
    events.extend(
        split_symbols(&segment, phrases)
            .into_iter()
            .map(StreamEvent::Token),
    );
    events
}
