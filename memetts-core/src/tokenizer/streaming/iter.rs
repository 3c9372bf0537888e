//! Pull-mode adapters over the streaming tokenizer

use std::iter::FusedIterator;

use super::StreamTokenizer;
use crate::sequence::Sequence;
use crate::token::{Signal, StreamEvent};
use crate::trie::Trie;

/// Lazy event sequence over a signal source
///
/// Pulls the next signal only when no produced event is waiting, and runs
/// the end-of-stream resolution once the source is exhausted.
#[derive(Debug)]
pub struct SplitStream<'t, Q: Sequence, I> {
    tokenizer: StreamTokenizer<'t, Q>,
    source: I,
    exhausted: bool,
}

impl<'t, Q: Sequence, I> SplitStream<'t, Q, I> {
    /// Wrap a configured tokenizer around a source
    pub fn new(tokenizer: StreamTokenizer<'t, Q>, source: I) -> Self {
        Self {
            tokenizer,
            source,
            exhausted: false,
        }
    }

    /// Number of symbols still waiting for a decision
    pub fn pending_len(&self) -> usize {
        self.tokenizer.pending_len()
    }
}

impl<Q, I> Iterator for SplitStream<'_, Q, I>
where
    Q: Sequence,
    I: Iterator<Item = Signal<Q::Symbol>>,
{
    type Item = StreamEvent<Q>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.tokenizer.next_event() {
                return Some(event);
            }
            if self.exhausted {
                return None;
            }
            match self.source.next() {
                Some(signal) => self.tokenizer.signal(signal),
                None => {
                    self.tokenizer.finish();
                    self.exhausted = true;
                }
            }
        }
    }
}

impl<Q, I> FusedIterator for SplitStream<'_, Q, I>
where
    Q: Sequence,
    I: Iterator<Item = Signal<Q::Symbol>>,
{
}

/// Maps a reserved in-band symbol to [`Signal::Flush`]
#[derive(Debug, Clone)]
pub struct Separated<I, S> {
    symbols: I,
    separator: S,
}

impl<I, S> Iterator for Separated<I, S>
where
    I: Iterator<Item = S>,
    S: PartialEq,
{
    type Item = Signal<S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.symbols.next().map(|symbol| {
            if symbol == self.separator {
                Signal::Flush
            } else {
                Signal::Symbol(symbol)
            }
        })
    }
}

/// Tokenize a signal source lazily
pub fn split_stream<'t, Q, I>(source: I, trie: &'t Trie<Q>) -> SplitStream<'t, Q, I::IntoIter>
where
    Q: Sequence,
    I: IntoIterator<Item = Signal<Q::Symbol>>,
{
    SplitStream::new(StreamTokenizer::new(trie), source.into_iter())
}

/// Tokenize a plain symbol source, treating `separator` as a flush
///
/// The separator symbol is consumed and never appears in any token, so it
/// can never be part of a phrase match.
pub fn split_stream_with_separator<'t, Q, I>(
    symbols: I,
    trie: &'t Trie<Q>,
    separator: Q::Symbol,
) -> SplitStream<'t, Q, Separated<I::IntoIter, Q::Symbol>>
where
    Q: Sequence,
    I: IntoIterator<Item = Q::Symbol>,
{
    let source = Separated {
        symbols: symbols.into_iter(),
        separator,
    };
    SplitStream::new(StreamTokenizer::new(trie), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn trie(phrases: &[&str]) -> Trie<String> {
        Trie::build(phrases.iter().map(|p| p.to_string())).unwrap()
    }

    #[test]
    fn test_source_closed_without_separator_flushes() {
        let trie = trie(&["abcd"]);
        let events: Vec<_> = split_stream("ab".chars().map(Signal::Symbol), &trie).collect();
        assert_eq!(
            events,
            vec![StreamEvent::Token(Token::Literal("ab".to_string()))]
        );
    }

    #[test]
    fn test_in_band_separator() {
        let trie = trie(&["哈哈"]);
        let events: Vec<_> =
            split_stream_with_separator("哈哈好\n哈".chars(), &trie, '\n').collect();
        assert_eq!(
            events,
            vec![
                StreamEvent::Token(Token::Phrase("哈哈".to_string())),
                StreamEvent::Token(Token::Literal("好".to_string())),
                StreamEvent::Boundary,
                StreamEvent::Token(Token::Literal("哈".to_string())),
            ]
        );
    }

    #[test]
    fn test_pulls_lazily() {
        let trie = trie(&["ab"]);
        let mut pulled = 0;
        let source = "abxxxxxx".chars().inspect(|_| pulled += 1).map(Signal::from);
        let mut stream = split_stream(source, &trie);

        assert_eq!(
            stream.next(),
            Some(StreamEvent::Token(Token::Phrase("ab".to_string())))
        );
        assert_eq!(stream.pending_len(), 0);
        drop(stream);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_fused_after_end() {
        let trie = trie(&["a"]);
        let mut stream = split_stream("a".chars().map(Signal::Symbol), &trie);
        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }
}
