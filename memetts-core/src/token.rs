//! Tokens produced by the tokenizers

use crate::sequence::Sequence;

/// One piece of segmented input
///
/// Concatenating the sequences of all tokens of one input reproduces it
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "text", rename_all = "lowercase")
)]
pub enum Token<Q> {
    /// A dictionary phrase matched at this position
    Phrase(Q),
    /// A maximal run of symbols that matched no phrase
    Literal(Q),
}

impl<Q> Token<Q> {
    /// The symbols covered by this token
    pub fn as_seq(&self) -> &Q {
        match self {
            Token::Phrase(seq) | Token::Literal(seq) => seq,
        }
    }

    /// Unwrap the covered symbols
    pub fn into_inner(self) -> Q {
        match self {
            Token::Phrase(seq) | Token::Literal(seq) => seq,
        }
    }

    /// Whether the token is a dictionary match
    pub fn is_phrase(&self) -> bool {
        matches!(self, Token::Phrase(_))
    }
}

/// Concatenate the sequences of `tokens` back into one input
pub fn concat<'a, Q, I>(tokens: I) -> Q
where
    Q: Sequence + 'a,
    I: IntoIterator<Item = &'a Token<Q>>,
{
    let mut joined = Q::default();
    for token in tokens {
        for symbol in token.as_seq().to_symbols() {
            joined.push_symbol(symbol);
        }
    }
    joined
}

/// Signal delivered to the streaming tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<S> {
    /// Next input symbol
    Symbol(S),
    /// Out-of-band separator: resolve everything pending now
    Flush,
}

impl<S> From<S> for Signal<S> {
    fn from(symbol: S) -> Self {
        Signal::Symbol(symbol)
    }
}

/// Event produced by the streaming tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "event", content = "token", rename_all = "lowercase")
)]
pub enum StreamEvent<Q> {
    /// A resolved token
    Token(Token<Q>),
    /// A flush was processed; nothing before it can join anything after it
    Boundary,
}

impl<Q> StreamEvent<Q> {
    /// The token carried by this event, if any
    pub fn token(&self) -> Option<&Token<Q>> {
        match self {
            StreamEvent::Token(token) => Some(token),
            StreamEvent::Boundary => None,
        }
    }

    /// Convert into the carried token, if any
    pub fn into_token(self) -> Option<Token<Q>> {
        match self {
            StreamEvent::Token(token) => Some(token),
            StreamEvent::Boundary => None,
        }
    }
}
