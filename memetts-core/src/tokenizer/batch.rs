//! Batch tokenizer over a complete input

use crate::dictionary::Dictionary;
use crate::sequence::Sequence;
use crate::token::Token;
use crate::trie::Trie;

/// Split `text` into phrase matches and literal runs
///
/// Builds a prefix tree from `dictionary` on every call; reuse a tree with
/// [`split_with_trie`] when splitting many inputs.
pub fn split<Q: Sequence, L>(text: &Q, dictionary: &Dictionary<Q, L>) -> Vec<Token<Q>> {
    split_with_trie(text, &Trie::from_dictionary(dictionary))
}

/// Split `text` using an already built prefix tree
///
/// At every position the longest stored phrase starting there wins; when no
/// phrase starts there, the symbol joins the current literal run.
pub fn split_with_trie<Q: Sequence>(text: &Q, trie: &Trie<Q>) -> Vec<Token<Q>> {
    let symbols = text.to_symbols();
    if symbols.is_empty() {
        return Vec::new();
    }
    if trie.is_empty() {
        return vec![Token::Literal(text.clone())];
    }

    let mut tokens = Vec::new();
    let mut literal_start: Option<usize> = None;
    let mut cursor = 0;

    while cursor < symbols.len() {
        match trie.longest_len(&symbols[cursor..]) {
            Some(len) => {
                if let Some(start) = literal_start.take() {
                    tokens.push(Token::Literal(Q::from_symbols(&symbols[start..cursor])));
                }
                tokens.push(Token::Phrase(Q::from_symbols(
                    &symbols[cursor..cursor + len],
                )));
                cursor += len;
            }
            None => {
                literal_start.get_or_insert(cursor);
                cursor += 1;
            }
        }
    }

    if let Some(start) = literal_start {
        tokens.push(Token::Literal(Q::from_symbols(&symbols[start..])));
    }

    tracing::trace!(symbols = symbols.len(), tokens = tokens.len(), "batch split");
    tokens
}
