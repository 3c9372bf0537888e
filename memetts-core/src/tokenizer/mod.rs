//! Tokenizers built on the prefix tree
//!
//! - [`batch`]: greedy longest-match over a complete input
//! - [`streaming`]: the same policy over an open-ended symbol stream with
//!   bounded lookahead and explicit flushes
//! - [`reference`]: brute-force versions used to cross-check the two above

pub mod batch;
pub mod reference;
pub mod streaming;

pub use batch::{split, split_with_trie};
pub use streaming::{
    split_stream, split_stream_with_separator, Phase, Separated, SplitStream, StreamTokenizer,
};
