//! Longest-match phrase segmentation for a meme soundboard
//!
//! This crate finds known trigger phrases in text so that a caller can play
//! the matching clip and speak everything else. A prefix tree built from a
//! phrase dictionary drives two tokenizers:
//!
//! - the **batch** tokenizer splits a complete input;
//! - the **streaming** tokenizer splits an open-ended symbol stream (for
//!   example a chat completion arriving token by token) with lookahead
//!   bounded by the longest phrase, and produces exactly the batch result.
//!
//! Both apply greedy longest-match: when phrases share a prefix, the longest
//! one that fits always wins. Concatenating the emitted tokens reproduces the
//! input.
//!
//! # Example
//!
//! ```rust
//! use memetts_core::{Classified, Dictionary, Segmenter, Token};
//!
//! let dictionary: Dictionary<String, &str> = [
//!     ("我不是".to_string(), "clips/not_me.mp3"),
//!     ("我不是神鹰".to_string(), "clips/not_eagle.mp3"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let segmenter = Segmenter::new(dictionary);
//! let tokens = segmenter.split(&"他说我不是神鹰啊".to_string());
//!
//! assert_eq!(tokens[1], Token::Phrase("我不是神鹰".to_string()));
//! assert_eq!(
//!     segmenter.classify(&tokens[1]),
//!     Classified::Clip(&"clips/not_eagle.mp3")
//! );
//! assert_eq!(segmenter.classify(&tokens[0]), Classified::Speech);
//! ```

pub mod config;
pub mod dictionary;
pub mod dynamic;
pub mod error;
pub mod segmenter;
pub mod sequence;
pub mod token;
pub mod tokenizer;
pub mod trie;

pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use dictionary::Dictionary;
pub use dynamic::{AnySequence, AnyTrie};
pub use error::{ConfigError, Error, Result, TrieError};
pub use segmenter::{Classified, Segmenter};
pub use sequence::{Sequence, SequenceKind};
pub use token::{concat, Signal, StreamEvent, Token};
pub use tokenizer::reference;
pub use tokenizer::{
    split, split_stream, split_stream_with_separator, split_with_trie, Phase, SplitStream,
    StreamTokenizer,
};
pub use trie::{Probe, Trie};
