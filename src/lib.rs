//! # huffman_bitstring
//!
//! Huffman coding over in-memory text, producing an unpacked bit-string of
//! `'0'`/`'1'` characters.
//!
//! ```rust
//! use huffman_bitstring::{decode, encode};
//!
//! let (tree, bits) = encode(Some("The bird is the word"));
//! let text = decode(tree.as_ref(), bits.as_deref());
//! assert_eq!(text.as_deref(), Some("The bird is the word"));
//! ```

pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod tree;

pub use code_table::{CodeTable, build_code_table, is_prefix_free};
pub use codec::{decode, encode, try_decode, try_decode_symbols, try_encode, try_encode_symbols};
pub use error::InvalidInput;
pub use frequency::{FrequencyMap, count_frequencies, entropy_from_freq};
pub use tree::{HuffmanTree, Node, build_huffman_tree};
