//! Encoding text into a `'0'`/`'1'` bit-string and back.
//!
//! The `try_*` functions report why input was rejected. [`encode`] and
//! [`decode`] collapse every rejection into an absent result.

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, error, warn};

use crate::code_table::{build_code_table, weighted_length};
use crate::error::InvalidInput;
use crate::frequency::count_frequencies;
use crate::tree::{HuffmanTree, Node, build_huffman_tree};

/// Builds a tree for `symbols` and encodes them against it.
pub fn try_encode_symbols<S>(symbols: &[S]) -> Result<(HuffmanTree<S>, String), InvalidInput>
where
    S: Eq + Hash + Ord + Clone + Debug,
{
    if symbols.is_empty() {
        return Err(InvalidInput::EmptyText);
    }

    let freq = count_frequencies(symbols.iter().cloned());
    let tree = build_huffman_tree(&freq).ok_or(InvalidInput::EmptyText)?;
    let table = build_code_table(Some(&tree));

    let mut bits = String::with_capacity(weighted_length(&table, &freq));
    for symbol in symbols {
        if let Some(code) = table.get(symbol) {
            bits.push_str(code);
        } else {
            error!("Symbol {:?} was counted but has no code", symbol);
        }
    }

    debug!(
        "Encoded {} symbols into {} bits ({} distinct)",
        symbols.len(),
        bits.len(),
        table.len()
    );
    Ok((tree, bits))
}

/// Walks `tree` once per token, emitting a symbol and restarting at the root
/// every time a leaf is reached.
pub fn try_decode_symbols<S>(tree: &HuffmanTree<S>, bits: &str) -> Result<Vec<S>, InvalidInput>
where
    S: Clone,
{
    if bits.is_empty() {
        return Err(InvalidInput::EmptyBits);
    }

    let root = tree.root();
    let mut cursor = root;
    let mut pending = 0usize;
    let mut out = Vec::new();

    for (position, token) in bits.chars().enumerate() {
        let go_right = match token {
            '0' => false,
            '1' => true,
            found => {
                let err = InvalidInput::InvalidBit { position, found };
                warn!("{}", err);
                return Err(err);
            }
        };

        // single-leaf tree: every token is one whole code
        if let Node::Leaf { symbol, .. } = root {
            out.push(symbol.clone());
            continue;
        }

        if let Node::Internal { left, right, .. } = cursor {
            cursor = if go_right { right } else { left };
            pending += 1;
        }

        if let Node::Leaf { symbol, .. } = cursor {
            out.push(symbol.clone());
            cursor = root;
            pending = 0;
        }
    }

    if pending > 0 {
        let err = InvalidInput::TruncatedCode { trailing: pending };
        warn!("{}", err);
        return Err(err);
    }

    debug!("Decoded {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}

pub fn try_encode(text: &str) -> Result<(HuffmanTree<char>, String), InvalidInput> {
    let symbols: Vec<char> = text.chars().collect();
    try_encode_symbols(&symbols)
}

pub fn try_decode(tree: &HuffmanTree<char>, bits: &str) -> Result<String, InvalidInput> {
    try_decode_symbols(tree, bits).map(|symbols| symbols.into_iter().collect())
}

/// Returns the tree together with the encoded bits, or `(None, None)` when
/// `text` is absent or empty.
pub fn encode(text: Option<&str>) -> (Option<HuffmanTree<char>>, Option<String>) {
    match text.ok_or(InvalidInput::EmptyText).and_then(try_encode) {
        Ok((tree, bits)) => (Some(tree), Some(bits)),
        Err(e) => {
            warn!("Encode rejected: {}", e);
            (None, None)
        }
    }
}

/// Returns the decoded text, or `None` when either argument is absent or the
/// bits are empty or malformed.
pub fn decode(tree: Option<&HuffmanTree<char>>, bits: Option<&str>) -> Option<String> {
    let result = match (tree, bits) {
        (None, _) => Err(InvalidInput::MissingTree),
        (Some(_), None) => Err(InvalidInput::EmptyBits),
        (Some(tree), Some(bits)) => try_decode(tree, bits),
    };

    match result {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Decode rejected: {}", e);
            None
        }
    }
}
