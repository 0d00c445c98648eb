use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::frequency::FrequencyMap;
use crate::tree::{HuffmanTree, Node};

/// Symbol to its code, a string of `'0'`/`'1'` tokens.
pub type CodeTable<S> = HashMap<S, String>;

/// Code assigned when the whole tree is one leaf. The empty path would
/// give every occurrence a zero-length code.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Derives the code table: `'0'` per left descent, `'1'` per right descent.
/// No tree means no data and yields an empty table.
pub fn build_code_table<S>(tree: Option<&HuffmanTree<S>>) -> CodeTable<S>
where
    S: Eq + Hash + Clone + Debug,
{
    let mut table = CodeTable::new();
    let Some(tree) = tree else {
        return table;
    };

    match tree.root() {
        Node::Leaf { symbol, .. } => {
            trace!("Single-leaf tree, assigning {:?} : '{}'", symbol, SINGLE_SYMBOL_CODE);
            table.insert(symbol.clone(), SINGLE_SYMBOL_CODE.to_string());
        }
        root => assign_codes(root, String::new(), &mut table),
    }

    debug!("Code table built with {} entries", table.len());
    table
}

fn assign_codes<S>(node: &Node<S>, prefix: String, table: &mut CodeTable<S>)
where
    S: Eq + Hash + Clone + Debug,
{
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?} : '{}'", symbol, prefix);
            table.insert(symbol.clone(), prefix);
        }
        Node::Internal { left, right, .. } => {
            assign_codes(left, format!("{}0", prefix), table);
            assign_codes(right, format!("{}1", prefix), table);
        }
    }
}

/// True when no code is a prefix of another (or equal to another).
pub fn is_prefix_free<S>(table: &CodeTable<S>) -> bool {
    let mut codes: Vec<&str> = table.values().map(String::as_str).collect();
    codes.sort_unstable();
    // after sorting, a prefix always sits right before some code it prefixes
    codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
}

/// Sum of `freq * code length`, i.e. the length of the encoded stream.
pub fn weighted_length<S>(table: &CodeTable<S>, freq: &FrequencyMap<S>) -> usize
where
    S: Eq + Hash,
{
    freq.iter()
        .filter_map(|(symbol, &count)| table.get(symbol).map(|code| code.len() * count as usize))
        .sum()
}

/// Entries ordered by code length, then symbol.
pub fn sorted_entries<S: Ord>(table: &CodeTable<S>) -> Vec<(&S, &str)> {
    let mut entries: Vec<(&S, &str)> = table.iter().map(|(s, c)| (s, c.as_str())).collect();
    entries.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.0.cmp(b.0)));
    entries
}
