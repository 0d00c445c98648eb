use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::frequency::FrequencyMap;

/// A node of a strict binary Huffman tree. Only leaves carry symbols and
/// every internal node owns exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Heap entry. `seq` breaks frequency ties so the tree shape depends only on
/// the frequency map: leaves are numbered in symbol order, internal nodes in
/// creation order after them.
struct HeapNode<S> {
    freq: u64,
    seq: u64,
    node: Box<Node<S>>,
}

impl<S> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl<S> Eq for HeapNode<S> {}

impl<S> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest entry first
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A built Huffman tree. Read-only once constructed; the encoder hands it
/// back to the caller so the matching decode can walk it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total frequency, equal to the length of the text the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.freq()
    }

    /// Number of distinct symbols (leaves).
    pub fn symbol_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Longest root-to-leaf path in edges. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

/// Builds the tree by repeatedly merging the two lightest nodes.
///
/// Returns `None` for an empty map. A map with one entry yields a tree whose
/// root is that single leaf.
pub fn build_huffman_tree<S>(frequencies: &FrequencyMap<S>) -> Option<HuffmanTree<S>>
where
    S: Ord + Clone,
{
    debug!(
        "Building Huffman tree from {} unique symbols",
        frequencies.len()
    );

    let mut freq_vec: Vec<_> = frequencies.iter().collect();
    freq_vec.sort_by(|a, b| a.0.cmp(b.0));

    let mut heap = BinaryHeap::with_capacity(freq_vec.len());
    let mut seq = 0u64;
    for (symbol, &freq) in freq_vec {
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf {
                symbol: symbol.clone(),
                freq,
            }),
        });
        seq += 1;
    }
    debug!("Initial heap size: {}", heap.len());

    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };

        let freq = left.freq + right.freq;
        trace!(
            "Merging nodes #{} ({}) and #{} ({}) into #{} ({})",
            left.seq, left.freq, right.seq, right.freq, seq, freq
        );
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    }

    let root = heap.pop().map(|n| *n.node)?;
    debug!("Tree construction complete, total weight {}", root.freq());
    Some(HuffmanTree { root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;

    fn internal_count<S>(node: &Node<S>) -> usize {
        match node {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + internal_count(left) + internal_count(right),
        }
    }

    fn check_sums<S>(node: &Node<S>) {
        if let Node::Internal { freq, left, right } = node {
            assert_eq!(*freq, left.freq() + right.freq());
            check_sums(left);
            check_sums(right);
        }
    }

    #[test]
    fn empty_map_builds_nothing() {
        let freq: FrequencyMap<char> = FrequencyMap::new();
        assert!(build_huffman_tree(&freq).is_none());
    }

    #[test]
    fn single_symbol_tree_is_a_leaf() {
        let freq = count_frequencies("aaaaa".chars());
        let tree = build_huffman_tree(&freq).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root().symbol(), Some(&'a'));
        assert_eq!(tree.weight(), 5);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.symbol_count(), 1);
    }

    #[test]
    fn tree_is_full_and_weights_add_up() {
        let text = "The bird is the word";
        let freq = count_frequencies(text.chars());
        let tree = build_huffman_tree(&freq).unwrap();

        assert_eq!(tree.weight(), text.chars().count() as u64);
        assert_eq!(tree.symbol_count(), freq.len());
        assert_eq!(internal_count(tree.root()), freq.len() - 1);
        check_sums(tree.root());
    }

    #[test]
    fn ties_break_on_symbol_order() {
        // b(4) and a(5) merge first, then c(5) joins the 9-weight node
        let freq = count_frequencies("aaaaabbbbccccc".chars());
        let tree = build_huffman_tree(&freq).unwrap();

        let Node::Internal { freq, left, right } = tree.root() else {
            panic!("root should be internal");
        };
        assert_eq!(*freq, 14);
        assert_eq!(left.symbol(), Some(&'c'));
        let Node::Internal { left, right, .. } = &**right else {
            panic!("right child should be internal");
        };
        assert_eq!(left.symbol(), Some(&'b'));
        assert_eq!(right.symbol(), Some(&'a'));
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn shape_does_not_depend_on_map_iteration_order() {
        let text = "abcdefgh abcdefgh aabbccdd";
        let first = build_huffman_tree(&count_frequencies(text.chars())).unwrap();
        for _ in 0..8 {
            let again = build_huffman_tree(&count_frequencies(text.chars())).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn skewed_frequencies_make_a_deep_tree() {
        // Fibonacci-like weights force a chain
        let mut freq = FrequencyMap::new();
        for (symbol, weight) in [('a', 1), ('b', 1), ('c', 2), ('d', 3), ('e', 5), ('f', 8)] {
            freq.insert(symbol, weight);
        }
        let tree = build_huffman_tree(&freq).unwrap();
        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.weight(), 20);
    }
}
