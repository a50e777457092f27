use tracing::debug;

use crate::error::{Error, Result};
use crate::frequency::{self, Frequencies};
use crate::heap::{MinHeap, Weighted};

/// A node of the Huffman tree.
///
/// Internal nodes own both of their children and weigh exactly as much as
/// the two together. There are no nodes with a single child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    Leaf {
        symbol: &'a str,
        weight: usize,
    },
    Internal {
        /// The symbols below this node, left to right. Diagnostic only.
        label: String,
        weight: usize,
        left: Box<Node<'a>>,
        right: Box<Node<'a>>,
    },
}

impl<'a> Node<'a> {
    pub fn leaf(symbol: &'a str, weight: usize) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Combines two subtrees under a new internal node, `left` taking the `0` branch.
    pub fn merge(left: Self, right: Self) -> Self {
        let label = format!("{}{}", left.label(), right.label());
        Node::Internal {
            label,
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Node::Leaf { symbol, .. } => *symbol,
            Node::Internal { label, .. } => label.as_str(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn children(&self) -> Option<(&Node<'a>, &Node<'a>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Number of leaves, i.e. distinct symbols, in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((l, r)) => l.leaf_count() + r.leaf_count(),
        }
    }

    /// Checks recursively that every internal node weighs as much as its children.
    pub fn is_consistent(&self) -> bool {
        match self {
            Node::Leaf { .. } => true,
            Node::Internal {
                weight, left, right, ..
            } => {
                *weight == left.weight() + right.weight()
                    && left.is_consistent()
                    && right.is_consistent()
            }
        }
    }
}

impl Weighted for Node<'_> {
    fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Builds the Huffman tree for the given symbol frequencies and returns its root.
///
/// # Examples
///
/// ```
/// use huffman_report::{build_tree, count_frequencies, Weighted};
///
/// let freqs = count_frequencies("abab").unwrap();
/// let root = build_tree(&freqs).unwrap();
/// assert_eq!(root.weight(), 4);
/// assert_eq!(root.leaf_count(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when there are no frequencies.
pub fn build_tree<'a>(frequencies: &Frequencies<'a>) -> Result<Node<'a>> {
    if frequencies.is_empty() {
        return Err(Error::EmptyInput);
    }
    let entries = frequency::sorted(frequencies);
    let mut heap = MinHeap::with_capacity(entries.len());
    for (symbol, weight) in entries {
        heap.insert(Node::leaf(symbol, weight));
    }
    merge(heap)
}

// Huffman's forward step: the two lightest subtrees are combined into one
// that weighs as much as both and goes back into the heap, until a single
// tree is left.
pub(crate) fn merge(mut heap: MinHeap<Node<'_>>) -> Result<Node<'_>> {
    if heap.is_empty() {
        return Err(Error::EmptyInput);
    }
    while heap.len() > 1 {
        let a = heap.extract_min()?;
        let b = heap.extract_min()?;
        debug!(
            left = a.label(),
            left_weight = a.weight(),
            right = b.label(),
            right_weight = b.weight(),
            weight = a.weight() + b.weight(),
            "merging subtrees"
        );
        heap.insert(Node::merge(a, b));
    }
    heap.into_single().ok_or(Error::EmptyContainer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;

    #[test]
    fn weight() {
        assert_eq!(Node::leaf("s", 3).weight(), 3);
        assert_eq!(
            Node::merge(
                Node::leaf("a", 2),
                Node::merge(Node::leaf("b", 1), Node::leaf("c", 1))
            )
            .weight(),
            4
        );
    }

    #[test]
    fn label() {
        let node = Node::merge(
            Node::leaf("a", 2),
            Node::merge(Node::leaf("b", 1), Node::leaf("c", 1)),
        );
        assert_eq!(node.label(), "abc");
        assert!(!node.is_leaf());
        assert_eq!(node.leaf_count(), 3);
        assert!(node.is_consistent());
    }

    #[test]
    fn empty() {
        assert_eq!(build_tree(&Frequencies::new()), Err(Error::EmptyInput));
        assert_eq!(merge(MinHeap::new()), Err(Error::EmptyInput));
    }

    #[test]
    fn single_symbol() {
        let freqs = count_frequencies("aaaa").unwrap();
        assert_eq!(build_tree(&freqs).unwrap(), Node::leaf("a", 4));
    }

    #[test]
    fn two_equal_symbols() {
        let freqs = count_frequencies("abab").unwrap();
        let root = build_tree(&freqs).unwrap();
        assert_eq!(root.weight(), 4);
        let (l, r) = root.children().unwrap();
        assert!(l.is_leaf() && r.is_leaf());
        assert_eq!((l.weight(), r.weight()), (2, 2));
    }

    #[test]
    fn lighter_subtree_goes_left() {
        let freqs = count_frequencies("aaabc").unwrap();
        assert_eq!(
            build_tree(&freqs).unwrap(),
            Node::merge(
                Node::merge(Node::leaf("b", 1), Node::leaf("c", 1)),
                Node::leaf("a", 3)
            )
        );
    }

    #[test]
    fn root_weighs_total() {
        let input = "aabbbccccddddeeeeeffffffggggggggggggggggggggggggggggggggggggggggggg";
        let freqs = count_frequencies(input).unwrap();
        let root = build_tree(&freqs).unwrap();
        assert_eq!(root.weight(), input.len());
        assert_eq!(root.leaf_count(), 7);
        assert!(root.is_consistent());
    }
}
