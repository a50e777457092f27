use std::collections::HashMap;

use bitvec::prelude::*;
use tracing::trace;

use crate::tree::Node;

/// A symbol's code is represented as
/// a [`bitvec::vec::BitVec`](https://docs.rs/bitvec/1/bitvec/vec/struct.BitVec.html), a contiguous
/// array of bits.
pub type Code = BitVec;
/// Maps every symbol of the tree to its [`Code`].
pub type CodeTable = HashMap<String, Code>;

const ZERO: bool = false;
const ONE: bool = true;

/// Walks the tree from the root and records the code of every leaf: the
/// path taken to reach it, `0` for each left branch and `1` for each right one.
///
/// A tree made of a single leaf gives its symbol the code `0`.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use huffman_report::{build_code_table, Node};
///
/// let root = Node::merge(
///     Node::leaf("a", 3),
///     Node::merge(Node::leaf("b", 1), Node::leaf("c", 2)),
/// );
/// let table = build_code_table(&root);
/// assert_eq!(table["a"], bitvec![0]);
/// assert_eq!(table["b"], bitvec![1, 0]);
/// assert_eq!(table["c"], bitvec![1, 1]);
/// ```
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut codes = CodeTable::new();
    if let Node::Leaf { symbol, .. } = root {
        codes.insert(symbol.to_string(), Code::repeat(ZERO, 1));
        return codes;
    }
    split(root, &Code::new(), &mut codes);
    codes
}

// Huffman's backward step: a node is split into its two subtrees, the left
// one extending the prefix with `0` and the right one with `1`.
fn split(node: &Node, prefix: &BitSlice, codes: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!(symbol = *symbol, code = %code_string(prefix), "assigned code");
            codes.insert(symbol.to_string(), prefix.to_bitvec());
        }
        Node::Internal { left, right, .. } => {
            let mut lprefix = prefix.to_bitvec();
            lprefix.push(ZERO);
            split(left, &lprefix, codes);

            let mut rprefix = prefix.to_bitvec();
            rprefix.push(ONE);
            split(right, &rprefix, codes);
        }
    }
}

/// Renders a code as a string of `0` and `1` characters.
///
/// ```
/// use bitvec::prelude::*;
///
/// assert_eq!(huffman_report::code_string(&bitvec![1, 0, 1]), "101");
/// ```
pub fn code_string(code: &BitSlice) -> String {
    code.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}

/// Checks that no code of the table starts with another one.
pub fn is_prefix_free(table: &CodeTable) -> bool {
    table.iter().all(|(k1, v1)| {
        table
            .iter()
            .all(|(k2, v2)| k1 == k2 || !v2.starts_with(v1.as_bitslice()))
    })
}
