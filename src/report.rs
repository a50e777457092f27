//! Summaries of a Huffman code: the tree diagram, the code listing and the
//! size comparison against a fixed eight bits per symbol.

use std::fmt;

use console::Style;
use tracing::info;

use crate::code::{Code, CodeTable};
use crate::error::{Error, Result};
use crate::frequency::{self, Frequencies};
use crate::tree::Node;

/// Bits each symbol takes before encoding.
pub const BITS_PER_SYMBOL: usize = 8;

/// Size of an input before and after encoding it with a code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub symbols: usize,
    pub original_bits: usize,
    pub encoded_bits: usize,
}

impl SizeReport {
    /// Measures `input` against `table`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCode`] if a symbol of the input has no code.
    pub fn new(input: &str, table: &CodeTable) -> Result<Self> {
        let mut symbols = 0;
        let mut encoded_bits = 0;
        for g in frequency::symbols(input) {
            let code = table
                .get(g)
                .ok_or_else(|| Error::MissingCode(g.to_string()))?;
            symbols += 1;
            encoded_bits += code.len();
        }
        let report = SizeReport {
            symbols,
            original_bits: symbols * BITS_PER_SYMBOL,
            encoded_bits,
        };
        info!(
            symbols = report.symbols,
            original_bits = report.original_bits,
            encoded_bits = report.encoded_bits,
            "measured encoded size"
        );
        Ok(report)
    }

    /// Same as [`SizeReport::new`], computed from counts instead of the input text.
    pub fn from_frequencies(frequencies: &Frequencies, table: &CodeTable) -> Result<Self> {
        let mut symbols = 0;
        let mut encoded_bits = 0;
        for (&g, &count) in frequencies {
            let code = table
                .get(g)
                .ok_or_else(|| Error::MissingCode(g.to_string()))?;
            symbols += count;
            encoded_bits += count * code.len();
        }
        Ok(SizeReport {
            symbols,
            original_bits: symbols * BITS_PER_SYMBOL,
            encoded_bits,
        })
    }

    pub fn saved_bits(&self) -> usize {
        self.original_bits.saturating_sub(self.encoded_bits)
    }

    /// Encoded size as a fraction of the original size.
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_bits as f64
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size: {} bits", self.original_bits)?;
        write!(f, "Encoded size: {} bits", self.encoded_bits)
    }
}

/// Lists the table's entries from the shortest code to the longest; codes of
/// equal length are ordered by symbol.
pub fn codes_by_length(table: &CodeTable) -> Vec<(&str, &Code)> {
    let mut entries = table
        .iter()
        .map(|(s, c)| (s.as_str(), c))
        .collect::<Vec<(&str, &Code)>>();
    entries.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Formats symbol counts as `a 2 | b 3 | ...`, lightest first.
pub fn counts_line(frequencies: &Frequencies) -> String {
    frequency::sorted(frequencies)
        .iter()
        .map(|(s, w)| format!("{} {}", s, w))
        .collect::<Vec<String>>()
        .join(" | ")
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Branch {
    Root,
    Left,
    Right,
}

/// Draws the tree one node per line, children indented below their parent.
///
/// ```
/// use huffman_report::{render_tree, Node};
///
/// let root = Node::merge(Node::leaf("a", 1), Node::leaf("b", 1));
/// assert_eq!(render_tree(&root, false), "└─ab\n  ├─L:a\n  └─R:b\n");
/// ```
pub fn render_tree(root: &Node, color: bool) -> String {
    let styles = Styles::new(color);
    let mut out = String::new();
    render_node(root, "", Branch::Root, true, &styles, &mut out);
    out
}

struct Styles {
    left: Style,
    right: Style,
}

impl Styles {
    fn new(color: bool) -> Self {
        if color {
            Styles {
                left: Style::new().magenta().force_styling(true),
                right: Style::new().green().force_styling(true),
            }
        } else {
            Styles {
                left: Style::new().force_styling(false),
                right: Style::new().force_styling(false),
            }
        }
    }
}

fn render_node(
    node: &Node,
    indent: &str,
    branch: Branch,
    last: bool,
    styles: &Styles,
    out: &mut String,
) {
    out.push_str(indent);
    let indent = if last {
        out.push_str("└─");
        format!("{}  ", indent)
    } else {
        out.push_str("├─");
        format!("{}| ", indent)
    };
    match branch {
        Branch::Root => {}
        Branch::Left => out.push_str(&styles.left.apply_to("L:").to_string()),
        Branch::Right => out.push_str(&styles.right.apply_to("R:").to_string()),
    }
    out.push_str(node.label());
    out.push('\n');

    if let Some((left, right)) = node.children() {
        render_node(left, &indent, Branch::Left, false, styles, out);
        render_node(right, &indent, Branch::Right, true, styles, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{build_code_table, code_string};
    use crate::frequency::count_frequencies;
    use crate::tree::build_tree;
    use bitvec::prelude::*;

    #[test]
    fn two_symbols() {
        let freqs = count_frequencies("abab").unwrap();
        let table = build_code_table(&build_tree(&freqs).unwrap());
        let report = SizeReport::new("abab", &table).unwrap();
        assert_eq!(
            report,
            SizeReport {
                symbols: 4,
                original_bits: 32,
                encoded_bits: 4,
            }
        );
        assert_eq!(report.saved_bits(), 28);
        assert_eq!(report.ratio(), 0.125);
        assert_eq!(SizeReport::from_frequencies(&freqs, &table).unwrap(), report);
        assert_eq!(
            report.to_string(),
            "Original size: 32 bits\nEncoded size: 4 bits"
        );
    }

    #[test]
    fn reference_input() {
        let input = "aabbbccccddddeeeeeffffffggggggggggggggggggggggggggggggggggggggggggg";
        let freqs = count_frequencies(input).unwrap();
        let table = build_code_table(&build_tree(&freqs).unwrap());
        let report = SizeReport::new(input, &table).unwrap();
        // g: 43 * 1, e and f: (5 + 6) * 3, a b c d: (2 + 3 + 4 + 4) * 4
        assert_eq!(report.encoded_bits, 43 + 33 + 52);
        assert_eq!(report.original_bits, 67 * 8);
    }

    #[test]
    fn missing_code() {
        let mut table = CodeTable::new();
        table.insert("a".to_string(), bitvec![0]);
        assert_eq!(
            SizeReport::new("ab", &table),
            Err(Error::MissingCode("b".to_string()))
        );
        let freqs = count_frequencies("ab").unwrap();
        assert_eq!(
            SizeReport::from_frequencies(&freqs, &table),
            Err(Error::MissingCode("b".to_string()))
        );
    }

    #[test]
    fn sorted_by_length() {
        let mut table = CodeTable::new();
        table.insert("c".to_string(), bitvec![1, 1]);
        table.insert("a".to_string(), bitvec![0]);
        table.insert("b".to_string(), bitvec![1, 0]);
        let listed = codes_by_length(&table)
            .into_iter()
            .map(|(s, c)| format!("{} {}", s, code_string(c)))
            .collect::<Vec<String>>();
        assert_eq!(listed, vec!["a 0", "b 10", "c 11"]);
    }

    #[test]
    fn counts() {
        let freqs = count_frequencies("bbbaac").unwrap();
        assert_eq!(counts_line(&freqs), "c 1 | a 2 | b 3");
    }

    #[test]
    fn tree_diagram() {
        let root = Node::merge(
            Node::leaf("a", 3),
            Node::merge(Node::leaf("b", 1), Node::leaf("c", 2)),
        );
        assert_eq!(
            render_tree(&root, false),
            concat!(
                "└─abc\n",
                "  ├─L:a\n",
                "  └─R:bc\n",
                "    ├─L:b\n",
                "    └─R:c\n",
            )
        );
        let deep = Node::merge(
            Node::merge(Node::leaf("a", 1), Node::leaf("b", 1)),
            Node::leaf("c", 2),
        );
        assert_eq!(
            render_tree(&deep, false),
            concat!(
                "└─abc\n",
                "  ├─L:ab\n",
                "  | ├─L:a\n",
                "  | └─R:b\n",
                "  └─R:c\n",
            )
        );
        assert_eq!(render_tree(&Node::leaf("a", 1), false), "└─a\n");
    }

    #[test]
    fn colored_markers() {
        let root = Node::merge(Node::leaf("a", 1), Node::leaf("b", 1));
        let colored = render_tree(&root, true);
        assert!(colored.contains("\u{1b}["));
        assert_ne!(colored, render_tree(&root, false));
    }
}
