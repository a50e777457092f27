//! # Huffman report
//!
//! `huffman-report` builds minimum-redundancy prefix codes for the symbols of a
//! text using the [Huffman coding](https://en.wikipedia.org/wiki/Huffman_coding)
//! algorithm, and reports how many bits the text would take once encoded.
//!
//! The pipeline runs in three steps, each available on its own:
//!
//! 1. [`count_frequencies`] counts the symbols (grapheme clusters) of the input,
//! 2. [`build_tree`] merges the two lightest subtrees of a [`MinHeap`] until one
//!    tree is left,
//! 3. [`build_code_table`] reads every symbol's code off the path to its leaf.
//!
//! ```
//! use huffman_report::*;
//!
//! let freqs = count_frequencies("abab").unwrap();
//! let root = build_tree(&freqs).unwrap();
//! let table = build_code_table(&root);
//! let report = SizeReport::new("abab", &table).unwrap();
//!
//! assert_eq!(report.original_bits, 32);
//! assert_eq!(report.encoded_bits, 4);
//! ```
//!
//! ## References
//!
//! * _Hamming, R.R., 1997. Art of doing science and engineering: Learning to learn. CRC Press._
//! * _Huffman, D.A., 1952. A method for the construction of minimum-redundancy codes. Proceedings of the IRE, 40(9), pp.1098-1101._

pub mod code;
pub mod error;
pub mod frequency;
pub mod heap;
pub mod report;
pub mod tree;

pub use code::{build_code_table, code_string, is_prefix_free, Code, CodeTable};
pub use error::{Error, Result};
pub use frequency::{count_frequencies, Frequencies};
pub use heap::{MinHeap, Weighted};
pub use report::{codes_by_length, counts_line, render_tree, SizeReport};
pub use tree::{build_tree, Node};

/// Runs the whole pipeline on `input` and returns its code table.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when the input holds no symbols.
pub fn code_table(input: &str) -> Result<CodeTable> {
    let frequencies = count_frequencies(input)?;
    let root = build_tree(&frequencies)?;
    Ok(build_code_table(&root))
}
