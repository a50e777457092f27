use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// Occurrence counts keyed by symbol
/// ([a Unicode grapheme cluster](http://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundaries)
/// borrowed from the input).
pub type Frequencies<'a> = HashMap<&'a str, usize>;

/// Splits the input into its symbols.
pub fn symbols(s: &str) -> impl Iterator<Item = &str> {
    UnicodeSegmentation::graphemes(s, true)
}

/// Counts how many times each symbol occurs in the input.
///
/// # Examples
///
/// ```
/// let freqs = huffman_report::count_frequencies("huffman").unwrap();
///
/// assert_eq!(freqs.len(), 6);
/// assert_eq!(freqs["f"], 2);
/// assert_eq!(freqs["h"], 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when the input holds no symbols.
///
/// ```
/// use huffman_report::{count_frequencies, Error};
///
/// assert_eq!(count_frequencies(""), Err(Error::EmptyInput));
/// ```
pub fn count_frequencies(s: &str) -> Result<Frequencies<'_>> {
    let mut freq = Frequencies::new();
    for g in symbols(s) {
        *(freq.entry(g).or_insert(0)) += 1;
    }
    if freq.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(freq)
}

/// Orders frequency entries by ascending weight, then by symbol.
///
/// Hash map iteration order changes from run to run; sorting before the
/// entries reach the heap keeps the resulting tree reproducible.
pub fn sorted<'a>(frequencies: &Frequencies<'a>) -> Vec<(&'a str, usize)> {
    let mut entries = frequencies
        .iter()
        .map(|(&s, &w)| (s, w))
        .collect::<Vec<(&str, usize)>>();
    entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count() {
        assert_eq!(count_frequencies(""), Err(Error::EmptyInput));
        assert_eq!(
            count_frequencies("a").unwrap(),
            vec![("a", 1)].into_iter().collect::<Frequencies>()
        );
        assert_eq!(
            count_frequencies("aaabc").unwrap(),
            vec![("a", 3), ("b", 1), ("c", 1)].into_iter().collect::<Frequencies>()
        );
        assert_eq!(
            count_frequencies("caaab").unwrap(),
            vec![("a", 3), ("b", 1), ("c", 1)].into_iter().collect::<Frequencies>()
        );
        // One grapheme cluster, two code points.
        assert_eq!(
            count_frequencies("ضَ").unwrap(),
            vec![("ضَ", 1)].into_iter().collect::<Frequencies>()
        );
    }

    #[test]
    fn sort_order() {
        let freqs = count_frequencies("ccbbbaad").unwrap();
        assert_eq!(sorted(&freqs), vec![("d", 1), ("a", 2), ("c", 2), ("b", 3)]);
    }
}
