//! Base + combining mark segmentation.
//!
//! This is deliberately simpler than UAX #29 extended grapheme clusters:
//! ZWJ sequences and regional indicator pairs are split per code point.

use unicode_normalization::char::canonical_combining_class;

/// Returns true when `ch` has a non-zero canonical combining class.
pub fn is_combining(ch: char) -> bool {
    canonical_combining_class(ch) != 0
}

/// Splits `text` into clusters of one base character followed by any
/// combining marks. Concatenating the result reproduces `text` exactly.
///
/// A combining mark at the very start of `text` opens the first cluster.
pub fn segment(text: &str) -> Vec<&str> {
    let mut clusters = Vec::new();
    let mut start: Option<usize> = None;

    for (index, ch) in text.char_indices() {
        match start {
            None => start = Some(index),
            Some(_) if is_combining(ch) => {}
            Some(open) => {
                clusters.push(&text[open..index]);
                start = Some(index);
            }
        }
    }

    if let Some(open) = start {
        clusters.push(&text[open..]);
    }

    clusters
}
