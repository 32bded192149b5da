use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::config::MAX_SCALE;

/// Code points treated as spacing-sensitive.
const MYANMAR_BLOCK: RangeInclusive<char> = '\u{1000}'..='\u{109F}';

/// Returns true when `text` contains any character from the Myanmar block.
///
/// Inserting spacers between Myanmar clusters breaks glyph shaping. Other
/// scripts with the same problem are not detected.
pub fn is_complex_script(text: &str) -> bool {
    text.chars().any(|ch| MYANMAR_BLOCK.contains(&ch))
}

/// Turns clusters into display units, padding every non-whitespace cluster
/// with `scale - 1` trailing spaces. Scales above [`MAX_SCALE`] are capped.
///
/// Clusters are returned untouched when `scale <= 1` or `complex_script` is set.
pub fn build_units<'a>(
    clusters: &[&'a str],
    scale: usize,
    complex_script: bool,
) -> Vec<Cow<'a, str>> {
    if scale <= 1 || complex_script {
        return clusters.iter().map(|cluster| Cow::Borrowed(*cluster)).collect();
    }

    let spacer = " ".repeat(scale.min(MAX_SCALE) - 1);
    clusters
        .iter()
        .map(|cluster| {
            if cluster.chars().all(char::is_whitespace) {
                Cow::Borrowed(*cluster)
            } else {
                Cow::Owned(format!("{cluster}{spacer}"))
            }
        })
        .collect()
}
