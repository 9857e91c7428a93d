//! Splitting text into grapheme units.
//!
//! A unit is a base scalar plus the combining marks that follow it. This is
//! deliberately narrower than extended grapheme clusters: only general
//! categories Mn, Mc and Me attach, and no normalization is applied.

use crate::types::GraphemeUnit;

/// Whether `ch` attaches to the preceding base (General_Category=Mark).
pub fn is_combining_mark(ch: char) -> bool {
    unicode_normalization::char::is_combining_mark(ch)
}

/// Segment `text` into grapheme units.
///
/// A leading combining mark with no base starts its own unit. Concatenating
/// the units always reproduces `text`.
pub fn segment(text: &str) -> Vec<GraphemeUnit<'_>> {
    let mut units = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match start {
            Some(_) if is_combining_mark(ch) => continue,
            Some(begin) => units.push(GraphemeUnit::new(&text[begin..idx])),
            None => {}
        }
        start = Some(idx);
    }

    if let Some(begin) = start {
        units.push(GraphemeUnit::new(&text[begin..]));
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(text: &str) -> Vec<&str> {
        segment(text).iter().map(|u| u.as_str()).collect()
    }

    #[test]
    fn empty_text() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn plain_ascii() {
        assert_eq!(texts("abc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn marks_attach_to_base() {
        assert_eq!(texts("e\u{301}a\u{300}\u{323}"), vec!["e\u{301}", "a\u{300}\u{323}"]);
    }

    #[test]
    fn leading_mark_starts_own_unit() {
        assert_eq!(texts("\u{301}\u{302}x"), vec!["\u{301}\u{302}", "x"]);
    }

    #[test]
    fn only_marks() {
        assert_eq!(texts("\u{301}\u{301}"), vec!["\u{301}\u{301}"]);
    }

    #[test]
    fn burmese_marks() {
        assert_eq!(texts("အခ်ျန်"), vec!["အ", "ခ\u{103a}\u{103b}", "န\u{103a}"]);
    }

    #[test]
    fn precomposed_is_not_split() {
        assert_eq!(
            texts("\u{3b1}\u{1f50}\u{3c4}\u{3cc}\u{3c2}"),
            vec!["\u{3b1}", "\u{1f50}", "\u{3c4}", "\u{3cc}", "\u{3c2}"]
        );
    }

    #[test]
    fn spacing_and_enclosing_marks() {
        // U+093E DEVANAGARI VOWEL SIGN AA (Mc), U+20DD COMBINING ENCLOSING CIRCLE (Me)
        assert!(is_combining_mark('\u{93e}'));
        assert!(is_combining_mark('\u{20dd}'));
        assert!(!is_combining_mark('a'));
        assert_eq!(texts("\u{915}\u{93e}1\u{20dd}"), vec!["\u{915}\u{93e}", "1\u{20dd}"]);
    }

    #[test]
    fn covers_all_scalars() {
        let input = "\u{301}ab\u{302}ç\u{327}d";
        let joined: String = segment(input).iter().map(|u| u.as_str()).collect();
        assert_eq!(joined, input);
    }
}
