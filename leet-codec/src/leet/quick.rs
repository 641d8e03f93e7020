//! Quick fold for display text.
//!
//! A lighter sibling of the decoder for text about to be shown: it only folds the
//! common digit and symbol substitutions, one character at a time, and touches
//! nothing else. Casing, whitespace, and multi-character glyphs are kept.
//! Text with no ASCII digit and no `#` is returned as is, without allocating.

use std::borrow::Cow;

fn fold(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '2' => 'z',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '6' => 'g',
        '7' => 't',
        '8' => 'b',
        '9' => 'g',
        '@' => 'a',
        '#' => 'h',
        '$' => 's',
        '+' => 't',
        other => other,
    }
}

pub fn fold_common_substitutions(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_ascii_digit() || c == '#') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(fold).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_without_digits_or_hash() {
        let text = "Y0u can't $ee me";
        assert!(matches!(fold_common_substitutions("plain text"), Cow::Borrowed(_)));
        // '$' alone does not trigger the fold, but the digit does
        assert_eq!(fold_common_substitutions(text), "You can't see me");
        assert_eq!(fold_common_substitutions("c@$h only"), "c@$h only");
    }

    #[test]
    fn keeps_whitespace_and_case() {
        assert_eq!(
            fold_common_substitutions("  L33T\t5P34K  #1"),
            "  LeeT\tsPeaK  hi"
        );
    }

    #[test]
    fn glyph_variants_are_left_alone() {
        assert_eq!(fold_common_substitutions("/\\/\\ |< 4"), "/\\/\\ |< a");
    }
}
