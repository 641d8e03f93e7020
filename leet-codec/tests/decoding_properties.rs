//! Property-based tests for the decoder
//!
//! Decoding is deterministic, so the properties pin output shape: whitespace
//! collapses to single spaces, token count survives, and text built only from
//! letters no variant can disturb comes back unchanged under both strategies.

use leet_codec::leet::decoding::Decoder;
use leet_codec::{DecodeStrategy, Precedence, ReverseIndex};
use proptest::prelude::*;
use rstest::rstest;

fn decoder(strategy: DecodeStrategy) -> Decoder<'static> {
    Decoder::new(ReverseIndex::standard(Precedence::LastListed), strategy)
}

/// Words from letters that decode to themselves and never form a multi-char variant
fn plain_words() -> impl Strategy<Value = String> {
    prop::collection::vec("[abcdefghijlmnoqrtuwx]{1,10}", 1..6).prop_map(|words| words.join(" "))
}

#[rstest]
#[case(DecodeStrategy::TwoPass)]
#[case(DecodeStrategy::LongestMatch)]
fn decoding_empty_text_is_empty(#[case] strategy: DecodeStrategy) {
    assert_eq!(decoder(strategy).decode(""), "");
}

#[rstest]
#[case(DecodeStrategy::TwoPass, "h3ll0 w0rld", "hello world")]
#[case(DecodeStrategy::LongestMatch, "h3ll0 w0rld", "hello world")]
#[case(DecodeStrategy::TwoPass, "|-|4|<3|2", "l-lalcelz")]
#[case(DecodeStrategy::LongestMatch, "|-|4|<3|2", "haker")]
fn strategies_differ_only_on_glyph_variants(
    #[case] strategy: DecodeStrategy,
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(decoder(strategy).decode(input), expected);
}

proptest! {
    #[test]
    fn output_has_only_single_spaces(text in any::<String>()) {
        let out = decoder(DecodeStrategy::TwoPass).decode(&text);
        prop_assert!(!out.contains("  "));
        prop_assert!(out.chars().all(|c| c == ' ' || !c.is_whitespace()));
    }

    #[test]
    fn token_count_survives(words in prop::collection::vec("[^\\s]{1,8}", 1..8), gaps in prop::collection::vec("[ \t\n]{1,3}", 7)) {
        let mut text = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                text.push_str(&gaps[i - 1]);
            }
            text.push_str(word);
        }
        let out = decoder(DecodeStrategy::TwoPass).decode(&text);
        prop_assert_eq!(out.split(' ').count(), words.len());
    }

    #[test]
    fn plain_words_are_fixed_points(text in plain_words()) {
        prop_assert_eq!(decoder(DecodeStrategy::TwoPass).decode(&text), text.clone());
        prop_assert_eq!(decoder(DecodeStrategy::LongestMatch).decode(&text), text);
    }

    #[test]
    fn decoding_is_deterministic(text in any::<String>()) {
        let d = decoder(DecodeStrategy::TwoPass);
        prop_assert_eq!(d.decode(&text), d.decode(&text));
    }
}
