//! Decoder: leetspeak back to normal text
//!
//! Text is split on whitespace runs and every token is decoded on its own; tokens
//! are joined back with a single space, so runs of spaces, tabs, or newlines
//! collapse. A leading or trailing run becomes one space rather than vanishing.
//!
//! Two strategies are available:
//!
//! - [`DecodeStrategy::TwoPass`] (default): a per-character pass through the
//!   reverse index, then a literal, case-insensitive replacement of every
//!   multi-character variant in table order. The first pass can eat characters a
//!   multi-character variant needed (`|3` decodes to `le`, `/\/\` to `aa`); that
//!   output is kept as is.
//! - [`DecodeStrategy::LongestMatch`]: one pass that takes the longest variant in
//!   the reverse index at each position (`|3` is `b`, `/\/\` is `m`).

use crate::leet::variants::{Letter, ReverseIndex, VariantTable};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use tracing::trace;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Literal pattern for one multi-character variant.
struct LiteralPattern {
    pattern: Regex,
    letter: String,
}

/// Patterns for every multi-character variant of the standard table, in table order.
static MULTI_CHAR_PATTERNS: Lazy<Vec<LiteralPattern>> = Lazy::new(|| {
    VariantTable::standard()
        .multi_char_variants()
        .map(|(letter, variant)| LiteralPattern {
            pattern: RegexBuilder::new(&regex::escape(variant))
                .case_insensitive(true)
                .build()
                .expect("escaped variant is a valid literal pattern"),
            letter: letter.to_string(),
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeStrategy {
    #[default]
    TwoPass,
    LongestMatch,
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStrategy::TwoPass => write!(f, "two-pass"),
            DecodeStrategy::LongestMatch => write!(f, "longest-match"),
        }
    }
}

/// Decodes text against a reverse index.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    index: &'a ReverseIndex,
    strategy: DecodeStrategy,
}

impl<'a> Decoder<'a> {
    pub fn new(index: &'a ReverseIndex, strategy: DecodeStrategy) -> Self {
        Self { index, strategy }
    }

    pub fn decode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let words: Vec<String> = WHITESPACE
            .split(text)
            .map(|token| self.decode_token(token))
            .collect();

        trace!(tokens = words.len(), strategy = %self.strategy, "decoded text");
        words.join(" ")
    }

    /// Decodes one whitespace-free token.
    pub fn decode_token(&self, token: &str) -> String {
        match self.strategy {
            DecodeStrategy::TwoPass => self.two_pass(token),
            DecodeStrategy::LongestMatch => self.longest_match(token),
        }
    }

    fn two_pass(&self, token: &str) -> String {
        let mut word: String = token
            .chars()
            .map(|c| self.index.get_char(c).map_or(c, Letter::as_char))
            .collect();

        for literal in MULTI_CHAR_PATTERNS.iter() {
            let replaced = match literal
                .pattern
                .replace_all(&word, NoExpand(&literal.letter))
            {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(replaced),
            };
            if let Some(replaced) = replaced {
                word = replaced;
            }
        }

        word
    }

    fn longest_match(&self, token: &str) -> String {
        let chars: Vec<char> = token.chars().collect();
        let longest = self.index.longest_variant();
        let mut out = String::with_capacity(token.len());
        let mut pos = 0;

        while pos < chars.len() {
            let max = longest.min(chars.len() - pos);
            let hit = (1..=max).rev().find_map(|len| {
                let window: String = chars[pos..pos + len].iter().collect();
                self.index.get(&window).map(|letter| (letter, len))
            });

            match hit {
                Some((letter, len)) => {
                    out.push(letter.as_char());
                    pos += len;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }

        out
    }
}
