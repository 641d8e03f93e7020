//! Structured-Text Normalizer
//!
//! Decodes markdown-like text line by line while leaving line-leading structure
//! alone. Each line is judged on its own:
//!
//! 1. A fence delimiter (```` ``` ```` with an optional language tag) is kept verbatim.
//! 2. A line opening with a heading, quote, bullet, ordinal, or backtick marker
//!    keeps that prefix verbatim and decodes the rest.
//! 3. Anything else is decoded whole.
//!
//! Fence state is not tracked across lines, so the body of a fenced block is
//! decoded like any other text. Lines split on `\n`; a `\r` ending a line is set
//! aside and restored, so LF and CRLF input both keep their separators and the
//! output always has the same number of lines as the input.

use crate::leet::decoding::Decoder;
use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*```[\w+-]*\s*$").unwrap());

static STRUCTURAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*(?:#|>|-|\*|\+|[0-9]+\.|```)\s*)(.*)$").unwrap());

/// What the normalizer decided for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Fence,
    Prefixed { prefix: &'a str, content: &'a str },
    Plain,
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    if FENCE_LINE.is_match(line) {
        return LineKind::Fence;
    }
    match STRUCTURAL_PREFIX.captures(line) {
        Some(caps) => {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let content = caps.get(2).map_or("", |m| m.as_str());
            LineKind::Prefixed { prefix, content }
        }
        None => LineKind::Plain,
    }
}

pub fn normalize(decoder: &Decoder<'_>, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = text
        .split('\n')
        .map(|raw| {
            let (line, cr) = match raw.strip_suffix('\r') {
                Some(line) => (line, "\r"),
                None => (raw, ""),
            };
            let mut out = normalize_line(decoder, line);
            out.push_str(cr);
            out
        })
        .collect();

    lines.join("\n")
}

fn normalize_line(decoder: &Decoder<'_>, line: &str) -> String {
    match classify_line(line) {
        LineKind::Fence => line.to_string(),
        LineKind::Prefixed { prefix, content } => {
            let mut out = String::with_capacity(line.len());
            out.push_str(prefix);
            out.push_str(&decoder.decode(content));
            out
        }
        LineKind::Plain => decoder.decode(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leet::decoding::DecodeStrategy;
    use crate::leet::variants::{Precedence, ReverseIndex};

    fn run(text: &str) -> String {
        let decoder = Decoder::new(
            ReverseIndex::standard(Precedence::LastListed),
            DecodeStrategy::TwoPass,
        );
        normalize(&decoder, text)
    }

    #[test]
    fn keeps_heading_and_bullet_prefixes() {
        assert_eq!(run("# h3ll0\n- w0rld"), "# hello\n- world");
    }

    #[test]
    fn fence_lines_are_verbatim() {
        assert_eq!(classify_line("```"), LineKind::Fence);
        assert_eq!(classify_line("```rust"), LineKind::Fence);
        assert_eq!(classify_line("  ```  "), LineKind::Fence);
        assert_eq!(run("```rust\nl3t x\n```"), "```rust\nlet x\n```");
    }

    #[test]
    fn classifies_prefixes() {
        assert_eq!(
            classify_line("12. 1t3m"),
            LineKind::Prefixed {
                prefix: "12. ",
                content: "1t3m"
            }
        );
        assert_eq!(
            classify_line("  > qu0t3"),
            LineKind::Prefixed {
                prefix: "  > ",
                content: "qu0t3"
            }
        );
        assert_eq!(classify_line("pl41n"), LineKind::Plain);
    }

    #[test]
    fn preserves_line_count_and_blank_lines() {
        let input = "# h3ad3r\n\n* 0n3\n\n";
        let output = run(input);
        assert_eq!(output.split('\n').count(), input.split('\n').count());
        assert_eq!(output, "# header\n\n* one\n\n");
    }

    #[test]
    fn keeps_crlf_separators() {
        assert_eq!(run("# h3ll0\r\nw0rld\r\n"), "# hello\r\nworld\r\n");
    }

    #[test]
    fn marker_only_lines_survive() {
        assert_eq!(run("- "), "- ");
        assert_eq!(run(">"), ">");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(run(""), "");
    }
}
