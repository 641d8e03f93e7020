//! Variant Table and Reverse Index
//!
//! The variant table is the one piece of data the codec owns: for every canonical
//! lowercase letter, an ordered list of the textual variants that stand for it in
//! leetspeak. Order matters, the encoder prefers earlier entries at low intensity.
//!
//! The reverse index is derived from the table once per process and maps every
//! case-folded variant back to a letter. The table is ambiguous (`"1"` is listed
//! under both `i` and `l`, `"s"` is both a letter and a variant of `z`), so the
//! index is always built under an explicit [`Precedence`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// One of the 26 lowercase Latin letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Case-folds an ASCII letter. Anything else, including non-ASCII characters
    /// that lowercase to a Latin letter, is not a canonical letter.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (b'a'..=b'z').map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

type Row = (char, &'static [&'static str]);

const ROWS: [Row; 26] = [
    ('a', &["4", "@", "a", "A", "/-\\", "/\\"]),
    ('b', &["8", "6", "b", "B", "|3", "|8", "ß"]),
    ('c', &["c", "C", "(", "<", "[", "©"]),
    ('d', &["d", "D", "|)", "|]", "Ð"]),
    ('e', &["3", "e", "E", "€"]),
    ('f', &["f", "F", "ph", "|="]),
    ('g', &["g", "G", "6", "9", "&"]),
    ('h', &["h", "H", "|-|", "}{", "]-["]),
    ('i', &["1", "i", "I", "!", "|", "eye"]),
    ('j', &["j", "J", ";", "_|"]),
    ('k', &["k", "K", "|<", "|{"]),
    ('l', &["l", "L", "1", "|", "|_"]),
    ('m', &["m", "M", "/\\/\\", "|\\/|", "/v\\"]),
    ('n', &["n", "N", "|\\|", "/\\/", "|v|"]),
    ('o', &["0", "o", "O", "()", "[]", "Ø"]),
    ('p', &["p", "P", "|*", "|o", "|>", "|7"]),
    ('q', &["q", "Q", "9", "(,)", "O\\", "kw"]),
    ('r', &["r", "R", "|2", "|?", "/2"]),
    ('s', &["5", "s", "S", "$", "z"]),
    ('t', &["7", "t", "T", "+", "†"]),
    ('u', &["u", "U", "|_|", "\\_\\", "/_/", "µ"]),
    ('v', &["v", "V", "\\/", "√"]),
    ('w', &["w", "W", "\\/\\/", "vv", "\\^/", "\\|/"]),
    ('x', &["x", "X", "><", ")(", "}{"]),
    ('y', &["y", "Y", "`/", "¥"]),
    ('z', &["z", "Z", "2", "s", "7_", ">_"]),
];

/// Canonical letter to ordered variants. Process-wide and immutable.
#[derive(Debug)]
pub struct VariantTable {
    rows: &'static [Row],
}

static STANDARD: VariantTable = VariantTable { rows: &ROWS };

impl VariantTable {
    pub fn standard() -> &'static VariantTable {
        &STANDARD
    }

    /// Rows in table order (alphabetical).
    pub fn rows(&self) -> impl Iterator<Item = (Letter, &'static [&'static str])> + '_ {
        self.rows
            .iter()
            .filter_map(|&(c, variants)| Letter::from_char(c).map(|letter| (letter, variants)))
    }

    /// Variants of `letter`, in preference order.
    pub fn variants(&self, letter: Letter) -> &'static [&'static str] {
        self.rows
            .iter()
            .find(|(c, _)| *c == letter.as_char())
            .map(|&(_, variants)| variants)
            .unwrap_or(&[])
    }

    /// Every variant longer than one character, row by row in table order.
    pub fn multi_char_variants(&self) -> impl Iterator<Item = (Letter, &'static str)> + '_ {
        self.rows().flat_map(|(letter, variants)| {
            variants
                .iter()
                .filter(|v| v.chars().count() > 1)
                .map(move |v| (letter, *v))
        })
    }

    pub fn variant_count(&self) -> usize {
        self.rows.iter().map(|(_, v)| v.len()).sum()
    }
}

/// How the reverse index settles a variant listed under more than one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precedence {
    /// Rows are inserted alphabetically and a later row overwrites an earlier one:
    /// `1` and `|` resolve to `l`, `6` to `g`, `9` to `q`, and `s` to `z`.
    #[default]
    LastListed,
    /// Like [`Precedence::LastListed`], but every plain letter decodes to itself
    /// afterwards. Collisions among non-letters keep the last-listed winner.
    LetterIdentity,
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precedence::LastListed => write!(f, "last-listed"),
            Precedence::LetterIdentity => write!(f, "letter-identity"),
        }
    }
}

/// Case-folded variant to canonical letter.
#[derive(Debug, Clone)]
pub struct ReverseIndex {
    map: HashMap<String, Letter>,
    precedence: Precedence,
    longest: usize,
}

static LAST_LISTED_INDEX: Lazy<ReverseIndex> =
    Lazy::new(|| ReverseIndex::build(VariantTable::standard(), Precedence::LastListed));

static LETTER_IDENTITY_INDEX: Lazy<ReverseIndex> =
    Lazy::new(|| ReverseIndex::build(VariantTable::standard(), Precedence::LetterIdentity));

impl ReverseIndex {
    pub fn build(table: &VariantTable, precedence: Precedence) -> Self {
        let mut map: HashMap<String, Letter> = HashMap::with_capacity(table.variant_count());

        for (letter, variants) in table.rows() {
            for variant in variants {
                let key = variant.to_lowercase();
                if let Some(previous) = map.insert(key, letter) {
                    if previous != letter {
                        trace!(variant, %previous, %letter, "variant collision, later row wins");
                    }
                }
            }
        }

        if precedence == Precedence::LetterIdentity {
            for letter in Letter::all() {
                map.insert(letter.as_char().to_string(), letter);
            }
        }

        let longest = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        debug!(entries = map.len(), longest, %precedence, "built reverse index");
        Self {
            map,
            precedence,
            longest,
        }
    }

    /// The index over the standard table, built on first use.
    pub fn standard(precedence: Precedence) -> &'static ReverseIndex {
        match precedence {
            Precedence::LastListed => &*LAST_LISTED_INDEX,
            Precedence::LetterIdentity => &*LETTER_IDENTITY_INDEX,
        }
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Length in chars of the longest variant.
    pub fn longest_variant(&self) -> usize {
        self.longest
    }

    /// Looks up a variant, case-insensitively.
    pub fn get(&self, variant: &str) -> Option<Letter> {
        self.map.get(&variant.to_lowercase()).copied()
    }

    /// Single-character lookup used by the per-character decode pass.
    pub fn get_char(&self, c: char) -> Option<Letter> {
        let mut folded = c.to_lowercase();
        match (folded.next(), folded.next()) {
            (Some(lower), None) => {
                let mut buf = [0u8; 4];
                self.map.get(&*lower.encode_utf8(&mut buf)).copied()
            }
            // Multi-char foldings never match a single-char variant
            _ => None,
        }
    }

    /// Case-folded variants and the letters they resolve to, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Letter)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
