//! # leet-codec
//!
//! Bidirectional leetspeak transcoding.
//!
//! File Layout
//!
//! Everything lives under [`leet`]. The variant table is the only data the crate
//! carries; every other module is a pure function over text plus the read-only
//! indices derived from that table.
//!
//! src/leet
//!   ├── variants     Variant table, canonical letters, reverse index
//!   ├── encoding     Normal text to leetspeak (randomized, intensity driven)
//!   ├── decoding     Leetspeak to normal text (two-pass or longest-match)
//!   ├── detection    Frequency heuristic for "is this already leetspeak"
//!   ├── structured   Line-oriented normalizer that keeps markdown-like prefixes
//!   ├── quick        Lightweight digit/symbol fold used before display
//!   ├── codec        Context object and the functional surface
//!   └── testing      Deterministic random source for tests
//!
//! None of the operations can fail: degenerate input maps to a default value
//! (empty in, empty out; the detector answers `false`).

pub mod leet;

pub use leet::codec::{
    decode, encode, looks_like_leetspeak, normalize_structured_text, Codec, CodecOptions,
};
pub use leet::decoding::DecodeStrategy;
pub use leet::detection::LeetScore;
pub use leet::encoding::{Dice, Intensity};
pub use leet::quick::fold_common_substitutions;
pub use leet::variants::{Letter, Precedence, ReverseIndex, VariantTable};
