//! Codec context and the functional surface
//!
//! [`Codec`] bundles the tunable knobs with the process-wide variant table and
//! reverse index. It is `Copy` and holds only `'static` references, so callers
//! can build one per request or share one freely across threads.
//!
//! ```rust,ignore
//! use leet_codec::{Codec, CodecOptions, Intensity};
//!
//! let codec = Codec::default();
//! assert_eq!(codec.decode("h3ll0"), "hello");
//! let loud = codec.encode_at("hello", Intensity::new(5), &mut rand::thread_rng());
//! ```
//!
//! The free functions at the bottom use `Codec::default()`.

use crate::leet::decoding::{DecodeStrategy, Decoder};
use crate::leet::detection::{self, LeetScore, DEFAULT_THRESHOLD};
use crate::leet::encoding::{self, Dice, Intensity};
use crate::leet::structured;
use crate::leet::variants::{Precedence, ReverseIndex, VariantTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Intensity used when the caller does not pass one.
    pub intensity: Intensity,
    pub precedence: Precedence,
    pub strategy: DecodeStrategy,
    /// Detector threshold, the share of indicator characters that flags a text.
    pub threshold: f64,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            intensity: Intensity::default(),
            precedence: Precedence::default(),
            strategy: DecodeStrategy::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Codec {
    options: CodecOptions,
    table: &'static VariantTable,
    index: &'static ReverseIndex,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self {
            options,
            table: VariantTable::standard(),
            index: ReverseIndex::standard(options.precedence),
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encodes at the configured intensity.
    pub fn encode_with<D: Dice + ?Sized>(&self, text: &str, dice: &mut D) -> String {
        encoding::encode(self.table, text, self.options.intensity, dice)
    }

    pub fn encode_at<D: Dice + ?Sized>(
        &self,
        text: &str,
        intensity: Intensity,
        dice: &mut D,
    ) -> String {
        encoding::encode(self.table, text, intensity, dice)
    }

    /// Encodes at the configured intensity with the thread-local generator.
    pub fn encode(&self, text: &str) -> String {
        self.encode_with(text, &mut rand::thread_rng())
    }

    pub fn decode(&self, text: &str) -> String {
        self.decoder().decode(text)
    }

    pub fn score(&self, text: &str) -> LeetScore {
        detection::score(text)
    }

    pub fn looks_like_leetspeak(&self, text: &str) -> bool {
        detection::looks_like_leetspeak(text, self.options.threshold)
    }

    pub fn normalize_structured_text(&self, text: &str) -> String {
        structured::normalize(&self.decoder(), text)
    }

    /// Normalizes generated text for display: only text the detector flags is
    /// run through the structured normalizer, everything else comes back as is.
    pub fn normalize_response(&self, text: &str) -> String {
        if self.looks_like_leetspeak(text) {
            self.normalize_structured_text(text)
        } else {
            text.to_string()
        }
    }

    fn decoder(&self) -> Decoder<'static> {
        Decoder::new(self.index, self.options.strategy)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecOptions::default())
    }
}

pub fn encode(text: &str, intensity: Intensity) -> String {
    Codec::default().encode_at(text, intensity, &mut rand::thread_rng())
}

pub fn decode(text: &str) -> String {
    Codec::default().decode(text)
}

pub fn looks_like_leetspeak(text: &str) -> bool {
    Codec::default().looks_like_leetspeak(text)
}

pub fn normalize_structured_text(text: &str) -> String {
    Codec::default().normalize_structured_text(text)
}
