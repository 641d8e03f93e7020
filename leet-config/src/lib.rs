//! Shared configuration loader for the leet toolchain.
//!
//! `defaults/leet.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files,
//! `LEET_*` environment variables, and flag overrides on top of those defaults
//! via [`Loader`] before deserializing into [`LeetConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use leet_codec::{CodecOptions, DecodeStrategy, Intensity, Precedence};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/leet.default.toml");

/// Top-level configuration consumed by leet applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LeetConfig {
    pub encoder: EncoderConfig,
    pub decoder: DecoderConfig,
    pub detector: DetectorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncoderConfig {
    pub intensity: Intensity,
    /// Fixed seed for reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecoderConfig {
    pub precedence: Precedence,
    pub strategy: DecodeStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectorConfig {
    pub threshold: f64,
}

impl LeetConfig {
    /// The codec knobs carried by this configuration.
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            intensity: self.encoder.intensity,
            precedence: self.decoder.precedence,
            strategy: self.decoder.strategy,
            threshold: self.detector.threshold,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("detector.threshold must be within 0.0..=1.0, got {0}")]
    Threshold(f64),
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `LEET_<SECTION>__<KEY>` environment variables, e.g. `LEET_ENCODER__INTENSITY=5`.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix("LEET")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize, and check value ranges.
    pub fn build(self) -> Result<LeetConfig, LoadError> {
        let config: LeetConfig = self.builder.build()?.try_deserialize()?;
        let threshold = config.detector.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(LoadError::Threshold(threshold));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LeetConfig, LoadError> {
    Loader::new().build()
}
