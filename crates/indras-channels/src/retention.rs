//! Retention settings for channel change logs
//!
//! A channel registry holds one [`RetentionConfig`] and applies it to each
//! channel's log through [`ChangeLog::apply_retention`](crate::ChangeLog::apply_retention).

use serde::{Deserialize, Serialize};

/// Default number of entries a channel log keeps
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// How many entries a change log may hold before the oldest are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Maximum number of entries kept per channel
    max_length: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl RetentionConfig {
    /// Create a config with the given length bound
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Get the maximum number of entries kept
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Check whether a log of `len` entries would be truncated
    pub fn would_truncate(&self, len: usize) -> bool {
        len > self.max_length
    }

    /// Number of entries to drop from a log of `len` entries
    pub fn excess(&self, len: usize) -> usize {
        len.saturating_sub(self.max_length)
    }
}

/// Builder for RetentionConfig
#[derive(Debug, Default)]
pub struct RetentionConfigBuilder {
    max_length: Option<usize>,
}

impl RetentionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of entries kept
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn build(self) -> RetentionConfig {
        let mut config = RetentionConfig::default();

        if let Some(max) = self.max_length {
            config.max_length = max;
        }

        config
    }
}
