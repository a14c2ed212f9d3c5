use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqdexError};

fn default_shard_count() -> usize {
    16
}

/// Configuration for a [`Collector`](crate::Collector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Number of lock shards per analyzer index.
    #[serde(default = "default_shard_count")]
    pub shard_count: usize,
    /// Maximum number of leading symbols of each sequence that are indexed.
    /// Boundary flags are still computed against the full sequence.
    #[serde(default)]
    pub sequence_limit: Option<usize>,
}

impl CollectorConfig {
    pub fn new() -> Self {
        Self {
            shard_count: default_shard_count(),
            sequence_limit: None,
        }
    }

    pub fn builder() -> CollectorConfigBuilder {
        CollectorConfigBuilder::default()
    }

    /// Check that the configuration can back a collector.
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(SeqdexError::invalid_config(
                "shard_count must be at least 1",
            ));
        }
        if self.sequence_limit == Some(0) {
            return Err(SeqdexError::invalid_config(
                "sequence_limit must be at least 1 when set",
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CollectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct CollectorConfigBuilder {
    shard_count: Option<usize>,
    sequence_limit: Option<usize>,
}

impl CollectorConfigBuilder {
    pub fn shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = Some(shard_count);
        self
    }

    pub fn sequence_limit(mut self, limit: usize) -> Self {
        self.sequence_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<CollectorConfig> {
        let config = CollectorConfig {
            shard_count: self.shard_count.unwrap_or_else(default_shard_count),
            sequence_limit: self.sequence_limit,
        };
        config.validate()?;
        Ok(config)
    }
}
