//! Segmenter configuration

use crate::error::ConfigError;

/// Default configuration constants
pub mod defaults {
    /// Literal runs are emitted only before a phrase or at a flush
    pub const LITERAL_LIMIT: Option<usize> = None;
}

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    pub(crate) literal_limit: Option<usize>, // in symbols
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            literal_limit: defaults::LITERAL_LIMIT,
        }
    }
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Literal run length after which the streaming tokenizer emits early
    pub fn literal_limit(&self) -> Option<usize> {
        self.literal_limit
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.literal_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "literal_limit must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    literal_limit: Option<usize>,
}

impl SegmenterConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the streaming literal limit in symbols (None = no limit)
    pub fn literal_limit(mut self, limit: Option<usize>) -> Self {
        self.literal_limit = limit;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<SegmenterConfig, ConfigError> {
        let config = SegmenterConfig {
            literal_limit: self.literal_limit,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_limit() {
        let config = SegmenterConfig::default();
        assert_eq!(config.literal_limit(), None);
        assert_eq!(SegmenterConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_builder_sets_limit() {
        let config = SegmenterConfig::builder()
            .literal_limit(Some(32))
            .build()
            .unwrap();
        assert_eq!(config.literal_limit(), Some(32));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = SegmenterConfig::builder().literal_limit(Some(0)).build();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
