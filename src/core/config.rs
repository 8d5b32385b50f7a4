use serde::{Serialize, Deserialize};
use std::collections::HashMap;

use crate::query::types::QueryMode;

/// Per-stage pipeline toggles. Disabling a stage never reorders the others.
///
/// The same configuration must be used when building the index and when
/// resolving queries against it. A mismatch does not crash; it silently
/// retrieves nothing (indexed terms and query terms normalize differently).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub trimmer: bool,
    pub stop_words: bool,
    pub stemmer: bool,

    /// Split tokens on internal hyphens in addition to whitespace.
    pub split_hyphens: bool,
    /// Use Unicode word segmentation instead of whitespace splitting.
    /// Word segmentation already discards punctuation, which makes the
    /// trimmer stage a no-op under this tokenizer.
    pub unicode_segmentation: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            trimmer: true,
            stop_words: true,
            stemmer: true,
            split_hyphens: true,
            unicode_segmentation: false,
        }
    }
}

/// Index-wide configuration: which fields get indexed, how each field's
/// matches are weighted, and how queries behave by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Fields fed through the pipeline, in indexing order.
    pub fields: Vec<String>,
    /// Field name → positive score multiplier.
    pub boosts: HashMap<String, f32>,
    pub pipeline: PipelineConfig,

    /// Expand the final query token by prefix ("search as you type").
    pub expand: bool,
    /// Default boolean mode when the caller does not pick one.
    pub default_mode: QueryMode,
    /// Cap on returned hits; 0 means unlimited.
    pub limit_results: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        let mut boosts = HashMap::new();
        boosts.insert("title".to_string(), 2.0);
        boosts.insert("body".to_string(), 1.0);
        boosts.insert("breadcrumbs".to_string(), 1.0);

        IndexConfig {
            fields: vec![
                "title".to_string(),
                "body".to_string(),
                "breadcrumbs".to_string(),
            ],
            boosts,
            pipeline: PipelineConfig::default(),
            expand: true,
            default_mode: QueryMode::Or,
            limit_results: 30,
        }
    }
}

impl IndexConfig {
    /// Boost for a field; unconfigured fields weigh 1.0.
    pub fn boost(&self, field: &str) -> f32 {
        self.boosts.get(field).copied().unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boosts_favor_title() {
        let config = IndexConfig::default();
        assert!(config.boost("title") > config.boost("body"));
        assert_eq!(config.boost("unconfigured"), 1.0);
    }
}
