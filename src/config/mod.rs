//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::export::CsvMode;
use crate::core::predicate::PriceBucket;
use crate::core::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Page size limits for listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Settings applied to bulk actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Actor recorded when a request does not name one
    #[serde(default = "default_actor")]
    pub actor: String,

    /// Artificial delay before each bulk action commits
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl ModerationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            actor: default_actor(),
            simulated_latency_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub csv_mode: CsvMode,
}

/// Complete configuration for the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub listing: ListingConfig,

    /// Price choices offered by the storefront filter, in display order
    #[serde(default = "PriceBucket::storefront_defaults")]
    pub price_buckets: Vec<PriceBucket>,

    #[serde(default)]
    pub moderation: ModerationConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    100
}

fn default_actor() -> String {
    "Admin".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            listing: ListingConfig::default(),
            price_buckets: PriceBucket::storefront_defaults(),
            moderation: ModerationConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let listing = &self.listing;
        if listing.default_page_size == 0 {
            return Err(invalid(
                "listing.default_page_size",
                listing.default_page_size,
                "must be at least 1",
            ));
        }
        if listing.max_page_size < listing.default_page_size {
            return Err(invalid(
                "listing.max_page_size",
                listing.max_page_size,
                "must not be below listing.default_page_size",
            ));
        }

        let mut seen = HashSet::new();
        for bucket in &self.price_buckets {
            if !seen.insert(bucket.key.as_str()) {
                return Err(invalid("price_buckets.key", &bucket.key, "duplicate bucket key"));
            }
            if let Some(value) = bucket.range.non_finite_bound() {
                return Err(invalid(
                    "price_buckets.range",
                    format!("{}: {}", bucket.key, value),
                    "bounds must be finite numbers",
                ));
            }
            if bucket.range.is_inverted() {
                return Err(invalid(
                    "price_buckets.range",
                    &bucket.key,
                    "minimum is above maximum",
                ));
            }
        }

        if self.moderation.actor.trim().is_empty() {
            return Err(invalid("moderation.actor", "", "must not be empty"));
        }

        Ok(())
    }

    /// Merge another configuration on top of this one
    ///
    /// Sections of `other` replace ours; price buckets are merged by key, with
    /// `other` winning and new keys appended in order.
    pub fn merge(mut self, other: CatalogConfig) -> Self {
        for bucket in other.price_buckets {
            match self.price_buckets.iter_mut().find(|b| b.key == bucket.key) {
                Some(existing) => *existing = bucket,
                None => self.price_buckets.push(bucket),
            }
        }
        self.listing = other.listing;
        self.moderation = other.moderation;
        self.export = other.export;
        self
    }

    /// Find a price bucket by key
    pub fn price_bucket(&self, key: &str) -> Option<&PriceBucket> {
        self.price_buckets.iter().find(|b| b.key == key)
    }
}

fn invalid(field: &str, value: impl ToString, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}
