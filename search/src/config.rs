use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How a query is compared against a name or alias.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Query occurs anywhere in the candidate.
    #[default]
    Any,
    /// Candidate starts with the query.
    Prefix,
}

impl MatchPolicy {
    /// Maps the boundary's integer flag: positive selects `Prefix`.
    pub fn from_match_start(match_start: i32) -> Self {
        if match_start > 0 {
            MatchPolicy::Prefix
        } else {
            MatchPolicy::Any
        }
    }

    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            MatchPolicy::Any => candidate.contains(query),
            MatchPolicy::Prefix => candidate.starts_with(query),
        }
    }

    /// `matches`, guarded so a query longer than the candidate never reaches
    /// the comparison.
    pub(crate) fn accepts(self, candidate: &str, query: &str) -> bool {
        query.len() <= candidate.len() && self.matches(candidate, query)
    }
}

/// Search behavior, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub policy: MatchPolicy,
    /// Maximum matches returned by one query call.
    pub page_size: usize,
    /// Alias matches a tag may contribute when its name does not match.
    pub alias_matches_per_tag: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::default(),
            page_size: 25,
            alias_matches_per_tag: 1,
        }
    }
}

impl SearchConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("tagdex.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.page_size == 0 {
            errors.push("page_size must be at least 1".to_string());
        }

        if self.alias_matches_per_tag == 0 {
            errors.push("alias_matches_per_tag must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            policy: self.policy,
            page_size: if self.page_size == 0 {
                defaults.page_size
            } else {
                self.page_size
            },
            alias_matches_per_tag: if self.alias_matches_per_tag == 0 {
                defaults.alias_matches_per_tag
            } else {
                self.alias_matches_per_tag
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
