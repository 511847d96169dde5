//! Session configuration and the explicit session context

use crate::error::ConfigError;
use crate::identity::IdAllocator;
use crate::recent::DEFAULT_RECENT_LIMIT;
use crate::shelf::{Shelf, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the shelf capacity
pub const CAPACITY_ENV: &str = "BOOKSHELF_CAPACITY";

/// Environment variable overriding the recent-activity list length
pub const RECENT_LIMIT_ENV: &str = "BOOKSHELF_RECENT_LIMIT";

/// Tunables for one library session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Maximum number of books on the shelf
    pub capacity: usize,

    /// Length of the recently added / viewed lists
    pub recent_limit: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl LibraryConfig {
    /// Load from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(CAPACITY_ENV) {
            self.capacity = parse_count(CAPACITY_ENV, &value)?;
        }
        if let Some(value) = lookup(RECENT_LIMIT_ENV) {
            self.recent_limit = parse_count(RECENT_LIMIT_ENV, &value)?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        if self.recent_limit == 0 {
            return Err(ConfigError::InvalidRecentLimit);
        }
        Ok(())
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: value.to_string(),
    })
}

/// Everything a session owns: created once at startup, dropped at shutdown
#[derive(Debug)]
pub struct SessionContext {
    pub config: LibraryConfig,
    pub shelf: Shelf,
    pub ids: IdAllocator,
}

impl SessionContext {
    /// Validate the configuration and build an empty session
    pub fn new(config: LibraryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            shelf: Shelf::with_capacity(config.capacity),
            ids: IdAllocator::new(),
        })
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        let config = LibraryConfig::default();
        Self {
            config,
            shelf: Shelf::with_capacity(config.capacity),
            ids: IdAllocator::new(),
        }
    }
}
