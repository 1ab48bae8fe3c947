//! Library configuration

use crate::domain::errors::DomainError;
use crate::domain::repositories::BookRepository;
use crate::infrastructure::repositories::{
    DEFAULT_CAPACITY, FixedCapacityBookRepository, VecBookRepository,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which store implementation backs the library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Growable store, no upper bound
    #[default]
    Dynamic,
    /// Pre-sized store that rejects books beyond `capacity`
    Fixed,
}

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Store implementation
    pub store: StoreKind,
    /// Slot count for the fixed store; ignored by the dynamic one
    pub capacity: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::Dynamic,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config format: {0}")]
    Format(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl LibraryConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.store == StoreKind::Fixed && self.capacity == 0 {
            return Err(DomainError::invalid_argument(
                "Fixed store capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Build an empty store as described by this config
    pub fn build_repository(&self) -> Box<dyn BookRepository> {
        match self.store {
            StoreKind::Dynamic => Box::new(VecBookRepository::new()),
            StoreKind::Fixed => Box::new(FixedCapacityBookRepository::with_capacity(self.capacity)),
        }
    }
}
