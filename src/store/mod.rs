//! Store module
//!
//! Loads and saves the full priority list as one pretty-printed JSON
//! array. There are no partial updates: every mutation rewrites the
//! whole file, and the last writer wins.

mod types;

pub use types::{sorted_by_priority, PriorityItem};

use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Load/save abstraction over the persisted priority list
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store bound to the given data file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full list.
    ///
    /// A missing file is an empty list. A file that exists but does not
    /// parse is an error, surfaced to the caller.
    pub fn load(&self) -> Result<Vec<PriorityItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let items: Vec<PriorityItem> = serde_json::from_str(&content)?;
        Ok(items)
    }

    /// Save the full list, overwriting the data file.
    ///
    /// Not atomic: a crash mid-write can truncate the file.
    pub fn save(&self, items: &[PriorityItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
