//! Read-only record store backing every search
//!
//! Records are loaded once at startup and never change afterwards, so a
//! store is shared between request handlers without locking.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::User;

/// Failure to produce records
#[derive(Debug, Error)]
pub enum StoreError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not a valid record document
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] quick_xml::de::DeError),

    /// Store exists but cannot serve records right now
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Source of user records for the search service
pub trait RecordStore: Send + Sync {
    /// All records in store order
    fn records(&self) -> Result<&[User], StoreError>;
}

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<User>,
}

impl MemoryStore {
    pub fn new(records: Vec<User>) -> Self {
        Self { records }
    }

    /// Load an XML dataset file
    ///
    /// The document root holds repeated `<row>` elements with `id`,
    /// `first_name`, `last_name`, `age`, `about` and `gender` children.
    /// Any other child element is ignored.
    pub fn load_xml(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_xml_str(&text)?;

        tracing::info!(
            "Loaded {} records from {}",
            store.records.len(),
            path.display()
        );

        Ok(store)
    }

    /// Parse an XML dataset held in memory
    pub fn from_xml_str(text: &str) -> Result<Self, StoreError> {
        let dataset: Dataset = quick_xml::de::from_str(text)?;
        Ok(Self::new(dataset.rows.into_iter().map(User::from).collect()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn records(&self) -> Result<&[User], StoreError> {
        Ok(&self.records)
    }
}

#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(rename = "row", default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    id: i64,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    age: u32,
    #[serde(default)]
    about: String,
    #[serde(default)]
    gender: String,
}

impl From<Row> for User {
    fn from(row: Row) -> Self {
        Self {
            id: row.id,
            name: row.first_name + &row.last_name,
            age: row.age,
            about: row.about,
            gender: row.gender,
        }
    }
}
