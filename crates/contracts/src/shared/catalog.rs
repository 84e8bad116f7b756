//! Validation of the catalog payload and the fallback decision.

use crate::domain::a001_standard::{fallback_records, StandardRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("payload is not valid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("payload is not a JSON array")]
    NotAnArray,

    #[error("payload is an empty array")]
    Empty,
}

/// The active dataset and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub records: Vec<StandardRecord>,
    /// True only when the records came from the data file.
    pub loaded_from_source: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fallback()
    }
}

impl Catalog {
    /// The bundled sample, active from startup until a load succeeds.
    pub fn fallback() -> Self {
        Self {
            records: fallback_records(),
            loaded_from_source: false,
        }
    }

    /// Picks the dataset for a finished load attempt. Failures are logged and
    /// replaced by the fallback sample; they never propagate.
    pub fn resolve(outcome: Result<Vec<StandardRecord>, CatalogError>) -> Self {
        match outcome {
            Ok(records) if !records.is_empty() => {
                log::info!("Loaded {} standards from data file", records.len());
                Self {
                    records,
                    loaded_from_source: true,
                }
            }
            Ok(_) => {
                log::warn!("Using sample data: {}", CatalogError::Empty);
                Self::fallback()
            }
            Err(e) => {
                log::warn!("Using sample data: {}", e);
                Self::fallback()
            }
        }
    }
}

/// Parses a data file body. Anything but a non-empty array of records is an
/// error.
pub fn parse_catalog(body: &str) -> Result<Vec<StandardRecord>, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return Err(CatalogError::NotAnArray),
    };
    if items.is_empty() {
        return Err(CatalogError::Empty);
    }
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(CatalogError::from))
        .collect()
}
