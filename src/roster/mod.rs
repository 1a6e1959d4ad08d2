//! Read-only roster of intern records supplied at startup.

mod builtin;
mod load;
pub mod query;

pub use builtin::builtin_records;
pub use load::load_from_path;
pub use query::{SortDirection, SortKey, SortState};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Stable identity key for a roster record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternId(pub u32);

impl fmt::Display for InternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single intern as shown in the directory and the detail overlay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternRecord {
    pub id: InternId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    /// Calendar start date, serialized as `YYYY-MM-DD`.
    #[serde(with = "iso_date")]
    pub start_date: Date,
    pub photo: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    pub mentor: String,
}

/// Errors raised while building a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Two records share the same id.
    #[error("Duplicate intern id {0} in roster")]
    DuplicateId(InternId),
    /// Failed to read a roster file.
    #[error("Failed to read roster {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse a roster file.
    #[error("Invalid roster at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Fixed, ordered collection of intern records.
///
/// The roster is immutable once built; nothing in the application appends to
/// it or edits its records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    records: Vec<InternRecord>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(records: Vec<InternRecord>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(RosterError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The eight records bundled with the application.
    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    /// All records in roster order.
    pub fn records(&self) -> &[InternRecord] {
        &self.records
    }

    /// Number of interns on the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: InternId) -> Option<&InternRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Whether a record with `id` exists.
    pub fn contains(&self, id: InternId) -> bool {
        self.get(id).is_some()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}
