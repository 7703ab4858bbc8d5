//! Non-fatal data-integrity warnings.
//!
//! Dangling cross-references do not abort a run: the orphaned entry is
//! excluded from scoring, a warning is recorded here (and logged), and
//! the rest of the batch proceeds. The collection travels with the
//! report so callers decide how to surface it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recoverable data problem found while auditing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DataWarning {
    /// The batch references a professor missing from the catalog.
    #[error("assignments reference unknown professor {professor_id}")]
    UnknownProfessor { professor_id: String },

    /// A professor has assignments for a subject not in their requirements.
    #[error("professor {professor_id} has assignments for unlisted subject {subject_code}")]
    UnknownSubject {
        professor_id: String,
        subject_code: String,
    },

    /// The batch references a room missing from the catalog.
    #[error("assignments reference unknown room {room_code}")]
    UnknownRoom { room_code: String },
}

/// Deduplicated warnings collected during one audit run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Warnings in first-seen order, one entry per distinct problem.
    pub warnings: Vec<DataWarning>,
}

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning, logging it the first time it is seen.
    pub fn record(&mut self, warning: DataWarning) {
        if !self.warnings.contains(&warning) {
            log::warn!("{warning}");
            self.warnings.push(warning);
        }
    }

    /// Whether any warnings were recorded.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of distinct warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}
