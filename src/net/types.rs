//! Wire DTOs for the processing-service API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the service's response schema field-for-field so serde
//! round-trips stay lossless. The server owns every field; the client only
//! reads and re-renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A submission record as returned by the processing service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Opaque submission identifier assigned by the server.
    pub id: String,
    /// The user-supplied payload under processing.
    pub content: String,
    /// Current lifecycle status.
    pub status: SubmissionStatus,
    /// ISO 8601 UTC timestamp of submission creation.
    pub created_at: String,
    /// ISO 8601 UTC timestamp of the terminal verdict, once one exists.
    #[serde(default)]
    pub processed_at: Option<String>,
}

/// Processing lifecycle status, uppercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmissionStatus {
    /// Accepted by the server, not yet picked up for processing.
    Pending,
    /// A worker is validating the content.
    Processing,
    /// Terminal: content passed validation.
    Passed,
    /// Terminal: content failed validation.
    Failed,
}

impl SubmissionStatus {
    /// Whether this status ends the submission lifecycle. Polling stops once
    /// a terminal status is observed.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Passed | Self::Failed)
    }

    /// Wire/display form of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}
