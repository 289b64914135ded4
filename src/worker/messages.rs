//! Supply worker message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the UI thread and
//! the background thread that talks to the record source. Every fetch carries a
//! monotonically increasing `request_id`; the app keeps only the response to its
//! most recent request, so a slow stale fetch can never overwrite a newer list.

use crate::domain::Record;
use serde::{Deserialize, Serialize};

/// Messages sent from the UI thread to the supply worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyRequest {
    /// Fetch the complete record list.
    Fetch {
        /// Identifier echoed back in the response.
        request_id: u64,
    },

    /// Stop the worker loop.
    Shutdown,
}

/// Responses sent from the supply worker back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyResponse {
    /// The source produced a list (already de-duplicated by id).
    Loaded {
        request_id: u64,
        records: Vec<Record>,
    },

    /// The source failed.
    Failed {
        request_id: u64,
        /// Human-readable error message.
        message: String,
    },
}

impl SupplyResponse {
    /// The id of the request this response answers.
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::Loaded { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}
