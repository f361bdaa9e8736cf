//! Wire types for the folio API.
//!
//! The client owns its view of the wire shapes rather than importing the
//! server's database models; the serde field names are the contract.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A project record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: String,
    pub created_at: Timestamp,
}

/// Outgoing payload for create and update calls.
///
/// The same shape serves both: creates post it, updates put it (updates are
/// full replacements, so there is no partial variant).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: String,
}
