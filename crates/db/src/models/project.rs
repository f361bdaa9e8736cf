//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Serializes with camelCase field names, which is the wire shape the
/// client expects (`techStack`, `githubLink`, `createdAt`).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. Only the title is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_link: String,
}

/// DTO for updating an existing project.
///
/// Updates are full replacements of the four mutable fields; omitted
/// optional fields reset to their defaults rather than keeping the old
/// value. `id` and `created_at` are never touched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_link: String,
}
