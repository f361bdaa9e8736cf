//! Repository for the `projects` table.

use folio_core::types::DbId;
use folio_core::validation;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, tech_stack, github_link, created_at";

/// Provides CRUD operations for projects.
///
/// All write paths validate the title and link invariants first and trim
/// text fields, so a record that reaches the database always satisfies
/// them. Nothing here validates tech-stack entries; they are free-form
/// labels stored in caller order.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row with its generated
    /// `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, DbError> {
        validation::validate_project(&input.title, &input.github_link)?;

        let query = format!(
            "INSERT INTO projects (title, description, tech_stack, github_link)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(input.title.trim())
            .bind(input.description.trim())
            .bind(&input.tech_stack)
            .bind(input.github_link.trim())
            .fetch_one(pool)
            .await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(project)
    }

    /// List all projects, most recently created first.
    ///
    /// `id` is the tiebreak so rows inserted in the same instant (bulk
    /// seeding) still come back in a stable newest-first order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        let projects = sqlx::query_as::<_, Project>(&query).fetch_all(pool).await?;
        Ok(projects)
    }

    /// Replace the mutable fields of a project.
    ///
    /// This is a full replacement, not a merge: every mutable column takes
    /// the incoming value. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, DbError> {
        validation::validate_project(&input.title, &input.github_link)?;

        let query = format!(
            "UPDATE projects SET
                title = $2,
                description = $3,
                tech_stack = $4,
                github_link = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(input.description.trim())
            .bind(&input.tech_stack)
            .bind(input.github_link.trim())
            .fetch_optional(pool)
            .await?;
        Ok(project)
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every project. Returns the number of rows removed.
    ///
    /// Used by the seed binary's reset step.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM projects").execute(pool).await?;
        let deleted = result.rows_affected();
        tracing::debug!(deleted, "Cleared projects table");
        Ok(deleted)
    }
}
