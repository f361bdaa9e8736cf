//! Client-side state controller.
//!
//! Owns the fetched record list, the derived filtered view, the active
//! search term, and the transient notice. Mutations go through the API
//! first and are applied locally only after the server confirms them; a
//! failed call leaves local state exactly as it was.

use folio_core::types::DbId;

use crate::api::{ApiClient, ClientError};
use crate::model::{Project, ProjectDraft};

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-shot user-facing message, dismissed explicitly or replaced by the
/// next one.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

pub struct Controller {
    api: ApiClient,
    projects: Vec<Project>,
    filtered: Vec<Project>,
    search_term: String,
    loading: bool,
    notice: Option<Notice>,
}

impl Controller {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            projects: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            loading: false,
            notice: None,
        }
    }

    /// The filtered view the presentation layer renders from.
    pub fn filtered(&self) -> &[Project] {
        &self.filtered
    }

    /// The full fetched sequence, in server order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Find a fetched record by id.
    pub fn find(&self, id: DbId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Fetch the full record list from the server.
    ///
    /// On transport failure the list keeps its previous contents (empty on
    /// first load) and an error notice tells the user to check the server.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.api.list_projects().await {
            Ok(projects) => {
                self.projects = projects;
                self.recompute_filter();
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch projects");
                self.set_notice(
                    "Failed to fetch projects. Please check if the server is running.",
                    NoticeKind::Error,
                );
            }
        }
        self.loading = false;
    }

    /// Update the search term and recompute the filtered view locally.
    /// Never touches the server.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute_filter();
    }

    /// Submit a new record. On success the created record is prepended
    /// locally; on failure the error is returned to the form layer and
    /// local state is untouched.
    pub async fn create(&mut self, draft: &ProjectDraft) -> Result<(), ClientError> {
        let project = self.api.create_project(draft).await?;
        self.apply_created(project);
        self.set_notice("Project added successfully!", NoticeKind::Success);
        Ok(())
    }

    /// Submit a full-record replacement. On success the matching record is
    /// replaced in place (by id); failure behaves as for [`create`].
    ///
    /// [`create`]: Controller::create
    pub async fn update(&mut self, id: DbId, draft: &ProjectDraft) -> Result<(), ClientError> {
        let project = self.api.update_project(id, draft).await?;
        self.apply_updated(project);
        self.set_notice("Project updated successfully!", NoticeKind::Success);
        Ok(())
    }

    /// Delete a record. The caller must already have confirmed the action
    /// with the user. No optimistic removal: on failure the list is left
    /// unchanged and an error notice is set.
    pub async fn delete(&mut self, id: DbId) {
        match self.api.delete_project(id).await {
            Ok(()) => {
                self.apply_deleted(id);
                self.set_notice("Project deleted successfully!", NoticeKind::Success);
            }
            Err(err) => {
                tracing::error!(error = %err, id, "Failed to delete project");
                self.set_notice(
                    "Failed to delete project. Please try again.",
                    NoticeKind::Error,
                );
            }
        }
    }

    // -- Local state transitions (applied only after server confirmation) --

    /// Prepend a newly created record.
    pub fn apply_created(&mut self, project: Project) {
        self.projects.insert(0, project);
        self.recompute_filter();
    }

    /// Replace the record with the same id, keeping its position.
    pub fn apply_updated(&mut self, project: Project) {
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        }
        self.recompute_filter();
    }

    /// Remove the record with the given id.
    pub fn apply_deleted(&mut self, id: DbId) {
        self.projects.retain(|p| p.id != id);
        self.recompute_filter();
    }

    fn set_notice(&mut self, message: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            message: message.into(),
            kind,
        });
    }

    fn recompute_filter(&mut self) {
        self.filtered = self
            .projects
            .iter()
            .filter(|p| matches_term(p, &self.search_term))
            .cloned()
            .collect();
    }
}

/// Case-insensitive substring match across a record's searchable fields.
///
/// A record matches when the term appears in its title, its description, or
/// any single tech-stack entry. A blank term matches everything.
pub fn matches_term(project: &Project, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(&term)
        || project.description.to_lowercase().contains(&term)
        || project
            .tech_stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(&term))
}
