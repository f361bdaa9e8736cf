//! Create/edit form state and validation.
//!
//! Mirrors the server's rules via `folio_core::validation` so the user gets
//! field-level feedback before a request is ever sent. The server remains
//! authoritative; a stale or bypassed client still cannot write a bad
//! record.

use folio_core::validation;

use crate::model::{Project, ProjectDraft};

/// Raw form fields as entered by the user. The tech stack is held as one
/// comma-separated line until submission.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub github_link: String,
}

/// Per-field validation outcomes; `None` means the field is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub github_link: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.github_link.is_none()
    }
}

impl ProjectForm {
    /// Pre-fill the form from an existing record for editing.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tech_stack: project.tech_stack.join(", "),
            github_link: project.github_link.clone(),
        }
    }

    /// Check the form against the shared field rules.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            title: validation::title_error(&self.title),
            github_link: validation::github_link_error(&self.github_link),
        }
    }

    /// Convert to the outgoing payload: trims every field and splits the
    /// tech stack on commas, dropping empty entries and preserving order.
    pub fn to_draft(&self) -> ProjectDraft {
        let tech_stack = self
            .tech_stack
            .split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .map(str::to_string)
            .collect();

        ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            tech_stack,
            github_link: self.github_link.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_stack_splits_on_commas_and_drops_empties() {
        let form = ProjectForm {
            title: "A".to_string(),
            tech_stack: "Python, TensorFlow , ,Keras".to_string(),
            ..Default::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.tech_stack, vec!["Python", "TensorFlow", "Keras"]);
    }

    #[test]
    fn blank_form_fails_only_on_title() {
        let errors = ProjectForm::default().validate();
        assert!(errors.title.is_some());
        assert!(errors.github_link.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn malformed_link_is_reported_per_field() {
        let form = ProjectForm {
            title: "A".to_string(),
            github_link: "github.com/a/b".to_string(),
            ..Default::default()
        };
        let errors = form.validate();
        assert!(errors.title.is_none());
        assert!(errors.github_link.is_some());
    }

    #[test]
    fn draft_trims_fields() {
        let form = ProjectForm {
            title: "  Spaced  ".to_string(),
            description: " d ".to_string(),
            tech_stack: String::new(),
            github_link: " https://github.com/a/b ".to_string(),
        };
        let draft = form.to_draft();
        assert_eq!(draft.title, "Spaced");
        assert_eq!(draft.description, "d");
        assert!(draft.tech_stack.is_empty());
        assert_eq!(draft.github_link, "https://github.com/a/b");
    }
}
