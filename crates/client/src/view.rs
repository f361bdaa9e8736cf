//! Pure presentation: controller state in, display strings out.
//!
//! Nothing here performs I/O or mutates state, which keeps every render
//! path unit-testable.

use crate::controller::{Notice, NoticeKind};
use crate::form::FieldErrors;
use crate::model::Project;

/// Render one project card: title line, description (or a placeholder),
/// tech tags, and the external link when present.
pub fn render_card(project: &Project) -> String {
    let mut out = String::new();
    out.push_str(&format!("#{} {}\n", project.id, project.title));

    let description = if project.description.is_empty() {
        "No description provided"
    } else {
        &project.description
    };
    out.push_str(&format!("    {description}\n"));

    if !project.tech_stack.is_empty() {
        let tags: Vec<String> = project
            .tech_stack
            .iter()
            .map(|tech| format!("[{tech}]"))
            .collect();
        out.push_str(&format!("    {}\n", tags.join(" ")));
    }

    if !project.github_link.is_empty() {
        out.push_str(&format!("    {}\n", project.github_link));
    }

    out
}

/// Render the project listing, or the loading/empty state that applies.
pub fn render_projects(projects: &[Project], search_term: &str, loading: bool) -> String {
    if loading {
        return "Loading projects...".to_string();
    }

    if projects.is_empty() {
        let term = search_term.trim();
        return if term.is_empty() {
            "No projects yet. Add your first project to get started!".to_string()
        } else {
            format!("No projects match \"{term}\". Try a different search term.")
        };
    }

    projects.iter().map(render_card).collect::<Vec<_>>().join("\n")
}

/// Render a transient notice banner.
pub fn render_notice(notice: &Notice) -> String {
    let prefix = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    format!("[{prefix}] {}", notice.message)
}

/// Render per-field form errors, one line per failing field.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    let mut lines = Vec::new();
    if let Some(msg) = errors.title {
        lines.push(format!("  title: {msg}"));
    }
    if let Some(msg) = errors.github_link {
        lines.push(format!("  githubLink: {msg}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project(description: &str, stack: &[&str], link: &str) -> Project {
        Project {
            id: 1,
            title: "Sample".to_string(),
            description: description.to_string(),
            tech_stack: stack.iter().map(|s| s.to_string()).collect(),
            github_link: link.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn card_shows_placeholder_for_empty_description() {
        let rendered = render_card(&project("", &[], ""));
        assert!(rendered.contains("No description provided"));
    }

    #[test]
    fn card_shows_tags_and_link_when_present() {
        let rendered = render_card(&project("d", &["Python", "OpenCV"], "https://github.com/a/b"));
        assert!(rendered.contains("[Python] [OpenCV]"));
        assert!(rendered.contains("https://github.com/a/b"));
    }

    #[test]
    fn card_omits_link_line_when_absent() {
        let rendered = render_card(&project("d", &[], ""));
        assert!(!rendered.contains("http"));
    }

    #[test]
    fn empty_list_without_term_invites_first_project() {
        let rendered = render_projects(&[], "", false);
        assert!(rendered.contains("No projects yet"));
    }

    #[test]
    fn empty_list_with_term_names_the_term() {
        let rendered = render_projects(&[], "rust", false);
        assert!(rendered.contains("\"rust\""));
    }

    #[test]
    fn loading_state_wins_over_everything() {
        let rendered = render_projects(&[], "rust", true);
        assert_eq!(rendered, "Loading projects...");
    }
}
