//! Field validation rules for project records.
//!
//! The store applies these before any write; the client form applies them
//! before submission for immediate feedback. Error messages name the wire
//! field they belong to.

use crate::error::CoreError;

/// Message for a missing or blank title.
pub const TITLE_REQUIRED: &str = "Project title is required";

/// Message for a malformed GitHub link.
pub const LINK_INVALID: &str = "GitHub link must start with http:// or https://";

/// Check a title. `None` means the value is acceptable.
///
/// A title consisting only of whitespace counts as missing.
pub fn title_error(title: &str) -> Option<&'static str> {
    if title.trim().is_empty() {
        Some(TITLE_REQUIRED)
    } else {
        None
    }
}

/// Check a GitHub link. Empty values are always acceptable; non-empty
/// values must be absolute `http://` or `https://` URLs with a non-empty
/// remainder.
pub fn github_link_error(link: &str) -> Option<&'static str> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    let rest = link
        .strip_prefix("http://")
        .or_else(|| link.strip_prefix("https://"));
    match rest {
        Some(rest) if !rest.is_empty() => None,
        _ => Some(LINK_INVALID),
    }
}

/// Validate the mutable fields of a project record.
///
/// Collects every failing field into a single message, e.g.
/// `"title: Project title is required; githubLink: ..."`, so callers can
/// surface all problems at once.
pub fn validate_project(title: &str, github_link: &str) -> Result<(), CoreError> {
    let mut failures = Vec::new();

    if let Some(msg) = title_error(title) {
        failures.push(format!("title: {msg}"));
    }
    if let Some(msg) = github_link_error(github_link) {
        failures.push(format!("githubLink: {msg}"));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(failures.join("; ")))
    }
}
