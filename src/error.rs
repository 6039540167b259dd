//! Error types for rendering and bundling the page.

use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentIssue;

/// Authoring defects found by `content::lint`.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content has {} authoring issue(s): {}", .0.len(), join_issues(.0))]
    Authoring(Vec<ContentIssue>),
}

fn join_issues(issues: &[ContentIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Content(#[from] ContentError),
}

pub type Result<T> = std::result::Result<T, PageError>;
