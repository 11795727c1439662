//! Application error types.

use thiserror::Error;

/// Application-level errors for Folio.
///
/// Catalog queries never fail; these come from building a catalog, loading
/// configuration or files, and the command-line surface.
#[derive(Error, Debug)]
pub enum AppError {
    // Catalog errors
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Invalid project '{title}': {}", .errors.join("; "))]
    InvalidProject { title: String, errors: Vec<String> },

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate project id: {0}")]
    DuplicateId(u32),

    // Input errors
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            AppError::InvalidProject { .. } => "INVALID_PROJECT",
            AppError::DuplicateSlug(_) => "DUPLICATE_SLUG",
            AppError::DuplicateId(_) => "DUPLICATE_ID",
            AppError::Io { .. } => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_project_lists_every_error() {
        let err = AppError::InvalidProject {
            title: "Chat".to_string(),
            errors: vec!["Role is required".to_string(), "Status is required".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid project 'Chat': Role is required; Status is required"
        );
        assert_eq!(err.code(), "INVALID_PROJECT");
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::ProjectNotFound("missing".to_string());
        assert_eq!(err.to_string(), "Project not found: missing");
    }
}
