//! Validation of hand-authored project drafts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::{Category, ProjectDraft, Status};

static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid year-month pattern"));

/// Outcome of validating a draft.
///
/// `errors` lists every violation in a fixed order; an empty list means the
/// draft is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks a draft against the record schema, collecting all violations.
///
/// Dates only have their shape checked: `2024-13` passes.
pub fn validate_project(draft: &ProjectDraft) -> ValidationReport {
    let mut errors = Vec::new();
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

    if !present(&draft.title) {
        errors.push("Title is required".to_string());
    }
    if !present(&draft.short_description) {
        errors.push("Short description is required".to_string());
    }
    if !present(&draft.long_description) {
        errors.push("Long description is required".to_string());
    }
    if draft.technologies.as_ref().map_or(true, Vec::is_empty) {
        errors.push("At least one technology is required".to_string());
    }
    if !present(&draft.category) {
        errors.push("Category is required".to_string());
    }
    if !present(&draft.status) {
        errors.push("Status is required".to_string());
    }
    if !present(&draft.start_date) {
        errors.push("Start date is required".to_string());
    }
    if !present(&draft.role) {
        errors.push("Role is required".to_string());
    }
    if draft.team_size.map_or(true, |n| n < 1) {
        errors.push("Team size must be a number >= 1".to_string());
    }

    if let Some(category) = draft.category.as_deref().filter(|s| !s.is_empty()) {
        if category.parse::<Category>().is_err() {
            errors.push(format!(
                "Invalid category. Must be one of: {}",
                Category::valid_values()
            ));
        }
    }
    if let Some(status) = draft.status.as_deref().filter(|s| !s.is_empty()) {
        if status.parse::<Status>().is_err() {
            errors.push(format!(
                "Invalid status. Must be one of: {}",
                Status::valid_values()
            ));
        }
    }

    if let Some(start) = draft.start_date.as_deref().filter(|s| !s.is_empty()) {
        if !YEAR_MONTH.is_match(start) {
            errors.push("Start date must be in YYYY-MM format".to_string());
        }
    }
    if let Some(end) = draft.end_date.as_deref().filter(|s| !s.is_empty()) {
        if !YEAR_MONTH.is_match(end) {
            errors.push("End date must be in YYYY-MM format".to_string());
        }
    }

    if !errors.is_empty() {
        tracing::debug!(
            title = draft.title.as_deref().unwrap_or_default(),
            count = errors.len(),
            "Draft failed validation"
        );
    }

    ValidationReport::from_errors(errors)
}
