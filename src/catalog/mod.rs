//! The in-memory project catalog.
//!
//! A [`Catalog`] owns an ordered sequence of [`Project`] records and answers
//! read-only queries over it. It is built once by the composition root (from
//! the compiled-in records or a JSON file) and shared through the
//! [`Context`](crate::context::Context); nothing mutates it afterwards.

mod seed;

use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::models::{Category, Project, ProjectDraft, Status};
use crate::services::validate_project;

pub use seed::builtin_projects;

/// Ordered, validated collection of project records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid records and duplicate ids or slugs.
    pub fn new(projects: Vec<Project>) -> Result<Self, AppError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for project in &projects {
            let mut errors = validate_project(&project.to_draft()).errors;
            if project.id == 0 {
                errors.push("Id must be a number >= 1".to_string());
            }
            if project.id == u32::MAX {
                errors.push(format!("Id must be below {}", u32::MAX));
            }
            if project.slug.is_empty() {
                errors.push("Slug is required".to_string());
            }
            if !errors.is_empty() {
                return Err(AppError::InvalidProject {
                    title: project.title.clone(),
                    errors,
                });
            }
            if !ids.insert(project.id) {
                return Err(AppError::DuplicateId(project.id));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(AppError::DuplicateSlug(project.slug.clone()));
            }
        }

        tracing::debug!(count = projects.len(), "Built project catalog");
        Ok(Self { projects })
    }

    /// A catalog with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The records compiled into the binary.
    pub fn builtin() -> Result<Self, AppError> {
        Self::new(builtin_projects())
    }

    /// Converts and validates hand-authored drafts, in order.
    pub fn from_drafts(drafts: Vec<ProjectDraft>) -> Result<Self, AppError> {
        let projects = drafts
            .into_iter()
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(projects)
    }

    /// Reads a JSON array of drafts from `path`.
    pub fn load_json(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let drafts: Vec<ProjectDraft> = serde_json::from_str(&raw)?;
        let catalog = Self::from_drafts(drafts)?;

        tracing::info!(
            "Loaded {} projects from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Every record, in catalog order.
    pub fn all_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Exact, case-sensitive slug lookup.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        let found = self.projects.iter().find(|p| p.slug == slug);
        tracing::debug!(slug, found = found.is_some(), "Looked up project by slug");
        found
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn projects_by_status(&self, status: Status) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status == status).collect()
    }

    /// Like [`Catalog::projects_by_status`], for a status name from outside
    /// the crate. An unknown name matches nothing.
    pub fn projects_by_status_name(&self, name: &str) -> Vec<&Project> {
        match name.parse::<Status>() {
            Ok(status) => self.projects_by_status(status),
            Err(_) => Vec::new(),
        }
    }

    pub fn projects_by_category(&self, category: Category) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Free-form match against the category's wire name.
    pub fn projects_by_category_name(&self, name: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category.as_str() == name)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn project_categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category) {
                seen.push(project.category);
            }
        }
        seen
    }

    pub fn project_slugs(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.slug.as_str()).collect()
    }

    /// `max(id) + 1`, or `1` for an empty catalog.
    ///
    /// Cannot overflow: construction rejects `u32::MAX` as an id.
    pub fn next_project_id(&self) -> u32 {
        self.projects
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
