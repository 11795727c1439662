//! Read-only catalog query commands.

use color_eyre::Result;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::models::Project;

use super::{print_json, App};

impl App {
    /// List projects, narrowing by status, category and featured flag.
    pub fn run_list(
        &self,
        featured: bool,
        status: Option<&str>,
        category: Option<&str>,
    ) -> Result<()> {
        let ctx = self.context()?;
        let catalog = &ctx.catalog;
        let projects = select_projects(catalog, featured, status, category);

        tracing::info!("Listing {} of {} projects", projects.len(), catalog.len());
        print_json(&projects)
    }

    /// Show one project; an unknown slug is a not-found error.
    pub fn run_show(&self, slug: &str) -> Result<()> {
        let ctx = self.context()?;
        match ctx.catalog.project_by_slug(slug) {
            Some(project) => print_json(project),
            None => Err(AppError::ProjectNotFound(slug.to_string()).into()),
        }
    }

    pub fn run_categories(&self) -> Result<()> {
        let ctx = self.context()?;
        print_json(&ctx.catalog.project_categories())
    }

    pub fn run_slugs(&self) -> Result<()> {
        let ctx = self.context()?;
        print_json(&ctx.catalog.project_slugs())
    }
}

/// Projects matching every given filter, in catalog order.
fn select_projects<'a>(
    catalog: &'a Catalog,
    featured: bool,
    status: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a Project> {
    let mut projects: Vec<&Project> = match (status, featured) {
        (Some(status), _) => catalog.projects_by_status_name(status),
        (None, true) => catalog.featured_projects(),
        (None, false) => catalog.all_projects().iter().collect(),
    };
    if featured {
        projects.retain(|p| p.featured);
    }
    if let Some(category) = category {
        projects.retain(|p| p.category.as_str() == category);
    }
    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::Context;
    use crate::models::{Category, Status};

    fn context() -> Context {
        let template = crate::catalog::builtin_projects()[0].clone();
        let rows = [
            (1, Status::Completed, Category::WebApp, true),
            (2, Status::Completed, Category::Api, true),
            (3, Status::Completed, Category::WebApp, false),
            (4, Status::Planned, Category::WebApp, true),
            (5, Status::InProgress, Category::Library, false),
        ];
        let projects = rows
            .iter()
            .map(|&(id, status, category, featured)| Project {
                id,
                slug: format!("project-{}", id),
                status,
                category,
                featured,
                ..template.clone()
            })
            .collect();
        Context::new(Catalog::new(projects).unwrap(), Config::default())
    }

    fn ids(projects: Vec<&Project>) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_select_without_filters_returns_all() {
        let ctx = context();
        assert_eq!(ids(select_projects(&ctx.catalog, false, None, None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_single_filters() {
        let ctx = context();
        assert_eq!(ids(select_projects(&ctx.catalog, true, None, None)), vec![1, 2, 4]);
        assert_eq!(ids(select_projects(&ctx.catalog, false, Some("completed"), None)), vec![1, 2, 3]);
        assert_eq!(ids(select_projects(&ctx.catalog, false, None, Some("web-app"))), vec![1, 3, 4]);
    }

    #[test]
    fn test_select_status_with_featured() {
        let ctx = context();
        assert_eq!(ids(select_projects(&ctx.catalog, true, Some("completed"), None)), vec![1, 2]);
    }

    #[test]
    fn test_select_status_with_category() {
        let ctx = context();
        assert_eq!(
            ids(select_projects(&ctx.catalog, false, Some("completed"), Some("web-app"))),
            vec![1, 3]
        );
    }

    #[test]
    fn test_select_all_three_filters() {
        let ctx = context();
        assert_eq!(
            ids(select_projects(&ctx.catalog, true, Some("completed"), Some("web-app"))),
            vec![1]
        );
        assert_eq!(
            ids(select_projects(&ctx.catalog, true, Some("planned"), Some("web-app"))),
            vec![4]
        );
    }

    #[test]
    fn test_select_unknown_values_match_nothing() {
        let ctx = context();
        assert!(select_projects(&ctx.catalog, false, Some("archived"), None).is_empty());
        assert!(select_projects(&ctx.catalog, false, None, Some("web-development")).is_empty());
    }
}
