//! Helpers for hand-authoring a new catalog record.
//!
//! None of this runs while the catalog is being served. A developer uses it
//! to scaffold and check a record before adding it to the catalog file.

use chrono::{NaiveDate, Utc};

use crate::context::{AppCatalog, Context};
use crate::di::FromContext;
use crate::models::ProjectDraft;

/// Role assumed for a new record unless overridden.
pub const DEFAULT_ROLE: &str = "Full-Stack Developer";

/// Derives a URL slug from a project title.
///
/// Lower-cases the title, drops everything except `a-z`, `0-9`, whitespace
/// and `-`, trims, then turns each whitespace run into a single hyphen and
/// collapses repeated hyphens. Applying it twice gives the same result as
/// applying it once.
pub fn generate_slug(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-'
        })
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

/// Service for scaffolding new records against the current catalog.
#[derive(FromContext, Clone)]
pub struct AuthoringService {
    catalog: AppCatalog,
}

impl AuthoringService {
    pub fn new(catalog: AppCatalog) -> Self {
        Self { catalog }
    }

    /// The id the next record should use.
    pub fn next_project_id(&self) -> u32 {
        self.catalog.next_project_id()
    }

    /// Builds a draft from the defaults plus `overrides`, dated this month.
    pub fn create_project_template(&self, overrides: ProjectDraft) -> ProjectDraft {
        self.create_project_template_at(overrides, Utc::now().date_naive())
    }

    /// Builds a draft from the defaults plus `overrides`.
    ///
    /// `today` supplies the default `startDate`. When the resulting draft has
    /// a title but no slug, the slug is derived from the title.
    pub fn create_project_template_at(
        &self,
        overrides: ProjectDraft,
        today: NaiveDate,
    ) -> ProjectDraft {
        let defaults = ProjectDraft {
            id: Some(self.next_project_id()),
            slug: Some(String::new()),
            title: Some(String::new()),
            short_description: Some(String::new()),
            long_description: Some(String::new()),
            technologies: Some(Vec::new()),
            category: Some("web-app".to_string()),
            status: Some("planned".to_string()),
            featured: Some(false),
            image: None,
            demo_url: None,
            github_url: None,
            start_date: Some(today.format("%Y-%m").to_string()),
            end_date: None,
            team_size: Some(1),
            role: Some(DEFAULT_ROLE.to_string()),
            highlights: Some(Vec::new()),
            challenges: Some(Vec::new()),
        };

        let mut template = defaults.merge(overrides);
        let needs_slug = template.slug.as_deref().map_or(true, str::is_empty);
        if needs_slug {
            if let Some(slug) = template.title().map(generate_slug) {
                template.slug = Some(slug);
            }
        }

        tracing::debug!(
            id = template.id,
            slug = template.slug.as_deref().unwrap_or_default(),
            "Created project template"
        );
        template
    }
}

/// Worked example drafts, keyed by a short name.
pub fn examples() -> Vec<(&'static str, ProjectDraft)> {
    let strings = |items: &[&str]| Some(items.iter().map(|s| s.to_string()).collect::<Vec<_>>());

    vec![
        (
            "web-app",
            ProjectDraft {
                title: Some("My Awesome Web App".into()),
                short_description: Some(
                    "A modern web application built with React and Node.js.".into(),
                ),
                long_description: Some(
                    "This web application demonstrates modern development practices including \
                     responsive design, user authentication, and real-time features. Built with \
                     performance and scalability in mind."
                        .into(),
                ),
                technologies: strings(&["React", "Node.js", "MongoDB", "Tailwind CSS"]),
                category: Some("web-app".into()),
                status: Some("completed".into()),
                featured: Some(true),
                demo_url: Some("https://my-app.vercel.app".into()),
                github_url: Some("https://github.com/username/my-app".into()),
                start_date: Some("2024-01".into()),
                end_date: Some("2024-06".into()),
                team_size: Some(2),
                role: Some("Frontend Developer".into()),
                highlights: strings(&[
                    "Responsive design across all devices",
                    "Real-time notifications",
                    "User authentication system",
                    "High performance with 95+ Lighthouse score",
                ]),
                challenges: strings(&[
                    "Implementing complex state management",
                    "Optimizing for mobile performance",
                ]),
                ..Default::default()
            },
        ),
        (
            "api",
            ProjectDraft {
                title: Some("REST API for E-commerce".into()),
                short_description: Some(
                    "A RESTful API for managing e-commerce operations.".into(),
                ),
                long_description: Some(
                    "Comprehensive API built with Express.js and MongoDB, featuring \
                     authentication, payment processing, inventory management, and order \
                     tracking."
                        .into(),
                ),
                technologies: strings(&["Node.js", "Express.js", "MongoDB", "JWT", "Stripe"]),
                category: Some("api".into()),
                status: Some("completed".into()),
                featured: Some(false),
                github_url: Some("https://github.com/username/ecommerce-api".into()),
                start_date: Some("2024-03".into()),
                end_date: Some("2024-05".into()),
                team_size: Some(1),
                role: Some("Backend Developer".into()),
                highlights: strings(&[
                    "RESTful API with 25+ endpoints",
                    "JWT authentication system",
                    "Payment processing with Stripe",
                    "95% test coverage",
                ]),
                ..Default::default()
            },
        ),
    ]
}

/// Step-by-step instructions for adding a record to a catalog file.
pub const AUTHORING_GUIDE: &str = "\
To add a new project:

1. Generate a base template:
     folio new --title \"Your Project Title\" --short \"Brief description...\"

2. Fill in the remaining fields and validate the draft:
     folio validate draft.json

3. Append the record to the JSON catalog file named by `catalog.path`.

4. Leave `slug` empty to have it derived from the title.

Required fields:
- title
- shortDescription
- longDescription
- technologies (array, at least one entry)
- category (web-app, mobile-app, desktop-app, api, library, other)
- status (completed, in-progress, planned)
- startDate (YYYY-MM format)
- role
- teamSize (number >= 1)

Optional fields:
- featured (boolean)
- image (string)
- demoUrl (string)
- githubUrl (string)
- endDate (YYYY-MM format)
- highlights (array)
- challenges (array)
";
