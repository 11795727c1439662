//! The project record shown on the portfolio.

use serde::{Deserialize, Serialize};

use super::{Category, ProjectDraft, Status};
use crate::error::AppError;
use crate::services::{generate_slug, validate_project};

/// A single portfolio project.
///
/// Records are immutable once they are part of a
/// [`Catalog`](crate::catalog::Catalog); consumers only ever see `&Project`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Positive, unique within the catalog.
    pub id: u32,
    /// External identifier, unique within the catalog (e.g. `/projects/<slug>`).
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    /// At least one entry.
    pub technologies: Vec<String>,
    pub category: Category,
    pub status: Status,
    /// Shown on the home page when set.
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// `YYYY-MM`.
    pub start_date: String,
    /// `YYYY-MM`, absent for ongoing work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub team_size: u32,
    pub role: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
}

impl Project {
    /// Returns the loosely typed view of this record, e.g. for re-validation.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft::from(self)
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        ProjectDraft {
            id: Some(project.id),
            slug: Some(project.slug.clone()),
            title: Some(project.title.clone()),
            short_description: Some(project.short_description.clone()),
            long_description: Some(project.long_description.clone()),
            technologies: Some(project.technologies.clone()),
            category: Some(project.category.to_string()),
            status: Some(project.status.to_string()),
            featured: Some(project.featured),
            image: project.image.clone(),
            demo_url: project.demo_url.clone(),
            github_url: project.github_url.clone(),
            start_date: Some(project.start_date.clone()),
            end_date: project.end_date.clone(),
            team_size: Some(i64::from(project.team_size)),
            role: Some(project.role.clone()),
            highlights: Some(project.highlights.clone()),
            challenges: Some(project.challenges.clone()),
        }
    }
}

impl TryFrom<ProjectDraft> for Project {
    type Error = AppError;

    /// Validates the draft and converts it into a typed record.
    ///
    /// On top of the validator's checks, a record needs a positive `id`. A
    /// missing or empty `slug` is derived from the title.
    fn try_from(draft: ProjectDraft) -> Result<Self, Self::Error> {
        let report = validate_project(&draft);
        let mut errors = report.errors;
        if draft.id.map_or(true, |id| id == 0) {
            errors.push("Id must be a number >= 1".to_string());
        }

        let title = draft.title.clone().unwrap_or_default();
        let invalid = |errors: Vec<String>| AppError::InvalidProject {
            title: title.clone(),
            errors,
        };

        let category = draft.category.as_deref().unwrap_or_default().parse::<Category>();
        let status = draft.status.as_deref().unwrap_or_default().parse::<Status>();
        let team_size = draft.team_size.and_then(|n| u32::try_from(n).ok());

        match (errors.is_empty(), draft.id, category, status, team_size) {
            (true, Some(id), Ok(category), Ok(status), Some(team_size)) => {
                let slug = match draft.slug.filter(|s| !s.is_empty()) {
                    Some(slug) => slug,
                    None => generate_slug(&title),
                };

                Ok(Project {
                    id,
                    slug,
                    title: title.clone(),
                    short_description: draft.short_description.unwrap_or_default(),
                    long_description: draft.long_description.unwrap_or_default(),
                    technologies: draft.technologies.unwrap_or_default(),
                    category,
                    status,
                    featured: draft.featured.unwrap_or(false),
                    image: draft.image,
                    demo_url: draft.demo_url,
                    github_url: draft.github_url,
                    start_date: draft.start_date.unwrap_or_default(),
                    end_date: draft.end_date,
                    team_size,
                    role: draft.role.unwrap_or_default(),
                    highlights: draft.highlights.unwrap_or_default(),
                    challenges: draft.challenges.unwrap_or_default(),
                })
            }
            (true, _, _, _, _) => {
                // Only reachable for a team size beyond u32.
                Err(invalid(vec!["Team size is out of range".to_string()]))
            }
            (false, ..) => Err(invalid(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProjectDraft {
        ProjectDraft {
            id: Some(9),
            title: Some("Realtime Dashboard".into()),
            short_description: Some("Live metrics.".into()),
            long_description: Some("Streams metrics to a dashboard.".into()),
            technologies: Some(vec!["Rust".into(), "Svelte".into()]),
            category: Some("web-app".into()),
            status: Some("in-progress".into()),
            start_date: Some("2024-02".into()),
            team_size: Some(3),
            role: Some("Backend Developer".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_try_from_derives_slug_from_title() {
        let project = Project::try_from(complete_draft()).unwrap();
        assert_eq!(project.slug, "realtime-dashboard");
        assert_eq!(project.category, Category::WebApp);
        assert_eq!(project.status, Status::InProgress);
        assert!(!project.featured);
        assert!(project.highlights.is_empty());
    }

    #[test]
    fn test_try_from_keeps_explicit_slug() {
        let draft = ProjectDraft {
            slug: Some("dash".into()),
            ..complete_draft()
        };
        assert_eq!(Project::try_from(draft).unwrap().slug, "dash");
    }

    #[test]
    fn test_try_from_requires_id() {
        let draft = ProjectDraft {
            id: None,
            ..complete_draft()
        };
        match Project::try_from(draft) {
            Err(AppError::InvalidProject { errors, .. }) => {
                assert_eq!(errors, vec!["Id must be a number >= 1"]);
            }
            other => panic!("expected InvalidProject, got {:?}", other),
        }
    }

    #[test]
    fn test_try_from_reports_every_violation() {
        let draft = ProjectDraft {
            category: Some("game".into()),
            start_date: Some("March 2024".into()),
            ..complete_draft()
        };
        match Project::try_from(draft) {
            Err(AppError::InvalidProject { title, errors }) => {
                assert_eq!(title, "Realtime Dashboard");
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected InvalidProject, got {:?}", other),
        }
    }

    #[test]
    fn test_to_draft_round_trips() {
        let project = Project::try_from(complete_draft()).unwrap();
        let again = Project::try_from(project.to_draft()).unwrap();
        assert_eq!(project, again);
    }

    #[test]
    fn test_project_serializes_camel_case_and_skips_absent_links() {
        let project = Project::try_from(complete_draft()).unwrap();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["shortDescription"], "Live metrics.");
        assert_eq!(json["category"], "web-app");
        assert!(json.get("demoUrl").is_none());
    }
}
