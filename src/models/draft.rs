//! Loosely typed project candidate used at the authoring and ingestion boundary.

use serde::{Deserialize, Serialize};

use super::serde_helpers as lenient;

/// A project record as a person writes it by hand.
///
/// Every field is optional and category/status are plain strings, so a draft
/// can hold anything a catalog file or the command line hands us. Turning a
/// draft into a [`Project`](super::Project) goes through the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub demo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub team_size: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub challenges: Option<Vec<String>>,
}

impl ProjectDraft {
    /// Applies `overrides` on top of `self`, field by field.
    ///
    /// A field set in `overrides` always wins; unset fields keep the value
    /// from `self`.
    pub fn merge(self, overrides: ProjectDraft) -> ProjectDraft {
        ProjectDraft {
            id: overrides.id.or(self.id),
            slug: overrides.slug.or(self.slug),
            title: overrides.title.or(self.title),
            short_description: overrides.short_description.or(self.short_description),
            long_description: overrides.long_description.or(self.long_description),
            technologies: overrides.technologies.or(self.technologies),
            category: overrides.category.or(self.category),
            status: overrides.status.or(self.status),
            featured: overrides.featured.or(self.featured),
            image: overrides.image.or(self.image),
            demo_url: overrides.demo_url.or(self.demo_url),
            github_url: overrides.github_url.or(self.github_url),
            start_date: overrides.start_date.or(self.start_date),
            end_date: overrides.end_date.or(self.end_date),
            team_size: overrides.team_size.or(self.team_size),
            role: overrides.role.or(self.role),
            highlights: overrides.highlights.or(self.highlights),
            challenges: overrides.challenges.or(self.challenges),
        }
    }

    /// The title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}
