//! Authoring commands for scaffolding and checking new records.

use std::path::Path;

use clap::Args;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::Serialize;

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::ProjectDraft;
use crate::services::{
    examples, generate_slug, validate_project, AuthoringService, ValidationReport,
    AUTHORING_GUIDE,
};

use super::{print_json, App};

/// Field overrides for a new project template.
#[derive(Args, Debug, Default)]
pub struct NewCommand {
    /// JSON file with a draft to start from (flags below take precedence)
    #[arg(long)]
    pub from: Option<std::path::PathBuf>,

    #[arg(long)]
    pub title: Option<String>,

    /// Explicit slug; derived from the title when omitted
    #[arg(long)]
    pub slug: Option<String>,

    /// Short description
    #[arg(long)]
    pub short: Option<String>,

    /// Long description
    #[arg(long)]
    pub long: Option<String>,

    /// Technology used (repeatable)
    #[arg(long = "tech")]
    pub technologies: Vec<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub featured: bool,

    /// Start month (YYYY-MM); defaults to the current month
    #[arg(long)]
    pub start: Option<String>,

    /// End month (YYYY-MM)
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub team_size: Option<i64>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub demo_url: Option<String>,

    #[arg(long)]
    pub github_url: Option<String>,
}

impl NewCommand {
    /// Print a template built from the defaults, the `--from` draft and flags.
    pub fn run(&self, ctx: &Context) -> Result<()> {
        let service = AuthoringService::from_ref(ctx);
        let base = match &self.from {
            Some(path) => read_single_draft(path)?,
            None => ProjectDraft::default(),
        };
        let template = service.create_project_template(base.merge(self.overrides()));

        let report = validate_project(&template);
        for error in &report.errors {
            tracing::warn!("Template incomplete: {}", error);
        }
        print_json(&template)
    }

    fn overrides(&self) -> ProjectDraft {
        ProjectDraft {
            slug: self.slug.clone(),
            title: self.title.clone(),
            short_description: self.short.clone(),
            long_description: self.long.clone(),
            technologies: (!self.technologies.is_empty()).then(|| self.technologies.clone()),
            category: self.category.clone(),
            status: self.status.clone(),
            featured: self.featured.then_some(true),
            demo_url: self.demo_url.clone(),
            github_url: self.github_url.clone(),
            start_date: self.start.clone(),
            end_date: self.end.clone(),
            team_size: self.team_size,
            role: self.role.clone(),
            ..Default::default()
        }
    }
}

/// Validation outcome for one draft in a file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftReport {
    index: usize,
    title: Option<String>,
    #[serde(flatten)]
    report: ValidationReport,
}

impl App {
    pub fn run_slug(&self, title: &str) -> Result<()> {
        println!("{}", generate_slug(title));
        Ok(())
    }

    pub fn run_next_id(&self) -> Result<()> {
        let ctx = self.context()?;
        println!("{}", AuthoringService::from_ref(&ctx).next_project_id());
        Ok(())
    }

    /// Validate every draft in `file`, failing when any is invalid.
    pub fn run_validate(&self, file: &Path) -> Result<()> {
        let drafts = read_drafts(file)?;
        let reports: Vec<DraftReport> = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| DraftReport {
                index,
                report: validate_project(&draft),
                title: draft.title,
            })
            .collect();

        print_json(&reports)?;

        let invalid = reports.iter().filter(|r| !r.report.is_valid).count();
        if invalid > 0 {
            return Err(eyre!(
                "{} of {} drafts failed validation",
                invalid,
                reports.len()
            ));
        }
        tracing::info!("All {} drafts are valid", reports.len());
        Ok(())
    }

    pub fn run_examples(&self) -> Result<()> {
        let examples: serde_json::Map<String, serde_json::Value> = examples()
            .into_iter()
            .map(|(name, draft)| serde_json::to_value(draft).map(|v| (name.to_string(), v)))
            .collect::<Result<_, _>>()?;
        print_json(&examples)
    }

    pub fn run_guide(&self) -> Result<()> {
        print!("{}", AUTHORING_GUIDE);
        Ok(())
    }
}

/// Reads a JSON file holding either one draft object or an array of them.
fn read_drafts(path: &Path) -> Result<Vec<ProjectDraft>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let drafts = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ProjectDraft>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    tracing::debug!("Read {} drafts from {}", drafts.len(), path.display());
    Ok(drafts)
}

fn read_single_draft(path: &Path) -> Result<ProjectDraft> {
    let mut drafts = read_drafts(path)?;
    match drafts.len() {
        1 => Ok(drafts.remove(0)),
        n => Err(eyre!(
            "{} holds {} drafts; --from needs exactly one",
            path.display(),
            n
        )),
    }
}
