//! CLI module for Folio.
//!
//! Subcommands:
//! - `list`, `show`, `categories`, `slugs`: read-only catalog queries
//! - `slug`, `next-id`, `new`, `validate`: authoring helpers for new records
//! - `examples`, `guide`: reference material for authors
//! - `config`: print the resolved configuration

mod author;
mod browse;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use serde::Serialize;

use crate::config::Config;
use crate::context::Context;

pub use author::NewCommand;

/// Folio - portfolio project catalog
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Query and author the project records behind a portfolio site")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List projects, optionally filtered
    List {
        /// Only featured projects
        #[arg(long)]
        featured: bool,

        /// Only projects with this status (completed, in-progress, planned)
        #[arg(long)]
        status: Option<String>,

        /// Only projects in this category (e.g. web-app)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a single project by slug
    Show {
        /// Project slug, matched exactly
        slug: String,
    },

    /// List the distinct categories in use
    Categories,

    /// List every project slug
    Slugs,

    /// Derive a slug from a title
    Slug {
        /// Project title
        title: String,
    },

    /// Print the id the next project should use
    NextId,

    /// Print a new project template
    New(NewCommand),

    /// Validate project drafts from a JSON file (one object or an array)
    Validate {
        /// Path to the JSON file
        file: std::path::PathBuf,
    },

    /// Print worked example drafts
    Examples,

    /// Print instructions for adding a project
    Guide,

    /// Print the resolved configuration
    Config,
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::List {
                featured,
                ref status,
                ref category,
            } => self.run_list(featured, status.as_deref(), category.as_deref()),
            Command::Show { ref slug } => self.run_show(slug),
            Command::Categories => self.run_categories(),
            Command::Slugs => self.run_slugs(),
            Command::Slug { ref title } => self.run_slug(title),
            Command::NextId => self.run_next_id(),
            Command::New(ref cmd) => cmd.run(&self.context()?),
            Command::Validate { ref file } => self.run_validate(file),
            Command::Examples => self.run_examples(),
            Command::Guide => self.run_guide(),
            Command::Config => print_json(&Config::load()?),
        }
    }

    /// Loads configuration and opens the configured catalog.
    fn context(&self) -> Result<Context> {
        let config = Config::load()?;
        tracing::debug!("Resolved configuration: {:?}", config);
        Ok(Context::from_config(config)?)
    }
}

/// Writes `value` to stdout as pretty JSON.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
