//! Lifecycle status of a project.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a project currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Completed,
    InProgress,
    Planned,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Completed, Status::InProgress, Status::Planned]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::InProgress => "in-progress",
            Status::Planned => "planned",
        }
    }

    pub fn valid_values() -> String {
        Self::all()
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Status::Completed),
            "in-progress" => Ok(Status::InProgress),
            "planned" => Ok(Status::Planned),
            _ => Err(format!(
                "Invalid status '{}'. Valid values: {}",
                s,
                Self::valid_values()
            )),
        }
    }
}
