use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub about: String,
    #[serde(default)]
    pub cv_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub one_liner: String,
    pub tech_stack: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub live_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Education,
    Experience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub kind: TimelineKind,
    pub date: String,
    pub title: String,
    pub org: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Content {
    /// Checks the invariants the UI and the contact flow rely on. URLs are
    /// opaque strings and only required where a control depends on them.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.email.trim().is_empty() {
            return Err(ContentError::MissingProfileEmail);
        }

        let mut seen_ids = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(ContentError::EmptyProjectId {
                    name: project.name.clone(),
                });
            }
            if !seen_ids.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId {
                    id: project.id.clone(),
                });
            }
            if project.name.trim().is_empty() {
                return Err(ContentError::EmptyProjectName {
                    id: project.id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn education(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.timeline
            .iter()
            .filter(|entry| entry.kind == TimelineKind::Education)
    }

    pub fn experience(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.timeline
            .iter()
            .filter(|entry| entry.kind == TimelineKind::Experience)
    }
}
