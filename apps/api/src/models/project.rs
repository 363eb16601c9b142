use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resources::CollectionResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    /// Front-end illustration key ("chat", "paint", ...), not a URL.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    pub image: String,
}

impl CollectionResource for Project {
    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";
    type Draft = ProjectDraft;

    fn mint(id: String, draft: ProjectDraft, _today: NaiveDate) -> Self {
        let ProjectDraft {
            title,
            description,
            technologies,
            github,
            demo,
            image,
        } = draft;
        Project {
            id,
            title,
            description,
            technologies,
            github,
            demo,
            image,
        }
    }
}
