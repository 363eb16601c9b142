use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resources::CollectionResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Client-supplied fields for creating or replacing an `Experience`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
    pub gpa: String,
    pub relevant: Vec<String>,
    pub description: Vec<String>,
}

/// Client-supplied fields for creating or replacing an `Education` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationDraft {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
    pub gpa: String,
    pub relevant: Vec<String>,
    pub description: Vec<String>,
}

impl CollectionResource for Experience {
    const COLLECTION: &'static str = "experience";
    const LABEL: &'static str = "Experience";
    type Draft = ExperienceDraft;

    fn mint(id: String, draft: ExperienceDraft, _today: NaiveDate) -> Self {
        let ExperienceDraft {
            title,
            company,
            location,
            period,
            description,
            technologies,
        } = draft;
        Experience {
            id,
            title,
            company,
            location,
            period,
            description,
            technologies,
        }
    }
}

impl CollectionResource for Education {
    const COLLECTION: &'static str = "education";
    const LABEL: &'static str = "Education";
    type Draft = EducationDraft;

    fn mint(id: String, draft: EducationDraft, _today: NaiveDate) -> Self {
        let EducationDraft {
            degree,
            school,
            location,
            period,
            gpa,
            relevant,
            description,
        } = draft;
        Education {
            id,
            degree,
            school,
            location,
            period,
            gpa,
            relevant,
            description,
        }
    }
}
