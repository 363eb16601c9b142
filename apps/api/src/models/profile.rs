use serde::{Deserialize, Serialize};

use crate::resources::SingletonResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub interests: Vec<String>,
}

impl SingletonResource for Profile {
    const COLLECTION: &'static str = "profile";

    /// Placeholder shown until a real profile is stored. Never persisted.
    fn fallback() -> Self {
        Profile {
            name: "Alex Chen".to_string(),
            title: "Computer Science Student".to_string(),
            tagline: "// building the future, one line at a time".to_string(),
            bio: "Passionate CS student who loves merging creativity with code.".to_string(),
            email: "alex.chen@example.com".to_string(),
            github: "github.com/alexchen".to_string(),
            linkedin: "linkedin.com/in/alexchen".to_string(),
            location: "San Francisco, CA".to_string(),
        }
    }
}

impl SingletonResource for Skills {
    const COLLECTION: &'static str = "skills";

    fn fallback() -> Self {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Skills {
            languages: list(&["Python", "JavaScript", "Java"]),
            frameworks: list(&["React", "Node.js", "FastAPI"]),
            tools: list(&["Git", "Docker", "MongoDB"]),
            interests: list(&["AI/ML", "Web Development"]),
        }
    }
}
