//! Sample portfolio content for local development and demos.
//!
//! `portfolio-api seed` wipes every collection and loads this fixed data set.
//! Ids and blog dates are fixed so front-end links stay stable across reseeds.

use anyhow::{Context, Result};
use tracing::info;

use crate::models::{BlogPost, Education, Experience, Profile, Project, Skills};
use crate::resources::{encode, CollectionResource, SingletonResource};
use crate::store::DocumentStore;

/// Counts of documents written per collection, in seeding order.
pub type SeedReport = Vec<(&'static str, usize)>;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_profile() -> Profile {
    Profile {
        name: "Ashmita Haldar".to_string(),
        title: "Computer Science + Entrepreneurship @ NUS".to_string(),
        tagline: "// Exploring where tech, design, and entrepreneurship collide.".to_string(),
        bio: "Passionate CS student and aspiring technopreneur. I love exploring how technology \
              can tell stories, solve problems, and empower people in small but meaningful ways"
            .to_string(),
        email: "ashmita.haldar@u.nus.edu".to_string(),
        github: "github.com/ashmitahaldar".to_string(),
        linkedin: "linkedin.com/in/ashmita-haldar".to_string(),
        location: "Singapore | India".to_string(),
    }
}

pub fn sample_skills() -> Skills {
    Skills {
        languages: strings(&[
            "Java",
            "Ruby",
            "Javascript",
            "Python",
            "C",
            "HTML",
            "CSS",
            "Dart",
            "SQL",
        ]),
        frameworks: strings(&["React", "JavaFX", "Ruby on Rails", "Flutter", "FastAPI"]),
        tools: strings(&[
            "Git",
            "Docker",
            "MongoDB",
            "PostgreSQL",
            "VS Code",
            "Amazon Web Services",
            "Kubernetes",
            "RSpec",
        ]),
        interests: strings(&[
            "Software Development",
            "Web Development",
            "Game Development",
            "UI/UX Design",
        ]),
    }
}

pub fn sample_experience() -> Vec<Experience> {
    vec![Experience {
        id: "exp1".to_string(),
        title: "Web Development Intern".to_string(),
        company: "Pixta Vietnam Ltd.".to_string(),
        location: "Hanoi, Vietnam".to_string(),
        period: "May 2025 – Aug 2025".to_string(),
        description: "Accelerated multiple item downloads by ~80% by replacing a legacy multi-step \
                      download flow with real-time ZIP streaming. \n Corrected 950,000+ item tag \
                      mistranslations by fixing the root cause in the tag translation pipeline. \n \
                      Strengthened product reliability across major updates with RSpec unit tests \
                      and production bug fixes."
            .to_string(),
        technologies: strings(&[
            "Ruby on Rails",
            "Ruby",
            "Docker",
            "Amazon Web Services",
            "Google BigQuery",
            "RSpec",
            "Kubernetes",
        ]),
    }]
}

pub fn sample_education() -> Vec<Education> {
    vec![
        Education {
            id: "edu1".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            school: "University of California".to_string(),
            location: "San Francisco, CA".to_string(),
            period: "2024 - 2028 (Expected)".to_string(),
            gpa: "4.25/5.00".to_string(),
            relevant: strings(&[
                "Data Structures & Algorithms",
                "Software Engineering",
                "Entrepreneurship",
            ]),
            description: strings(&[
                "Member of Women in Tech - NUS Computing",
                "Undergraduate Teaching Assistant for CS1101S - Programming Methodology",
                "Participated in hackathons and coding competitions",
            ]),
        },
        Education {
            id: "edu2".to_string(),
            degree: "International Baccalaureate (IB) Diploma".to_string(),
            school: "Pathways World School, Gurgaon".to_string(),
            location: "Gurugram, India".to_string(),
            period: "2022 - 2024".to_string(),
            gpa: "45/45 (IB Diploma)".to_string(),
            relevant: strings(&[
                "IB Computer Science HL",
                "IB Mathematics Analysis and Approaches HL",
                "IB Physics HL",
            ]),
            description: strings(&[
                "Valedictorian of graduating class",
                "Founded coding club with 20+ members",
            ]),
        },
        Education {
            id: "edu3".to_string(),
            degree: "High School Diploma".to_string(),
            school: "Taipei American School".to_string(),
            location: "Taipei, Taiwan".to_string(),
            period: "2020 - 2022".to_string(),
            gpa: "4.43/4.8 (Weighted GPA)".to_string(),
            relevant: strings(&["AP Computer Science A"]),
            description: strings(&[
                "Completed AP Computer Science A with a score of 5",
                "Member of Art Honor Society",
                "Programming Head of JV FRC Robotics Team - Raid One",
            ]),
        },
    ]
}

pub fn sample_projects() -> Vec<Project> {
    fn project(
        id: &str,
        title: &str,
        description: &str,
        tech: &[&str],
        demo: Option<&str>,
        image: &str,
    ) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            technologies: strings(tech),
            github: format!("github.com/alexchen/{}", title.to_lowercase()),
            demo: demo.map(str::to_string),
            image: image.to_string(),
        }
    }

    vec![
        project(
            "proj1",
            "RetroChat",
            "A nostalgic chat application with a retro terminal interface. Features real-time \
             messaging, custom themes, and ASCII emoticons.",
            &["React", "Socket.io", "Node.js", "MongoDB"],
            Some("retrochat.demo.com"),
            "chat",
        ),
        project(
            "proj2",
            "PixelPaint",
            "Web-based pixel art editor with layers, animation support, and sprite sheet export.",
            &["JavaScript", "Canvas API", "HTML5", "CSS3"],
            Some("pixelpaint.demo.com"),
            "paint",
        ),
        project(
            "proj3",
            "TaskQuest",
            "Gamified todo app that turns your tasks into RPG quests.",
            &["React", "FastAPI", "PostgreSQL", "TailwindCSS"],
            Some("taskquest.demo.com"),
            "game",
        ),
        project(
            "proj4",
            "CodeSnippets",
            "Personal code snippet manager with syntax highlighting, tagging, and search.",
            &["Python", "Flask", "SQLite", "Bootstrap"],
            None,
            "code",
        ),
    ]
}

pub fn sample_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "blog1".to_string(),
            date: "2024-12-15".to_string(),
            title: "Building My First Game Engine".to_string(),
            excerpt: "A journey into low-level programming and game development. Lessons learned \
                      from building a 2D game engine from scratch."
                .to_string(),
            content: "# Building My First Game Engine\n\nI decided to build a simple 2D game \
                      engine using C++ and SDL2.\n\n## Key Learnings\n\n1. **Entity Component \
                      Systems**\n2. **Render Pipeline**\n3. **Physics Integration**\n"
                .to_string(),
            tags: strings(&["Game Development", "C++", "Tutorial"]),
        },
        BlogPost {
            id: "blog2".to_string(),
            date: "2024-11-22".to_string(),
            title: "Why I Love Terminal UIs".to_string(),
            excerpt: "Exploring the beauty of command-line interfaces and why they're making a \
                      comeback in modern applications."
                .to_string(),
            content: "# Why I Love Terminal UIs\n\nThere's something special about terminal \
                      interfaces. They're minimal, efficient, and timeless.\n\nThe future is \
                      retro!\n"
                .to_string(),
            tags: strings(&["UI/UX", "Design", "Opinion"]),
        },
        BlogPost {
            id: "blog3".to_string(),
            date: "2024-10-08".to_string(),
            title: "My Journey into Machine Learning".to_string(),
            excerpt: "From confusion to confidence: how I learned ML fundamentals and built my \
                      first neural network."
                .to_string(),
            content: "# My Journey into Machine Learning\n\nI began with linear regression and \
                      gradually worked my way up to neural networks.\n\nThe key is to start \
                      coding as soon as possible!\n"
                .to_string(),
            tags: strings(&["Machine Learning", "AI", "Learning"]),
        },
    ]
}

async fn load_singleton<S: SingletonResource>(store: &dyn DocumentStore, record: S) -> Result<()> {
    store
        .insert(S::COLLECTION, encode(&record)?)
        .await
        .with_context(|| format!("Failed to seed {}", S::COLLECTION))
}

async fn load_collection<R: CollectionResource>(
    store: &dyn DocumentStore,
    records: Vec<R>,
) -> Result<usize> {
    let count = records.len();
    for record in records {
        store
            .insert(R::COLLECTION, encode(&record)?)
            .await
            .with_context(|| format!("Failed to seed {}", R::COLLECTION))?;
    }
    Ok(count)
}

/// Clears all six collections, then loads the sample data set.
pub async fn seed_database(store: &dyn DocumentStore) -> Result<SeedReport> {
    for collection in [
        Profile::COLLECTION,
        Skills::COLLECTION,
        Experience::COLLECTION,
        Education::COLLECTION,
        Project::COLLECTION,
        BlogPost::COLLECTION,
    ] {
        let removed = store.delete_all(collection).await?;
        info!("Cleared {removed} documents from {collection}");
    }

    let mut report = SeedReport::new();
    load_singleton(store, sample_profile()).await?;
    report.push((Profile::COLLECTION, 1));
    load_singleton(store, sample_skills()).await?;
    report.push((Skills::COLLECTION, 1));
    report.push((
        Experience::COLLECTION,
        load_collection(store, sample_experience()).await?,
    ));
    report.push((
        Education::COLLECTION,
        load_collection(store, sample_education()).await?,
    ));
    report.push((
        Project::COLLECTION,
        load_collection(store, sample_projects()).await?,
    ));
    report.push((
        BlogPost::COLLECTION,
        load_collection(store, sample_blog_posts()).await?,
    ));

    for (collection, count) in &report {
        info!("Seeded {count} {collection} document(s)");
    }
    Ok(report)
}
