pub mod blog;
pub mod profile;
pub mod project;
pub mod resume;

pub use blog::{BlogPost, BlogPostDraft};
pub use profile::{Profile, Skills};
pub use project::{Project, ProjectDraft};
pub use resume::{Education, EducationDraft, Experience, ExperienceDraft};
