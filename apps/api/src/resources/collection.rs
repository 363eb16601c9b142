use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use super::{decode, encode, CollectionResource};
use crate::errors::AppError;
use crate::store::{DocumentStore, Filter};

fn not_found<R: CollectionResource>() -> AppError {
    AppError::NotFound(format!("{} not found", R::LABEL))
}

/// All records in storage order. `tag` is honoured only for resources with a `TAG_FIELD`;
/// an empty tag lists everything.
pub async fn list<R: CollectionResource>(
    store: &dyn DocumentStore,
    tag: Option<&str>,
) -> Result<Vec<R>, AppError> {
    let tag = tag.filter(|t| !t.is_empty());
    let docs = match (R::TAG_FIELD, tag) {
        (Some(field), Some(tag)) => {
            let filter = Filter::ArrayContains {
                field,
                value: tag.to_string(),
            };
            store.find(R::COLLECTION, &filter).await?
        }
        _ => store.find_all(R::COLLECTION).await?,
    };
    let records = docs
        .into_iter()
        .map(decode::<R>)
        .collect::<Result<Vec<R>, _>>()?;
    Ok(records)
}

pub async fn get_one<R: CollectionResource>(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<R, AppError> {
    let doc = store
        .find_one(R::COLLECTION, &Filter::id(id))
        .await?
        .ok_or_else(not_found::<R>)?;
    Ok(decode(doc)?)
}

/// Assigns a fresh UUID (and whatever else `mint` stamps), stores and returns the record.
pub async fn create<R: CollectionResource>(
    store: &dyn DocumentStore,
    draft: R::Draft,
    today: NaiveDate,
) -> Result<R, AppError> {
    let id = Uuid::new_v4().to_string();
    let record = R::mint(id.clone(), draft, today);
    store.insert(R::COLLECTION, encode(&record)?).await?;
    info!("Created {} {id}", R::COLLECTION);
    Ok(record)
}

/// Overwrites every creatable field of an existing record. Never inserts.
pub async fn update<R: CollectionResource>(
    store: &dyn DocumentStore,
    id: &str,
    draft: R::Draft,
) -> Result<R, AppError> {
    let matched = store
        .update_one(R::COLLECTION, &Filter::id(id), encode(&draft)?)
        .await?;
    if !matched {
        return Err(not_found::<R>());
    }
    info!("Updated {} {id}", R::COLLECTION);
    get_one(store, id).await
}

pub async fn delete<R: CollectionResource>(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<(), AppError> {
    if !store.delete_one(R::COLLECTION, &Filter::id(id)).await? {
        return Err(not_found::<R>());
    }
    info!("Deleted {} {id}", R::COLLECTION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BlogPost, BlogPostDraft, Education, EducationDraft, Experience, ExperienceDraft, Project,
        ProjectDraft,
    };
    use crate::store::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    fn make_experience(technologies: &[&str]) -> ExperienceDraft {
        ExperienceDraft {
            title: "X".to_string(),
            company: "Y".to_string(),
            location: "Z".to_string(),
            period: "2024".to_string(),
            description: "d".to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn make_education() -> EducationDraft {
        EducationDraft {
            degree: "BSc Computer Science".to_string(),
            school: "NUS".to_string(),
            location: "Singapore".to_string(),
            period: "2024 - 2028".to_string(),
            gpa: "4.25/5.00".to_string(),
            relevant: vec!["Data Structures & Algorithms".to_string()],
            description: vec!["Teaching assistant".to_string()],
        }
    }

    fn make_project(demo: Option<&str>) -> ProjectDraft {
        ProjectDraft {
            title: "RetroChat".to_string(),
            description: "Retro terminal chat".to_string(),
            technologies: vec!["React".to_string()],
            github: "github.com/someone/retrochat".to_string(),
            demo: demo.map(str::to_string),
            image: "chat".to_string(),
        }
    }

    fn make_post(title: &str, tags: &[&str]) -> BlogPostDraft {
        BlogPostDraft {
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: "# content".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_matches_draft() {
        let store = MemoryStore::new();
        let created: Experience = create(&store, make_experience(&["Go"]), today())
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        let fetched: Experience = get_one(&store, &created.id).await.unwrap();
        let expected = Experience::mint(created.id.clone(), make_experience(&["Go"]), today());
        assert_eq!(fetched, expected);
    }

    #[tokio::test]
    async fn test_create_generates_distinct_ids() {
        let store = MemoryStore::new();
        let a: Education = create(&store, make_education(), today()).await.unwrap();
        let b: Education = create(&store, make_education(), today()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(list::<Education>(&store, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_project_without_demo_round_trips() {
        let store = MemoryStore::new();
        let created: Project = create(&store, make_project(None), today()).await.unwrap();
        let fetched: Project = get_one(&store, &created.id).await.unwrap();
        assert_eq!(fetched.demo, None);
        assert_eq!(fetched.image, "chat");
    }

    #[tokio::test]
    async fn test_blog_create_stamps_date() {
        let store = MemoryStore::new();
        let created: BlogPost = create(&store, make_post("Hello", &["AI"]), today())
            .await
            .unwrap();
        let fetched: BlogPost = get_one(&store, &created.id).await.unwrap();
        assert_eq!(fetched.date, "2024-12-15");
        assert_eq!(fetched.title, "Hello");
    }

    #[tokio::test]
    async fn test_blog_update_keeps_date_and_id() {
        let store = MemoryStore::new();
        let created: BlogPost = create(&store, make_post("Old", &["AI"]), today())
            .await
            .unwrap();
        let updated: BlogPost = update(&store, &created.id, make_post("New", &["Rust"]))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, "2024-12-15");
        assert_eq!(updated.title, "New");
        assert_eq!(updated.tags, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = MemoryStore::new();
        let err = get_one::<Project>(&store, "missing").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Project not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found_and_inserts_nothing() {
        let store = MemoryStore::new();
        create::<Experience>(&store, make_experience(&["Go"]), today())
            .await
            .unwrap();
        let err = update::<Experience>(&store, "nope", make_experience(&["Rust"]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(list::<Experience>(&store, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = MemoryStore::new();
        let created: Education = create(&store, make_education(), today()).await.unwrap();
        delete::<Education>(&store, &created.id).await.unwrap();
        let err = delete::<Education>(&store, &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_never_created_is_not_found() {
        let store = MemoryStore::new();
        let err = delete::<BlogPost>(&store, "ghost").await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Blog post not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_tag_filter_returns_exact_subset() {
        let store = MemoryStore::new();
        let first: BlogPost = create(&store, make_post("ML", &["AI", "Learning"]), today())
            .await
            .unwrap();
        create::<BlogPost>(&store, make_post("Terminals", &["UI/UX"]), today())
            .await
            .unwrap();

        let hits = list::<BlogPost>(&store, Some("AI")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, first.id);

        assert!(list::<BlogPost>(&store, Some("ai")).await.unwrap().is_empty());
        assert_eq!(list::<BlogPost>(&store, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_tag_lists_every_post() {
        let store = MemoryStore::new();
        create::<BlogPost>(&store, make_post("ML", &["AI"]), today())
            .await
            .unwrap();
        create::<BlogPost>(&store, make_post("Untagged", &[]), today())
            .await
            .unwrap();
        assert_eq!(list::<BlogPost>(&store, Some("")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_tag_ignored_for_untagged_resources() {
        let store = MemoryStore::new();
        create::<Experience>(&store, make_experience(&["Go"]), today())
            .await
            .unwrap();
        let all = list::<Experience>(&store, Some("Go")).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_experience_round_trip() {
        let store = MemoryStore::new();
        let created: Experience = create(&store, make_experience(&["Go"]), today())
            .await
            .unwrap();
        assert_eq!(created.title, "X");
        assert_eq!(created.company, "Y");
        assert_eq!(created.technologies, vec!["Go"]);

        update::<Experience>(&store, &created.id, make_experience(&["Rust"]))
            .await
            .unwrap();
        let listed = list::<Experience>(&store, None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].technologies, vec!["Rust"]);
        assert_eq!(listed[0].period, "2024");

        delete::<Experience>(&store, &created.id).await.unwrap();
        let err = get_one::<Experience>(&store, &created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
