//! SeaOrmStorage tests
//!
//! Exercises the SQLite backend directly: migrations, ordering, filters,
//! the folder/title unique index and transactional updates.

use linkshelf::errors::LinkshelfError;
use linkshelf::storage::backend::{SeaOrmStorage, infer_backend_from_url};
use linkshelf::storage::{LinkFilter, NewLink};
use tempfile::TempDir;

// =============================================================================
// Test Setup
// =============================================================================

async fn create_storage() -> (SeaOrmStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("storage_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = SeaOrmStorage::new(&db_url, "sqlite")
        .await
        .expect("Failed to create storage");
    (storage, temp_dir)
}

fn new_link(folder: Option<&str>, title: Option<&str>, url: &str) -> NewLink {
    NewLink {
        url: Some(url.to_string()),
        title: title.map(String::from),
        description: None,
        folder: folder.map(String::from),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_empty_database() {
    let (storage, _dir) = create_storage().await;

    assert_eq!(storage.backend_name(), "sqlite");
    assert_eq!(storage.count().await.unwrap(), 0);
    assert!(storage.load_all().await.unwrap().is_empty());
    assert!(storage.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_assigns_ids_and_preserves_fields() {
    let (storage, _dir) = create_storage().await;

    let mut link = new_link(Some("work"), Some("Docs"), "https://docs.example.com");
    link.description = Some("reference".to_string());

    let first = storage.insert(&link).await.unwrap();
    let second = storage
        .insert(&new_link(Some("work"), Some("Blog"), "https://blog.example.com"))
        .await
        .unwrap();

    assert!(second.id > first.id);

    let fetched = storage.get(first.id).await.unwrap().unwrap();
    assert_eq!(fetched.url, "https://docs.example.com");
    assert_eq!(fetched.title.as_deref(), Some("Docs"));
    assert_eq!(fetched.description.as_deref(), Some("reference"));
    assert_eq!(fetched.folder.as_deref(), Some("work"));
    assert_eq!(storage.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    {
        let storage = SeaOrmStorage::new(&db_url, "sqlite").await.unwrap();
        storage
            .insert(&new_link(None, Some("Kept"), "https://kept.example"))
            .await
            .unwrap();
    }

    let reopened = SeaOrmStorage::new(&db_url, "sqlite").await.unwrap();
    let links = reopened.load_all().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title.as_deref(), Some("Kept"));
}

#[tokio::test]
async fn test_load_all_orders_by_folder_then_title() {
    let (storage, _dir) = create_storage().await;

    storage
        .insert(&new_link(Some("work"), Some("Zulu"), "https://z.example"))
        .await
        .unwrap();
    storage
        .insert(&new_link(Some("home"), Some("Mike"), "https://m.example"))
        .await
        .unwrap();
    storage
        .insert(&new_link(Some("work"), Some("Alpha"), "https://a.example"))
        .await
        .unwrap();

    let titles: Vec<_> = storage
        .load_all()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.title.unwrap())
        .collect();
    assert_eq!(titles, vec!["Mike", "Alpha", "Zulu"]);
}

#[tokio::test]
async fn test_folder_filter_is_exact() {
    let (storage, _dir) = create_storage().await;

    storage
        .insert(&new_link(Some("work"), Some("Docs"), "https://docs.example.com"))
        .await
        .unwrap();
    storage
        .insert(&new_link(Some("workshop"), Some("Tools"), "https://tools.example"))
        .await
        .unwrap();

    let work = storage
        .load_filtered(LinkFilter::folder("work"))
        .await
        .unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].title.as_deref(), Some("Docs"));

    let none = storage
        .load_filtered(LinkFilter::folder("missing"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_search_matches_title_or_url_case_insensitively() {
    let (storage, _dir) = create_storage().await;

    storage
        .insert(&new_link(Some("work"), Some("Docs"), "https://docs.example.com"))
        .await
        .unwrap();
    storage
        .insert(&new_link(Some("work"), Some("EXAMPLE notes"), "https://notes.test"))
        .await
        .unwrap();
    storage
        .insert(&new_link(Some("home"), Some("Recipes"), "https://food.test"))
        .await
        .unwrap();

    let found = storage
        .load_filtered(LinkFilter::search("Example"))
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|l| l.title.as_deref() != Some("Recipes")));
}

#[tokio::test]
async fn test_duplicate_folder_and_title_is_conflict() {
    let (storage, _dir) = create_storage().await;

    storage
        .insert(&new_link(Some("work"), Some("Docs"), "https://docs.example.com"))
        .await
        .unwrap();

    let err = storage
        .insert(&new_link(Some("work"), Some("Docs"), "https://other.example"))
        .await
        .unwrap_err();
    assert!(matches!(err, LinkshelfError::Conflict(_)));
    assert_eq!(storage.count().await.unwrap(), 1);

    // 不同 folder 下同名标题是允许的
    storage
        .insert(&new_link(Some("home"), Some("Docs"), "https://docs.example.com"))
        .await
        .unwrap();
    assert_eq!(storage.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_update_with_applies_closure() {
    let (storage, _dir) = create_storage().await;

    let link = storage
        .insert(&new_link(Some("work"), Some("Docs"), "https://docs.example.com"))
        .await
        .unwrap();

    let before = storage.get(link.id).await.unwrap().unwrap();

    let updated = storage
        .update_with(link.id, |l| {
            l.url = "https://docs.example.org".to_string();
            Ok(())
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.url, "https://docs.example.org");
    assert_eq!(updated.title.as_deref(), Some("Docs"));
    assert_eq!(updated.created_at, before.created_at);

    let missing = storage.update_with(9999, |_| Ok(())).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_with_rejected_closure_leaves_record() {
    let (storage, _dir) = create_storage().await;

    let link = storage
        .insert(&new_link(Some("work"), Some("Docs"), "https://docs.example.com"))
        .await
        .unwrap();

    let err = storage
        .update_with(link.id, |l| {
            l.url = String::new();
            Err(LinkshelfError::validation("url is required"))
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LinkshelfError::Validation(_)));

    let fetched = storage.get(link.id).await.unwrap().unwrap();
    assert_eq!(fetched.url, "https://docs.example.com");
}

#[tokio::test]
async fn test_remove_reports_whether_row_existed() {
    let (storage, _dir) = create_storage().await;

    let link = storage
        .insert(&new_link(None, Some("Gone"), "https://gone.example"))
        .await
        .unwrap();

    assert!(storage.remove(link.id).await.unwrap());
    assert!(!storage.remove(link.id).await.unwrap());
    assert!(storage.get(link.id).await.unwrap().is_none());
}

#[test]
fn test_infer_backend_from_url() {
    assert_eq!(
        infer_backend_from_url("sqlite://links.db?mode=rwc").unwrap(),
        "sqlite"
    );
    assert_eq!(infer_backend_from_url("links.db").unwrap(), "sqlite");
    assert_eq!(
        infer_backend_from_url("postgres://u:p@localhost/links").unwrap(),
        "postgres"
    );
    assert_eq!(
        infer_backend_from_url("mysql://u:p@localhost/links").unwrap(),
        "mysql"
    );
    assert!(infer_backend_from_url("redis://localhost").is_err());
}
