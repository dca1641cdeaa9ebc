use anyhow::Result;
use blueprints::{Blueprint, BlueprintError, BlueprintStore, InMemoryStore, Point, SqliteStore};
use std::sync::Arc;
use tempfile::TempDir;

fn house() -> Blueprint {
    Blueprint::new(
        "john",
        "house",
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ],
    )
}

async fn check_uniqueness<S: BlueprintStore>(store: &S) -> Result<()> {
    store.save(house()).await?;
    let second = store.save(Blueprint::new("john", "house", vec![])).await;
    assert!(matches!(second, Err(BlueprintError::AlreadyExists { .. })));

    // same name, different author is a different key
    store.save(Blueprint::new("jane", "house", vec![])).await?;
    assert_eq!(store.get_all().await?.len(), 2);
    Ok(())
}

async fn check_not_found<S: BlueprintStore>(store: &S) -> Result<()> {
    assert!(store.get_all().await?.is_empty());
    assert!(matches!(
        store.get("john", "house").await,
        Err(BlueprintError::NotFound { .. })
    ));
    assert!(matches!(
        store.get_by_author("john").await,
        Err(BlueprintError::NotFound { .. })
    ));
    assert!(matches!(
        store.append_point("john", "house", Point::new(1, 1)).await,
        Err(BlueprintError::NotFound { .. })
    ));
    Ok(())
}

async fn check_append_is_last<S: BlueprintStore>(store: &S) -> Result<()> {
    store.save(house()).await?;
    store.append_point("john", "house", Point::new(5, 15)).await?;

    let bp = store.get("john", "house").await?;
    assert_eq!(bp.points.len(), 5);
    assert_eq!(bp.points.last(), Some(&Point::new(5, 15)));
    assert_eq!(&bp.points[..4], &house().points[..]);
    Ok(())
}

async fn check_by_author<S: BlueprintStore>(store: &S) -> Result<()> {
    store.save(house()).await?;
    store.save(Blueprint::new("john", "barn", vec![Point::new(1, 1)])).await?;
    store.save(Blueprint::new("jane", "garden", vec![])).await?;

    let names: Vec<String> = store
        .get_by_author("john")
        .await?
        .into_iter()
        .map(|bp| bp.name)
        .collect();
    assert_eq!(names, vec!["barn".to_string(), "house".to_string()]);
    Ok(())
}

async fn check_concurrent_saves<S: BlueprintStore + 'static>(store: Arc<S>) -> Result<()> {
    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .save(Blueprint::new(format!("author{}", i % 4), format!("bp{}", i), vec![]))
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(store.get_all().await?.len(), 32);
    assert_eq!(store.get_by_author("author0").await?.len(), 8);
    Ok(())
}

async fn check_concurrent_appends<S: BlueprintStore + 'static>(store: Arc<S>) -> Result<()> {
    store.save(house()).await?;
    store.save(Blueprint::new("jane", "garden", vec![])).await?;

    let mut handles = Vec::new();
    for i in 0..50 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let name = if i % 2 == 0 { "house" } else { "garden" };
            let author = if i % 2 == 0 { "john" } else { "jane" };
            store.append_point(author, name, Point::new(i, i)).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(store.get("john", "house").await?.points.len(), 4 + 25);
    assert_eq!(store.get("jane", "garden").await?.points.len(), 25);
    Ok(())
}

fn sqlite_store(dir: &TempDir) -> Result<SqliteStore> {
    Ok(SqliteStore::open(dir.path().join("blueprints.db"))?)
}

#[tokio::test]
async fn test_in_memory_uniqueness() -> Result<()> {
    check_uniqueness(&InMemoryStore::new()).await
}

#[tokio::test]
async fn test_sqlite_uniqueness() -> Result<()> {
    let dir = TempDir::new()?;
    check_uniqueness(&sqlite_store(&dir)?).await
}

#[tokio::test]
async fn test_in_memory_not_found() -> Result<()> {
    check_not_found(&InMemoryStore::new()).await
}

#[tokio::test]
async fn test_sqlite_not_found() -> Result<()> {
    let dir = TempDir::new()?;
    check_not_found(&sqlite_store(&dir)?).await
}

#[tokio::test]
async fn test_in_memory_append_is_last() -> Result<()> {
    check_append_is_last(&InMemoryStore::new()).await
}

#[tokio::test]
async fn test_sqlite_append_is_last() -> Result<()> {
    let dir = TempDir::new()?;
    check_append_is_last(&sqlite_store(&dir)?).await
}

#[tokio::test]
async fn test_in_memory_by_author() -> Result<()> {
    check_by_author(&InMemoryStore::new()).await
}

#[tokio::test]
async fn test_sqlite_by_author() -> Result<()> {
    let dir = TempDir::new()?;
    check_by_author(&sqlite_store(&dir)?).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_in_memory_concurrent_saves() -> Result<()> {
    check_concurrent_saves(Arc::new(InMemoryStore::new())).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sqlite_concurrent_saves() -> Result<()> {
    let dir = TempDir::new()?;
    check_concurrent_saves(Arc::new(sqlite_store(&dir)?)).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_in_memory_concurrent_appends() -> Result<()> {
    check_concurrent_appends(Arc::new(InMemoryStore::new())).await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sqlite_concurrent_appends() -> Result<()> {
    let dir = TempDir::new()?;
    check_concurrent_appends(Arc::new(sqlite_store(&dir)?)).await
}
