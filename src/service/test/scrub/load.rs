use super::*;

/// Tests loading the registry from persisted entries.
///
/// Expected: every stored pair is scrubbed, other pairs are not
#[tokio::test]
async fn mirrors_persisted_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_scrub(db, 1, 10).await?;
    create_scrub(db, 1, 11).await?;
    create_scrub(db, 2, 10).await?;

    let registry = ScrubRegistry::load(db.clone()).await?;

    assert!(registry.should_scrub(1, 10).await);
    assert!(registry.should_scrub(1, 11).await);
    assert!(registry.should_scrub(2, 10).await);
    assert!(!registry.should_scrub(2, 11).await);
    assert!(!registry.should_scrub(3, 10).await);
    assert_eq!(registry.scrubbing_in_guild(1).await, vec![10, 11]);

    Ok(())
}

/// Tests loading with no persisted entries.
///
/// Expected: empty registry
#[tokio::test]
async fn loads_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::load(db.clone()).await?;

    assert!(registry.is_empty().await);
    assert!(!registry.should_scrub(1, 10).await);

    Ok(())
}

/// Tests that refresh rebuilds memory from storage.
///
/// Rows written behind the registry's back appear, rows deleted disappear.
///
/// Expected: memory matches the table after refresh
#[tokio::test]
async fn refresh_replaces_memory_with_storage() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_scrub(db, 1, 10).await?;
    let registry = ScrubRegistry::load(db.clone()).await?;

    let repo = ScrubRepository::new(db);
    repo.delete(1, 10).await?;
    repo.create(1, 20).await?;

    assert!(registry.should_scrub(1, 10).await);
    assert!(!registry.should_scrub(1, 20).await);

    let loaded = registry.refresh().await?;

    assert_eq!(loaded, 1);
    assert!(!registry.should_scrub(1, 10).await);
    assert!(registry.should_scrub(1, 20).await);

    Ok(())
}

/// Tests that a failed load surfaces the error.
///
/// Expected: Err when the scrub table is missing
#[tokio::test]
async fn fails_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ScrubRegistry::load(db.clone()).await;

    assert!(result.is_err());

    Ok(())
}
