use super::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

/// Tests enabling a scrub.
///
/// Expected: member scrubbed in memory and one row persisted
#[tokio::test]
async fn enable_persists_and_applies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());
    registry.enable(1, 10).await?;

    assert!(registry.should_scrub(1, 10).await);
    assert!(!registry.should_scrub(2, 10).await);
    let count = entity::prelude::Scrub::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests enabling the same member twice.
///
/// Expected: still scrubbed, single persisted row
#[tokio::test]
async fn enable_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());
    registry.enable(1, 10).await?;
    registry.enable(1, 10).await?;

    assert!(registry.should_scrub(1, 10).await);
    let count = entity::prelude::Scrub::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests disabling a scrubbed member.
///
/// Expected: Ok(true), not scrubbed, row deleted, empty guild pruned
#[tokio::test]
async fn disable_removes_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());
    registry.enable(1, 10).await?;

    let was_scrubbed = registry.disable(1, 10).await?;

    assert!(was_scrubbed);
    assert!(!registry.should_scrub(1, 10).await);
    assert!(registry.is_empty().await);
    let count = entity::prelude::Scrub::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests disabling a member who was never scrubbed.
///
/// Expected: Ok(false), registry unchanged
#[tokio::test]
async fn disable_unknown_member_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());
    registry.enable(1, 10).await?;

    let was_scrubbed = registry.disable(1, 11).await?;

    assert!(!was_scrubbed);
    assert!(registry.should_scrub(1, 10).await);

    Ok(())
}

/// Tests that the last completed mutation wins.
///
/// Expected: should_scrub follows enable/disable/enable in order
#[tokio::test]
async fn reflects_last_mutation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());

    registry.enable(1, 10).await?;
    assert!(registry.should_scrub(1, 10).await);

    registry.disable(1, 10).await?;
    assert!(!registry.should_scrub(1, 10).await);

    registry.enable(1, 10).await?;
    assert!(registry.should_scrub(1, 10).await);

    let reloaded = ScrubRegistry::load(db.clone()).await?;
    assert!(reloaded.should_scrub(1, 10).await);

    Ok(())
}

/// Tests that a failed persist leaves memory untouched.
///
/// Expected: Err from enable and the member is not scrubbed
#[tokio::test]
async fn enable_failure_leaves_memory_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());
    let result = registry.enable(1, 10).await;

    assert!(result.is_err());
    assert!(!registry.should_scrub(1, 10).await);

    Ok(())
}

/// Tests that a failed delete leaves memory untouched.
///
/// Expected: Err from disable and the member is still scrubbed
#[tokio::test]
async fn disable_failure_leaves_memory_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());
    registry.enable(1, 10).await?;

    db.execute_unprepared("DROP TABLE scrub").await?;

    let result = registry.disable(1, 10).await;

    assert!(result.is_err());
    assert!(registry.should_scrub(1, 10).await);
    assert_eq!(registry.scrubbing_in_guild(1).await, vec![10]);

    Ok(())
}

/// Tests concurrent mutations from cloned registries.
///
/// Expected: memory and storage agree once every task has finished
#[tokio::test]
async fn concurrent_mutations_stay_consistent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let registry = ScrubRegistry::new(db.clone());

    let mut tasks = Vec::new();
    for user_id in 1..=10u64 {
        let registry = registry.clone();
        tasks.push(tokio::spawn(async move {
            registry.enable(1, user_id).await?;
            if user_id % 2 == 0 {
                registry.disable(1, user_id).await?;
            }
            Ok::<(), sea_orm::DbErr>(())
        }));
    }
    for task in tasks {
        task.await.unwrap()?;
    }

    assert_eq!(registry.scrubbing_in_guild(1).await, vec![1, 3, 5, 7, 9]);

    let reloaded = ScrubRegistry::load(db.clone()).await?;
    assert_eq!(reloaded.scrubbing_in_guild(1).await, vec![1, 3, 5, 7, 9]);

    Ok(())
}
