use super::*;

/// Tests deleting a scrub entry.
///
/// Expected: Ok(1) and the same user in another guild is kept
#[tokio::test]
async fn deletes_entry_for_guild_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_scrub(db, 1, 2).await?;
    create_scrub(db, 3, 2).await?;

    let repo = ScrubRepository::new(db);
    let removed = repo.delete(1, 2).await?;

    assert_eq!(removed, 1);
    let count = entity::prelude::Scrub::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting an entry that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_entry_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScrubRepository::new(db);

    assert_eq!(repo.delete(1, 2).await?, 0);

    Ok(())
}
