use super::*;

/// Tests creating a scrub entry.
///
/// Expected: Ok with the row stored
#[tokio::test]
async fn creates_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScrubRepository::new(db);
    let scrub = repo.create(1, 2).await?;

    assert_eq!(scrub.guild_id, 1);
    assert_eq!(scrub.user_id, 2);
    let count = entity::prelude::Scrub::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that creating the same pair twice keeps a single row.
///
/// Expected: Ok with exactly one row for the pair
#[tokio::test]
async fn keeps_one_entry_per_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScrubRepository::new(db);
    repo.create(1, 2).await?;
    repo.create(1, 2).await?;
    repo.create(3, 2).await?;

    let count = entity::prelude::Scrub::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
