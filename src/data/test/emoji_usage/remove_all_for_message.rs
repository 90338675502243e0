use super::*;

/// Tests clearing every reaction on one message.
///
/// Inserts 5 rows for the target message and 1 row for another message in the same guild.
///
/// Expected: exactly the 5 rows are deleted and the other row remains
#[tokio::test]
async fn removes_only_rows_for_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user_id in 1..=5 {
        EmojiUsageFactory::new(db)
            .guild_id(1)
            .channel_id(10)
            .message_id(100)
            .user_id(user_id)
            .build()
            .await?;
    }
    let survivor = EmojiUsageFactory::new(db)
        .guild_id(1)
        .channel_id(10)
        .message_id(200)
        .user_id(1)
        .build()
        .await?;

    let repo = EmojiUsageRepository::new(db);
    let removed = repo.remove_all_for_message(1, 10, 100).await?;

    assert_eq!(removed, 5);
    let remaining = entity::prelude::EmojiUsage::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests that the guild and channel are part of the match.
///
/// Verifies that a row with the same message id in a different channel is kept.
///
/// Expected: Ok(1)
#[tokio::test]
async fn matches_guild_and_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    EmojiUsageFactory::new(db)
        .guild_id(1)
        .channel_id(10)
        .message_id(100)
        .build()
        .await?;
    EmojiUsageFactory::new(db)
        .guild_id(1)
        .channel_id(11)
        .message_id(100)
        .build()
        .await?;

    let repo = EmojiUsageRepository::new(db);
    let removed = repo.remove_all_for_message(1, 10, 100).await?;

    assert_eq!(removed, 1);
    let count = entity::prelude::EmojiUsage::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
