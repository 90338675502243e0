use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    // guild 1: e1 x4 (user 11 x3, user 12 x1), 👍 x2 (user 12, user 13), 🔥 x1 (user 11)
    for _ in 0..3 {
        EmojiUsageFactory::new(db)
            .guild_id(1)
            .user_id(11)
            .custom_emoji(500, "e1")
            .build()
            .await?;
    }
    EmojiUsageFactory::new(db)
        .guild_id(1)
        .user_id(12)
        .custom_emoji(500, "e1")
        .build()
        .await?;
    for user_id in [12, 13] {
        EmojiUsageFactory::new(db)
            .guild_id(1)
            .user_id(user_id)
            .emoji("👍")
            .build()
            .await?;
    }
    EmojiUsageFactory::new(db)
        .guild_id(1)
        .user_id(11)
        .emoji("🔥")
        .build()
        .await?;

    // other guild, must never leak into guild 1
    for _ in 0..10 {
        EmojiUsageFactory::new(db)
            .guild_id(2)
            .user_id(11)
            .emoji("🔥")
            .build()
            .await?;
    }

    Ok(())
}

/// Tests the emoji leaderboard with user drill-down.
///
/// Expected: emojis by count desc, each with its top users
#[tokio::test]
async fn top_emojis_with_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let entries = LeaderboardService::new(db).top_emojis(1, 2).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].emoji.emoji_id, "500");
    assert_eq!(entries[0].emoji.count, 4);
    assert_eq!(
        entries[0].top_users,
        vec![
            UserCount {
                user_id: 11,
                count: 3
            },
            UserCount {
                user_id: 12,
                count: 1
            },
        ]
    );
    assert_eq!(entries[1].emoji.emoji_id, "👍");
    assert_eq!(entries[1].emoji.count, 2);
    assert_eq!(entries[1].top_users.len(), 2);

    Ok(())
}

/// Tests the user leaderboard with emoji drill-down.
///
/// Expected: users by count desc, each with their top emojis
#[tokio::test]
async fn top_users_with_emojis() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let entries = LeaderboardService::new(db).top_users(1, 5).await?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].user.user_id, 11);
    assert_eq!(entries[0].user.count, 4);
    assert_eq!(entries[0].top_emojis.len(), 2);
    assert_eq!(entries[0].top_emojis[0].emoji_id, "500");
    assert_eq!(entries[0].top_emojis[0].count, 3);
    assert_eq!(entries[0].top_emojis[1].emoji_id, "🔥");
    assert_eq!(entries[0].top_emojis[1].count, 1);
    assert_eq!(entries[1].user.user_id, 12);
    assert_eq!(entries[1].user.count, 2);

    Ok(())
}

/// Tests a guild with no reactions.
///
/// Expected: both leaderboards empty
#[tokio::test]
async fn empty_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let service = LeaderboardService::new(db);

    assert!(service.top_emojis(3, 5).await?.is_empty());
    assert!(service.top_users(3, 5).await?.is_empty());

    Ok(())
}

/// Tests that a failing primary query is returned as an error.
///
/// Expected: Err when the usage table is missing
#[tokio::test]
async fn fails_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LeaderboardService::new(db).top_emojis(1, 5).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests that the requested amount is clamped to the leaderboard bounds.
///
/// 25 distinct emojis in the guild.
///
/// Expected: 100 yields MAX_AMOUNT entries, 0 yields one
#[tokio::test]
async fn clamps_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EmojiUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for emoji_id in 1..=25u64 {
        EmojiUsageFactory::new(db)
            .guild_id(1)
            .user_id(11)
            .custom_emoji(emoji_id, format!("e{}", emoji_id))
            .build()
            .await?;
    }

    let service = LeaderboardService::new(db);

    assert_eq!(service.top_emojis(1, 100).await?.len(), MAX_AMOUNT as usize);
    assert_eq!(service.top_emojis(1, 0).await?.len(), 1);
    assert_eq!(service.top_users(1, 0).await?.len(), 1);

    Ok(())
}
