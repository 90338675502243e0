use super::*;
use crate::model::scrub::Scrub;

/// Tests loading every persisted scrub entry.
///
/// Expected: Ok with all entries converted to domain models
#[tokio::test]
async fn returns_all_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scrub)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_scrub(db, 1, 2).await?;
    create_scrub(db, 1, 3).await?;
    create_scrub(db, 4, 2).await?;

    let repo = ScrubRepository::new(db);
    let mut all = repo.get_all().await?;
    all.sort_by_key(|s| (s.guild_id, s.user_id));

    assert_eq!(
        all,
        vec![
            Scrub { guild_id: 1, user_id: 2 },
            Scrub { guild_id: 1, user_id: 3 },
            Scrub { guild_id: 4, user_id: 2 },
        ]
    );

    Ok(())
}
