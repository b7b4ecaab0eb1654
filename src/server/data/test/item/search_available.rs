use super::*;

/// Tests case-insensitive search over name and description.
///
/// Expected: items matching in either field, unavailable matches excluded
#[tokio::test]
async fn matches_name_or_description_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let by_name = ItemFactory::new(db, owner.id)
        .name("Power Drill")
        .description("Works on concrete")
        .build()
        .await?;
    let by_description = ItemFactory::new(db, owner.id)
        .name("Toolbox")
        .description("Comes with a DRILL bit set")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Old drill")
        .available(false)
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Three metres")
        .build()
        .await?;

    let items = ItemRepository::new(db).search_available("dRiLl", None).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}

/// Tests that LIKE wildcards in the search text are matched literally.
///
/// Expected: "100%" matches only the item containing that literal text
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let literal = ItemFactory::new(db, owner.id)
        .name("Battery")
        .description("Charged 100%")
        .build()
        .await?;
    ItemFactory::new(db, owner.id)
        .name("Battery pack")
        .description("Charged 1000 times")
        .build()
        .await?;

    let items = ItemRepository::new(db).search_available("100%", None).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, literal.id);

    Ok(())
}

/// Tests case-insensitive search over Cyrillic and accented text.
///
/// Expected: each item is found with the query in its own case and in a different case
#[tokio::test]
async fn matches_non_ascii_text_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = ItemRepository::new(db);

    let drill = repo
        .create(
            owner.id,
            CreateItemParams {
                name: "Дрель".to_string(),
                description: "Ударная, с набором свёрл".to_string(),
                available: true,
                request_id: None,
            },
        )
        .await?;
    let coffee = ItemFactory::new(db, owner.id)
        .name("Coffee maker")
        .description("Makes café crème")
        .build()
        .await?;

    for query in ["Дрель", "дРЕЛЬ", "УДАРНАЯ"] {
        let items = repo.search_available(query, None).await?;
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![drill.id], "query {query:?}");
    }

    for query in ["café", "CAFÉ CRÈME"] {
        let items = repo.search_available(query, None).await?;
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![coffee.id], "query {query:?}");
    }

    Ok(())
}

/// Tests that search follows a renamed item.
///
/// Expected: the new name matches in any case and the old name no longer does
#[tokio::test]
async fn matches_updated_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let item = ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Three metres")
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    repo.update(UpdateItemParams {
        id: item.id,
        name: Some("Стремянка".to_string()),
        description: None,
        available: None,
    })
    .await?;

    let found = repo.search_available("СТРЕМЯНКА", None).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, item.id);

    let stale = repo.search_available("ladder", None).await?;
    assert!(stale.is_empty());

    Ok(())
}
