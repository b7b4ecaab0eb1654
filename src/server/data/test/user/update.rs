use super::*;

/// Tests a partial update of a user.
///
/// Expected: only the name changes
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .name("Before")
        .email("same@example.com")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            name: Some("After".to_string()),
            email: None,
        })
        .await?;

    assert_eq!(updated.name, "After");
    assert_eq!(updated.email, "same@example.com");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 31,
            name: Some("Ghost".to_string()),
            email: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
