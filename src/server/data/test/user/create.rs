use super::*;

/// Tests creating a user and finding it again by id and email.
///
/// Expected: Ok(User) reachable through both lookups
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(repo.find_by_id(user.id).await?, Some(user.clone()));
    assert_eq!(repo.find_by_email("alice@example.com").await?, Some(user));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests that a second user with the same email is refused by the unique index.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("taken@example.com").build().await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            name: "Copy".to_string(),
            email: "taken@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests listing users.
///
/// Expected: Ok(Vec) ordered by id
#[tokio::test]
async fn lists_users_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
