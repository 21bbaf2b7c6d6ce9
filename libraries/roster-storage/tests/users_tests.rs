//! Integration tests for the users vertical slice
//!
//! Tests user operations including:
//! - CRUD through the `UserRepository` trait
//! - Validation and email normalization
//! - Email uniqueness
//! - Partial updates touching only the given fields


use roster_core::{
    storage::UserRepository,
    types::{UserId, UserPatch},
    validation::fields,
    RosterError,
};
use std::collections::HashSet;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = store
        .create(new_user("Jane", "jane@x.com"))
        .await
        .expect("Failed to create user");

    assert_eq!(user.name, "Jane");
    assert_eq!(user.email, "jane@x.com");
    assert_eq!(user.phone, 5551234);
    assert_eq!(user.age, 30);
    assert_eq!(user.interests, vec!["reading", "chess"]);
    assert_eq!(user.created_at, user.updated_at);

    let retrieved = store.get_by_id(&user.id).await.unwrap();
    assert_eq!(retrieved, user);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let mut ids = HashSet::new();
    for i in 0..10 {
        let user = store
            .create(new_user(&format!("User {i}"), &format!("user{i}@x.com")))
            .await
            .unwrap();
        assert!(ids.insert(user.id));
    }
}

#[tokio::test]
async fn test_email_is_lowercased() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = store
        .create(new_user("Jane", "  Jane.Doe@Example.COM "))
        .await
        .unwrap();

    assert_eq!(user.email, "jane.doe@example.com");
    let retrieved = store.get_by_id(&user.id).await.unwrap();
    assert_eq!(retrieved.email, "jane.doe@example.com");
}

#[tokio::test]
async fn test_create_rejects_malformed_email() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let err = store
        .create(new_user("Jane", "not-an-email"))
        .await
        .unwrap_err();

    match err {
        RosterError::Validation(errors) => {
            assert_eq!(
                errors.message_for(fields::EMAIL),
                Some("Please enter a valid email address")
            );
        }
        other => panic!("Expected validation error, got {other:?}"),
    }

    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let err = store.create(new_user("   ", "jane@x.com")).await.unwrap_err();

    assert!(matches!(err, RosterError::Validation(_)));
}

#[tokio::test]
async fn test_create_rejects_duplicate_email() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    store.create(new_user("Jane", "jane@x.com")).await.unwrap();

    // Differs only by case, which normalization removes
    let err = store
        .create(new_user("Other Jane", "JANE@x.com"))
        .await
        .unwrap_err();

    match err {
        RosterError::Validation(errors) => {
            assert_eq!(
                errors.message_for(fields::EMAIL),
                Some("Email is already in use")
            );
        }
        other => panic!("Expected validation error, got {other:?}"),
    }

    assert_eq!(store.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_all_returns_oldest_first() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let first = store.create(new_user("First", "first@x.com")).await.unwrap();
    let second = store.create(new_user("Second", "second@x.com")).await.unwrap();
    let third = store.create(new_user("Third", "third@x.com")).await.unwrap();

    let ids: Vec<UserId> = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let err = store
        .get_by_id(&UserId::new("does-not-exist"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let updated = store
        .update(
            &user.id,
            UserPatch {
                age: Some(31),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.age, 31);
    assert!(updated.updated_at > user.updated_at);

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, user.name);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.phone, user.phone);
    assert_eq!(updated.interests, user.interests);
    assert_eq!(updated.created_at, user.created_at);

    let retrieved = store.get_by_id(&user.id).await.unwrap();
    assert_eq!(retrieved, updated);
}

#[tokio::test]
async fn test_update_normalizes_and_validates_email() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();

    let updated = store
        .update(
            &user.id,
            UserPatch {
                email: Some("Jane.New@X.com".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "jane.new@x.com");

    let err = store
        .update(
            &user.id,
            UserPatch {
                email: Some("broken".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::Validation(_)));

    // Failed update leaves the document as it was
    let retrieved = store.get_by_id(&user.id).await.unwrap();
    assert_eq!(retrieved.email, "jane.new@x.com");
}

#[tokio::test]
async fn test_update_to_taken_email_is_rejected() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    store.create(new_user("Jane", "jane@x.com")).await.unwrap();
    let john = store.create(new_user("John", "john@x.com")).await.unwrap();

    let err = store
        .update(
            &john.id,
            UserPatch {
                email: Some("jane@x.com".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap_err();

    match err {
        RosterError::Validation(errors) => {
            assert_eq!(
                errors.message_for(fields::EMAIL),
                Some("Email is already in use")
            );
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let err = store
        .update(
            &UserId::new("missing"),
            UserPatch {
                age: Some(31),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_can_clear_interests() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();
    let updated = store
        .update(
            &user.id,
            UserPatch {
                interests: Some(Vec::new()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.interests.is_empty());
    assert!(store.get_by_id(&user.id).await.unwrap().interests.is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();

    store.delete(&user.id).await.expect("Failed to delete user");

    let err = store.get_by_id(&user.id).await.unwrap_err();
    assert!(err.is_not_found());

    // Second delete has nothing to remove
    let err = store.delete(&user.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_deleted_email_can_be_reused_with_new_id() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let first = store.create(new_user("Jane", "jane@x.com")).await.unwrap();
    store.delete(&first.id).await.unwrap();

    let second = store.create(new_user("Jane", "jane@x.com")).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_in_memory_store_keeps_data_across_queries() {
    let store = roster_storage::UserStore::open("sqlite::memory:")
        .await
        .unwrap();

    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();
    assert_eq!(store.get_by_id(&user.id).await.unwrap(), user);
    assert_eq!(store.get_all().await.unwrap().len(), 1);

    store.close().await;
}

#[tokio::test]
async fn test_close_then_reopen_keeps_users() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("roster.db").display());

    let store = roster_storage::UserStore::open(&db_url).await.unwrap();
    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();
    store.close().await;

    let reopened = roster_storage::UserStore::open(&db_url).await.unwrap();
    assert_eq!(reopened.get_by_id(&user.id).await.unwrap(), user);
    reopened.close().await;
}

#[tokio::test]
async fn test_corrupt_row_is_a_database_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("roster.db").display());

    let store = roster_storage::UserStore::open(&db_url).await.unwrap();
    let user = store.create(new_user("Jane", "jane@x.com")).await.unwrap();

    let pool = roster_storage::create_pool(&db_url).await.unwrap();
    sqlx::query("UPDATE users SET mobile = 'not a number' WHERE id = ?")
        .bind(user.id.as_str())
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let err = store.get_by_id(&user.id).await.unwrap_err();
    assert!(matches!(err, RosterError::Database(_)));
    assert!(matches!(
        store.get_all().await.unwrap_err(),
        RosterError::Database(_)
    ));

    store.close().await;
}
