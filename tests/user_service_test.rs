//! User service scenarios over the in-memory store.

use std::sync::Arc;

use user_api::domain::{CreateUser, DomainError, UpdateUser};
use user_api::errors::AppError;
use user_api::infra::InMemoryUserStore;
use user_api::services::{UserManager, UserService};

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        password: "longpassword".to_string(),
    }
}

fn setup() -> (InMemoryUserStore, UserManager) {
    let store = InMemoryUserStore::new();
    let service = UserManager::new(Arc::new(store.clone()));
    (store, service)
}

#[tokio::test]
async fn test_register_on_empty_store_assigns_first_id() {
    let (_, service) = setup();

    let user = service.register(new_user("a@b.com")).await.unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn test_register_duplicate_email_leaves_store_unchanged() {
    let (store, service) = setup();
    service.register(new_user("a@b.com")).await.unwrap();

    let err = service.register(new_user("a@b.com")).await.unwrap_err();

    assert!(matches!(err, AppError::Domain(DomainError::DuplicateEmail)));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let (store, service) = setup();

    let err = service.register(new_user("")).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::InvalidEmail)));

    let mut short = new_user("a@b.com");
    short.password = "1234567".to_string();
    let err = service.register(short).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::PasswordTooShort)));

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_password_length_counts_characters() {
    let (_, service) = setup();
    let mut input = new_user("a@b.com");
    input.password = "ééééééé".to_string(); // 7 chars, 14 bytes

    let err = service.register(input).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::PasswordTooShort)));
}

#[tokio::test]
async fn test_registered_user_can_be_fetched() {
    let (_, service) = setup();
    let created = service.register(new_user("a@b.com")).await.unwrap();

    let fetched = service.get_user(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let (_, service) = setup();

    let err = service.get_user(42).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_created_at() {
    let (_, service) = setup();
    let created = service.register(new_user("a@b.com")).await.unwrap();

    let updated = service
        .update_user(
            created.id,
            UpdateUser {
                email: "new@b.com".to_string(),
                name: "New Name".to_string(),
                password: "anotherpassword".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "new@b.com");
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_missing_user_echoes_without_storing() {
    let (store, service) = setup();

    let echoed = service
        .update_user(
            999,
            UpdateUser {
                email: "ghost@b.com".to_string(),
                name: "Ghost".to_string(),
                password: "longpassword".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(echoed.id, 999);
    assert_eq!(echoed.email, "ghost@b.com");
    assert!(store.is_empty().await);
    assert!(service.get_user(999).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_to_taken_email_is_duplicate() {
    let (_, service) = setup();
    service.register(new_user("a@b.com")).await.unwrap();
    let second = service.register(new_user("b@b.com")).await.unwrap();

    let err = service
        .update_user(
            second.id,
            UpdateUser {
                email: "a@b.com".to_string(),
                name: "B".to_string(),
                password: "longpassword".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Domain(DomainError::DuplicateEmail)));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (store, service) = setup();
    let created = service.register(new_user("a@b.com")).await.unwrap();

    service.delete_user(created.id).await.unwrap();
    service.delete_user(created.id).await.unwrap();
    service.delete_user(999).await.unwrap();

    assert!(store.is_empty().await);
    assert!(service.get_user(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (_, service) = setup();
    let first = service.register(new_user("a@b.com")).await.unwrap();
    service.delete_user(first.id).await.unwrap();

    let second = service.register(new_user("a@b.com")).await.unwrap();
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_list_is_newest_first_and_paged() {
    let (_, service) = setup();
    for i in 1..=5 {
        service
            .register(new_user(&format!("user{i}@b.com")))
            .await
            .unwrap();
    }

    let all: Vec<i64> = service
        .list_users(10, 0)
        .await
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(all, vec![5, 4, 3, 2, 1]);

    let page: Vec<i64> = service
        .list_users(2, 1)
        .await
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(page, vec![4, 3]);

    assert!(service.list_users(10, 5).await.unwrap().is_empty());
    assert!(service.list_users(0, 0).await.unwrap().is_empty());
}
