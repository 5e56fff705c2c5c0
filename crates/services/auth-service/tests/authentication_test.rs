//! Register-then-login flows against the in-memory credential store.

use std::sync::Arc;

use auth_service_lib::{AuthService, Authenticator, LocalUserClient};
use domain::{HashCost, Registration};
use user_service_lib::{MemoryUserStore, UserManager, UserService};

fn cheap() -> HashCost {
    HashCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

async fn setup() -> (Authenticator, uuid::Uuid) {
    let users: Arc<dyn UserService> =
        Arc::new(UserManager::new(Arc::new(MemoryUserStore::new()), cheap()));

    let user = users
        .register(Registration {
            email: "test@example.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "password123".to_string(),
            password_confirmation: Some("password123".to_string()),
        })
        .await
        .unwrap();

    let auth = Authenticator::new(Arc::new(LocalUserClient::new(users)), cheap()).unwrap();
    (auth, user.id)
}

#[tokio::test]
async fn test_exact_credentials_authenticate() {
    let (auth, id) = setup().await;

    let user = auth
        .authenticate_with_credentials("test@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(user.map(|u| u.id), Some(id));
}

#[tokio::test]
async fn test_email_whitespace_is_ignored() {
    let (auth, id) = setup().await;

    let user = auth
        .authenticate_with_credentials("  test@example.com  ", "password123")
        .await
        .unwrap();
    assert_eq!(user.map(|u| u.id), Some(id));
}

#[tokio::test]
async fn test_email_case_is_ignored() {
    let (auth, id) = setup().await;

    let user = auth
        .authenticate_with_credentials("TEST@EXAMPLE.COM", "password123")
        .await
        .unwrap();
    assert_eq!(user.map(|u| u.id), Some(id));
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let (auth, _) = setup().await;

    let user = auth
        .authenticate_with_credentials("test@example.com", "wrongpassword")
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_unknown_email_is_rejected() {
    let (auth, _) = setup().await;

    let user = auth
        .authenticate_with_credentials("other@example.com", "password123")
        .await
        .unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_repeated_calls_are_idempotent() {
    let (auth, id) = setup().await;

    for _ in 0..3 {
        let bad = auth
            .authenticate_with_credentials("test@example.com", "wrongpassword")
            .await
            .unwrap();
        assert!(bad.is_none());
    }

    let good = auth
        .authenticate_with_credentials("test@example.com", "password123")
        .await
        .unwrap();
    assert_eq!(good.map(|u| u.id), Some(id));
}
