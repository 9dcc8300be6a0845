//! Store tests against a live PostgreSQL.
//!
//! Run with `cargo test -- --ignored` and `DATABASE_URL` pointing at a server
//! where the user may create databases.

mod common;

use std::sync::Arc;
use std::time::Duration;

use account_service::domain::credential::errors::CredentialError;
use account_service::domain::credential::models::RegisterCommand;
use account_service::domain::credential::ports::CredentialServicePort;
use account_service::domain::credential::service::CredentialService;
use account_service::domain::user::models::EmailAddress;
use account_service::domain::user::models::Password;
use account_service::domain::user::models::Profile;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::ports::UserRepository;
use account_service::outbound::repositories::PostgresUserRepository;
use account_service::user::errors::RepositoryError;
use chrono::Utc;
use common::test_authenticator;
use common::TestDb;

fn user(email: &str) -> User {
    User {
        id: UserId::new(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: "$argon2id$test_hash".to_string(),
        profile: Profile {
            first_name: Some("Alice".to_string()),
            ..Default::default()
        },
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_and_find() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let created = repository.create(user("alice@example.com")).await.unwrap();

    let by_email = repository
        .find_by_email(&created.email)
        .await
        .unwrap()
        .expect("User not found by email");
    let by_id = repository
        .find_by_id(&created.id)
        .await
        .unwrap()
        .expect("User not found by id");

    assert_eq!(by_email.id, created.id);
    assert_eq!(by_id.email, created.email);
    assert_eq!(by_id.password_hash, "$argon2id$test_hash");
    assert_eq!(by_id.profile.first_name.as_deref(), Some("Alice"));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_email_unique_constraint() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository.create(user("alice@example.com")).await.unwrap();
    let result = repository.create(user("alice@example.com")).await;

    assert_eq!(
        result.unwrap_err(),
        RepositoryError::UniqueViolation("users_email_key".to_string())
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_profile_columns() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let mut created = repository.create(user("alice@example.com")).await.unwrap();
    created.profile.theme = Some("dark".to_string());
    repository.update(created.clone()).await.unwrap();

    let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.profile.theme.as_deref(), Some("dark"));
    assert_eq!(found.profile.first_name.as_deref(), Some("Alice"));

    assert!(matches!(
        repository.update(user("bob@example.com")).await,
        Err(RepositoryError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_registration_race() {
    let db = TestDb::new().await;
    let service = Arc::new(CredentialService::new(
        Arc::new(PostgresUserRepository::new(db.pool.clone())),
        test_authenticator(),
        Duration::from_secs(5),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .register(RegisterCommand {
                        email: EmailAddress::new("race@example.com".to_string()).unwrap(),
                        password: Password::new("pw123456".to_string()).unwrap(),
                        profile: Profile::default(),
                    })
                    .await
            })
        })
        .collect();

    let mut registered = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => registered += 1,
            Err(CredentialError::DuplicateUser) => {}
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }

    assert_eq!(registered, 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_longest_accepted_email_fits_column() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let email = format!(
        "{}@example.com",
        "a".repeat(EmailAddress::MAX_LENGTH - "@example.com".len())
    );
    let created = repository.create(user(&email)).await.unwrap();

    let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(found.email.as_str(), email);
}
