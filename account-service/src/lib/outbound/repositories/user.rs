use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Profile;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::RepositoryError;

const SELECT_USER: &str = r#"
    SELECT id, email, password_hash, first_name, last_name, currency_preference, theme,
           created_at, updated_at
    FROM users
"#;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    currency_preference: Option<String>,
    theme: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            email: EmailAddress::new(row.email)
                .map_err(|e| RepositoryError::Database(format!("Corrupt user row: {}", e)))?,
            password_hash: row.password_hash,
            profile: Profile {
                first_name: row.first_name,
                last_name: row.last_name,
                currency_preference: row.currency_preference,
                theme: row.theme,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Unavailable(e.to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::UniqueViolation(
                db_err.constraint().unwrap_or("unknown").to_string(),
            )
        }
        _ => RepositoryError::Database(e.to_string()),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError> {
        let query = format!("{} WHERE email = $1", SELECT_USER);

        sqlx::query_as::<_, UserRow>(&query)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let query = format!("{} WHERE id = $1", SELECT_USER);

        sqlx::query_as::<_, UserRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, first_name, last_name,
                               currency_preference, theme, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.profile.first_name)
        .bind(&user.profile.last_name)
        .bind(&user.profile.currency_preference)
        .bind(&user.profile.theme)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, currency_preference = $4, theme = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(&user.profile.first_name)
        .bind(&user.profile.last_name)
        .bind(&user.profile.currency_preference)
        .bind(&user.profile.theme)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }
}
