use crate::models;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by id.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_email(pool: &PgPool, email: &str) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by email.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE email = $1 LIMIT 1")
        .bind(email)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_google_id(
    pool: &PgPool,
    google_id: &str,
) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by google id.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE google_id = $1 LIMIT 1")
        .bind(google_id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_facebook_id(
    pool: &PgPool,
    facebook_id: &str,
) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by facebook id.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE facebook_id = $1 LIMIT 1")
        .bind(facebook_id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn insert(pool: &PgPool, user: models::User) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Saving new user into the database.");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (name, email, password, role, google_id, facebook_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.role)
    .bind(&user.google_id)
    .bind(&user.facebook_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, user: &models::User) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Updating user profile.");
    sqlx::query_as::<_, models::User>(
        r#"
        UPDATE users
        SET name = $2, email = $3, password = $4, updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}

pub async fn set_reset_token(
    pool: &PgPool,
    id: i32,
    token: &str,
    expires: DateTime<Utc>,
) -> Result<(), String> {
    let query_span = tracing::info_span!("Storing password reset token.");
    sqlx::query(
        r#"
        UPDATE users
        SET reset_password_token = $2, reset_password_expires = $3,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(token)
    .bind(expires)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}

/// Writes the new hash and burns the reset token in the same statement.
pub async fn reset_password(pool: &PgPool, id: i32, password: &str) -> Result<(), String> {
    let query_span = tracing::info_span!("Resetting user password.");
    sqlx::query(
        r#"
        UPDATE users
        SET password = $2, reset_password_token = NULL, reset_password_expires = NULL,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(password)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}
