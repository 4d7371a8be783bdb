use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(
    pool: &PgPool,
    message: models::ContactMessage,
) -> Result<models::ContactMessage, String> {
    let query_span = tracing::info_span!("Saving new contact message into the database.");
    sqlx::query_as::<_, models::ContactMessage>(
        r#"
        INSERT INTO contact_messages (name, email, message, created_at, updated_at)
        VALUES ($1, $2, $3, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(&message.name)
    .bind(&message.email)
    .bind(&message.message)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}
