use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Subscription>, String> {
    let query_span = tracing::info_span!("Fetch all subscription plans.");
    sqlx::query_as::<_, models::Subscription>("SELECT * FROM subscriptions ORDER BY id")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Subscription>, String> {
    let query_span = tracing::info_span!("Fetch subscription plan by id.");
    sqlx::query_as::<_, models::Subscription>("SELECT * FROM subscriptions WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn update(
    pool: &PgPool,
    plan: &models::Subscription,
) -> Result<models::Subscription, String> {
    let query_span = tracing::info_span!("Updating subscription plan.");
    sqlx::query_as::<_, models::Subscription>(
        r#"
        UPDATE subscriptions
        SET name = $2, description = $3, features = $4,
            price_weekly = $5, price_monthly = $6, price_yearly = $7,
            is_active = $8, updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(plan.id)
    .bind(&plan.name)
    .bind(&plan.description)
    .bind(&plan.features)
    .bind(plan.price_weekly)
    .bind(plan.price_monthly)
    .bind(plan.price_yearly)
    .bind(plan.is_active)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}
