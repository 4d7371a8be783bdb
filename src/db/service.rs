use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn insert(pool: &PgPool, service: models::Service) -> Result<models::Service, String> {
    let query_span = tracing::info_span!("Saving new service into the database.");
    sqlx::query_as::<_, models::Service>(
        r#"
        INSERT INTO services (business_id, title, description, main_image, sub_images,
                              created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(service.business_id)
    .bind(&service.title)
    .bind(&service.description)
    .bind(&service.main_image)
    .bind(&service.sub_images)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Service>, String> {
    let query_span = tracing::info_span!("Fetch service by id.");
    sqlx::query_as::<_, models::Service>("SELECT * FROM services WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Service>, String> {
    let query_span = tracing::info_span!("Fetch all services.");
    sqlx::query_as::<_, models::Service>("SELECT * FROM services ORDER BY created_at DESC")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_business(
    pool: &PgPool,
    business_id: i32,
) -> Result<Vec<models::Service>, String> {
    let query_span = tracing::info_span!("Fetch services of business.");
    sqlx::query_as::<_, models::Service>(
        "SELECT * FROM services WHERE business_id = $1 ORDER BY created_at DESC",
    )
    .bind(business_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}

pub async fn update(pool: &PgPool, service: &models::Service) -> Result<models::Service, String> {
    let query_span = tracing::info_span!("Updating service.");
    sqlx::query_as::<_, models::Service>(
        r#"
        UPDATE services
        SET title = $2, description = $3, main_image = $4, sub_images = $5,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(service.id)
    .bind(&service.title)
    .bind(&service.description)
    .bind(&service.main_image)
    .bind(&service.sub_images)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<(), String> {
    let query_span = tracing::info_span!("Deleting service.");
    sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            "Failed to delete".to_string()
        })
}
