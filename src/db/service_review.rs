use crate::{models, views};
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn insert(
    pool: &PgPool,
    review: models::ServiceReview,
) -> Result<models::ServiceReview, String> {
    let query_span = tracing::info_span!("Saving new service review into the database.");
    sqlx::query_as::<_, models::ServiceReview>(
        r#"
        INSERT INTO service_reviews (user_id, service_id, title, description, rating,
                                     created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(review.user_id)
    .bind(review.service_id)
    .bind(&review.title)
    .bind(&review.description)
    .bind(review.rating)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_by_service_detailed(
    pool: &PgPool,
    service_id: i32,
) -> Result<Vec<views::ServiceReviewDetail>, String> {
    let query_span = tracing::info_span!("Fetch service reviews with reviewer.");
    sqlx::query_as::<_, views::ServiceReviewDetail>(
        r#"
        SELECT sr.*,
               u.id AS reviewer_id, u.name AS reviewer_name, u.email AS reviewer_email
        FROM service_reviews sr
        JOIN users u ON u.id = sr.user_id
        WHERE sr.service_id = $1
        ORDER BY sr.created_at DESC
        "#,
    )
    .bind(service_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}
