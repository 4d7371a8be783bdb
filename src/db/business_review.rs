use crate::{models, views};
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn insert(
    pool: &PgPool,
    review: models::BusinessReview,
) -> Result<models::BusinessReview, String> {
    let query_span = tracing::info_span!("Saving new business review into the database.");
    sqlx::query_as::<_, models::BusinessReview>(
        r#"
        INSERT INTO business_reviews (user_id, business_id, description, rating,
                                      created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(review.user_id)
    .bind(review.business_id)
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

pub async fn fetch_by_business_detailed(
    pool: &PgPool,
    business_id: i32,
) -> Result<Vec<views::BusinessReviewDetail>, String> {
    let query_span = tracing::info_span!("Fetch business reviews with reviewer.");
    sqlx::query_as::<_, views::BusinessReviewDetail>(
        r#"
        SELECT br.*, u.id AS reviewer_id, u.name AS reviewer_name
        FROM business_reviews br
        JOIN users u ON u.id = br.user_id
        WHERE br.business_id = $1
        ORDER BY br.created_at DESC
        "#,
    )
    .bind(business_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}

/// Average pre-rounded to 2 decimals so every caller renders the same value.
pub async fn rating(pool: &PgPool, business_id: i32) -> Result<views::BusinessRating, String> {
    let query_span = tracing::info_span!("Compute business rating.");
    sqlx::query_as::<_, views::BusinessRating>(
        r#"
        SELECT ROUND(COALESCE(AVG(rating::float8), 0)::numeric, 2)::float8 AS average_rating,
               COUNT(*) AS number_of_users
        FROM business_reviews
        WHERE business_id = $1
        "#,
    )
    .bind(business_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}
