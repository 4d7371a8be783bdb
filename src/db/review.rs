use crate::{models, views};
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

const DETAIL_SELECT: &str = r#"
    SELECT r.*,
           u.id AS reviewer_id, u.name AS reviewer_name, u.email AS reviewer_email,
           p.id AS reviewed_product_id, p.title AS reviewed_product_title
    FROM reviews r
    JOIN users u ON u.id = r.user_id
    JOIN products p ON p.id = r.product_id
"#;

pub async fn insert(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving new review into the database.");
    sqlx::query_as::<_, models::Review>(
        r#"
        INSERT INTO reviews (user_id, product_id, title, description, image, rating,
                             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(review.user_id)
    .bind(review.product_id)
    .bind(&review.title)
    .bind(&review.description)
    .bind(&review.image)
    .bind(review.rating)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch review by id.");
    sqlx::query_as::<_, models::Review>("SELECT * FROM reviews WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn update(pool: &PgPool, review: &models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Updating review.");
    sqlx::query_as::<_, models::Review>(
        r#"
        UPDATE reviews
        SET title = $2, description = $3, image = $4, rating = $5,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(review.id)
    .bind(&review.title)
    .bind(&review.description)
    .bind(&review.image)
    .bind(review.rating)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<(), String> {
    let query_span = tracing::info_span!("Deleting review.");
    sqlx::query("DELETE FROM reviews WHERE id = $1")
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

pub async fn fetch_all_detailed(pool: &PgPool) -> Result<Vec<views::ReviewDetail>, String> {
    let query_span = tracing::info_span!("Fetch all reviews with relations.");
    let sql = format!("{} ORDER BY r.created_at DESC", DETAIL_SELECT);
    sqlx::query_as::<_, views::ReviewDetail>(&sql)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_user_detailed(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<views::ReviewDetail>, String> {
    let query_span = tracing::info_span!("Fetch user's reviews with relations.");
    let sql = format!(
        "{} WHERE r.user_id = $1 ORDER BY r.created_at DESC",
        DETAIL_SELECT
    );
    sqlx::query_as::<_, views::ReviewDetail>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

/// Mean and count in one query; the mean is 0 when no reviews exist.
pub async fn product_rating(
    pool: &PgPool,
    product_id: i32,
) -> Result<views::ProductRating, String> {
    let query_span = tracing::info_span!("Compute product rating.");
    sqlx::query_as::<_, views::ProductRating>(
        r#"
        SELECT COALESCE(AVG(rating::float8), 0)::float8 AS average_rating,
               COUNT(*) AS number_of_reviews
        FROM reviews
        WHERE product_id = $1
        "#,
    )
    .bind(product_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}
