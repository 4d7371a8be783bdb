use crate::{models, views};
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn insert(pool: &PgPool, report: models::Report) -> Result<models::Report, String> {
    let query_span = tracing::info_span!("Saving new report into the database.");
    sqlx::query_as::<_, models::Report>(
        r#"
        INSERT INTO reports (review_id, user_id, reason, created_at, updated_at)
        VALUES ($1, $2, $3, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(report.review_id)
    .bind(report.user_id)
    .bind(&report.reason)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_all_detailed(pool: &PgPool) -> Result<Vec<views::ReportDetail>, String> {
    let query_span = tracing::info_span!("Fetch all reports with review and reporter.");
    sqlx::query_as::<_, views::ReportDetail>(
        r#"
        SELECT rp.*,
               u.id AS reporter_id, u.name AS reporter_name, u.email AS reporter_email,
               r.id AS reported_review_id, r.title AS reported_review_title,
               r.description AS reported_review_description, r.rating AS reported_review_rating
        FROM reports rp
        JOIN users u ON u.id = rp.user_id
        JOIN reviews r ON r.id = rp.review_id
        ORDER BY rp.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}
