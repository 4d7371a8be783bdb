use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Reporter {
    #[sqlx(rename = "reporter_id")]
    pub id: i32,
    #[sqlx(rename = "reporter_name")]
    pub name: String,
    #[sqlx(rename = "reporter_email")]
    pub email: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ReportedReview {
    #[sqlx(rename = "reported_review_id")]
    pub id: i32,
    #[sqlx(rename = "reported_review_title")]
    pub title: String,
    #[sqlx(rename = "reported_review_description")]
    pub description: String,
    #[sqlx(rename = "reported_review_rating")]
    pub rating: i32,
}

/// Moderation queue row: the flag, who raised it and what it targets.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetail {
    pub id: i32,
    pub review_id: i32,
    pub user_id: i32,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub user: Reporter,
    #[sqlx(flatten)]
    pub review: ReportedReview,
}
