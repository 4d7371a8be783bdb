use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ServiceReviewer {
    #[sqlx(rename = "reviewer_id")]
    pub id: i32,
    #[sqlx(rename = "reviewer_name")]
    pub name: String,
    #[sqlx(rename = "reviewer_email")]
    pub email: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReviewDetail {
    pub id: i32,
    pub user_id: i32,
    pub service_id: i32,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub user: ServiceReviewer,
}
