use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BusinessReviewer {
    #[sqlx(rename = "reviewer_id")]
    pub id: i32,
    #[sqlx(rename = "reviewer_name")]
    pub name: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BusinessReviewDetail {
    pub id: i32,
    pub user_id: i32,
    pub business_id: i32,
    pub description: Option<String>,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub user: BusinessReviewer,
}

/// Aggregate over a business' reviews; average is pre-rounded to 2 decimals.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRating {
    pub average_rating: f64,
    pub number_of_users: i64,
}
