use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Reviewer {
    #[sqlx(rename = "reviewer_id")]
    pub id: i32,
    #[sqlx(rename = "reviewer_name")]
    pub name: String,
    #[sqlx(rename = "reviewer_email")]
    pub email: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ReviewedProduct {
    #[sqlx(rename = "reviewed_product_id")]
    pub id: i32,
    #[sqlx(rename = "reviewed_product_title")]
    pub title: String,
}

/// A review joined with its author and the product it rates.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDetail {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub user: Reviewer,
    #[sqlx(flatten)]
    pub product: ReviewedProduct,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductRating {
    pub average_rating: f64,
    pub number_of_reviews: i64,
}
