use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BusinessOwner {
    #[sqlx(rename = "owner_id")]
    pub id: i32,
    #[sqlx(rename = "owner_name")]
    pub name: String,
    #[sqlx(rename = "owner_email")]
    pub email: String,
    #[sqlx(rename = "owner_role")]
    pub role: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct BusinessPlan {
    #[sqlx(rename = "plan_id")]
    pub id: i32,
    #[sqlx(rename = "plan_name")]
    pub name: String,
}

/// Admin listing row: the business together with who owns it and which
/// plan it is on.
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetail {
    pub id: i32,
    pub user_id: i32,
    pub subscription_id: i32,
    pub billing_cycle: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub business_name: String,
    pub business_email: String,
    pub business_phone: String,
    pub business_description: Option<String>,
    pub business_website_url: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub status: String,
    pub main_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub user: BusinessOwner,
    #[sqlx(flatten)]
    pub subscription: BusinessPlan,
}
