use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An offering listed under a business.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i32,
    pub business_id: i32,
    pub title: String,
    pub description: String,
    pub main_image: String,
    // joined by ", " as uploaded
    pub sub_images: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
