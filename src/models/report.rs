use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flags a review for moderation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i32,
    pub review_id: i32,
    pub user_id: i32,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
