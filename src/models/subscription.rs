use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plan template; not owned by any user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub features: serde_json::Value,
    pub price_weekly: f64,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
