use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_BUSINESS: &str = "business";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    // bcrypt hash; never serialized. NULL for OAuth-only accounts.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub role: String,
    pub google_id: Option<String>,
    pub facebook_id: Option<String>,
    #[serde(skip_serializing)]
    pub reset_password_token: Option<String>,
    #[serde(skip_serializing)]
    pub reset_password_expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Fresh account with the default role; the database assigns id and
    /// timestamps on insert.
    pub fn new(name: String, email: String) -> Self {
        User {
            id: 0,
            name,
            email,
            password: None,
            role: ROLE_USER.to_string(),
            google_id: None,
            facebook_id: None,
            reset_password_token: None,
            reset_password_expires: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
