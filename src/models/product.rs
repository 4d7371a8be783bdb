use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

pub const STATUSES: [&str; 3] = [STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Fixed category enumeration; matching is case-insensitive.
pub const CATEGORIES: [&str; 8] = [
    "electronics",
    "fashion",
    "food",
    "health",
    "home",
    "services",
    "travel",
    "other",
];

pub fn is_valid_status(status: &str) -> bool {
    STATUSES.contains(&status)
}

/// Returns the canonical (lowercase) category when the value belongs
/// to the fixed enumeration.
pub fn normalize_category(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    CATEGORIES.contains(&lowered.as_str()).then_some(lowered)
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub main_image: String,
    // comma-joined relative paths, upload order preserved
    pub other_images: String,
    pub category: String,
    pub sub_category: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub product_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn other_images_vec(&self) -> Vec<String> {
        self.other_images
            .split(',')
            .filter(|s| !s.is_empty())
            .map(Into::into)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_normalization_is_case_insensitive() {
        assert_eq!(normalize_category("Electronics"), Some("electronics".into()));
        assert_eq!(normalize_category(" FASHION "), Some("fashion".into()));
        assert_eq!(normalize_category("gadgets"), None);
    }

    #[test]
    fn status_enumeration_is_closed() {
        assert!(is_valid_status("pending"));
        assert!(is_valid_status("approved"));
        assert!(is_valid_status("rejected"));
        assert!(!is_valid_status("archived"));
        assert!(!is_valid_status("Approved"));
    }
}
