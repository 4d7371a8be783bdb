use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Weekly => "weekly",
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    /// End of the first billing period: start plus exactly one cycle.
    pub fn period_end(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            BillingCycle::Weekly => start + chrono::Duration::weeks(1),
            BillingCycle::Monthly => start
                .checked_add_months(Months::new(1))
                .unwrap_or(start + chrono::Duration::days(30)),
            BillingCycle::Yearly => start
                .checked_add_months(Months::new(12))
                .unwrap_or(start + chrono::Duration::days(365)),
        }
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(BillingCycle::Weekly),
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            other => Err(format!("Invalid billing cycle: {}", other)),
        }
    }
}

/// A merchant profile tied to a paid plan (the "business").
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Business {
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
}
