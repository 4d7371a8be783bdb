use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdateForm {
    #[validate(max_length = 100)]
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Option<serde_json::Value>,
    #[validate(minimum = 0.0)]
    pub price_weekly: Option<f64>,
    #[validate(minimum = 0.0)]
    pub price_monthly: Option<f64>,
    #[validate(minimum = 0.0)]
    pub price_yearly: Option<f64>,
    pub is_active: Option<bool>,
}
