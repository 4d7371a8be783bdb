use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessReviewForm {
    pub business_id: i32,
    #[validate(min_length = 1)]
    pub description: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
}
