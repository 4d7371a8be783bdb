use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReviewForm {
    pub service_id: i32,
    #[validate(min_length = 1)]
    pub title: String,
    #[validate(min_length = 1)]
    pub description: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
}
