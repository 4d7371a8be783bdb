use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    pub review_id: i32,
    #[validate(min_length = 1)]
    #[validate(max_length = 1000)]
    pub reason: String,
}
