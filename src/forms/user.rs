use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Partial profile update; absent fields keep their stored values.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct UpdateProfileForm {
    #[validate(max_length = 100)]
    pub name: Option<String>,
    pub email: Option<String>,
    #[validate(min_length = 6)]
    pub password: Option<String>,
}
