use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ContactForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
    #[validate(min_length = 3)]
    pub email: String,
    #[validate(min_length = 1)]
    pub message: String,
}
