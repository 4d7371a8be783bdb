use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct SignupForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub name: String,
    #[validate(min_length = 3)]
    pub email: String,
    #[validate(min_length = 6)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct LoginForm {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ForgotPasswordForm {
    #[validate(min_length = 3)]
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordForm {
    #[validate(min_length = 1)]
    pub token: String,
    #[validate(min_length = 6)]
    pub new_password: String,
}
