mod credentials;
mod oauth;
mod password;

pub use credentials::*;
pub use oauth::*;
pub use password::*;
