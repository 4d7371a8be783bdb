pub mod mailer;
pub mod oauth;
pub mod token;

pub use mailer::Mailer;
pub use oauth::OAuthClient;
