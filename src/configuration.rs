use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_host: String,
    pub app_port: u16,
    pub frontend_url: String,
    pub uploads_dir: String,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub smtp: SmtpSettings,
    #[serde(default)]
    pub oauth: OAuthSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct OAuthSettings {
    pub google_client_id: String,
    pub google_client_secret: String,
    pub facebook_app_id: String,
    pub facebook_app_secret: String,
    // Provider endpoints are configurable so tests can point them at a mock.
    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_profile_url: String,
    pub facebook_auth_url: String,
    pub facebook_token_url: String,
    pub facebook_profile_url: String,
}

impl AuthSettings {
    pub fn from_env() -> Self {
        AuthSettings {
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string()),
        }
    }
}

impl SmtpSettings {
    pub fn from_env() -> Self {
        SmtpSettings {
            host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            username: std::env::var("EMAIL_USER").unwrap_or_default(),
            password: std::env::var("EMAIL_PASS").unwrap_or_default(),
            from: std::env::var("EMAIL_FROM")
                .or_else(|_| std::env::var("EMAIL_USER"))
                .unwrap_or_default(),
        }
    }
}

impl OAuthSettings {
    pub fn from_env() -> Self {
        let env_or = |key: &str, default: &str| {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        OAuthSettings {
            google_client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            facebook_app_id: std::env::var("FACEBOOK_APP_ID").unwrap_or_default(),
            facebook_app_secret: std::env::var("FACEBOOK_APP_SECRET").unwrap_or_default(),
            google_auth_url: env_or(
                "GOOGLE_AUTH_URL",
                "https://accounts.google.com/o/oauth2/v2/auth",
            ),
            google_token_url: env_or("GOOGLE_TOKEN_URL", "https://oauth2.googleapis.com/token"),
            google_profile_url: env_or(
                "GOOGLE_PROFILE_URL",
                "https://www.googleapis.com/oauth2/v2/userinfo",
            ),
            facebook_auth_url: env_or(
                "FACEBOOK_AUTH_URL",
                "https://www.facebook.com/v12.0/dialog/oauth",
            ),
            facebook_token_url: env_or(
                "FACEBOOK_TOKEN_URL",
                "https://graph.facebook.com/v12.0/oauth/access_token",
            ),
            facebook_profile_url: env_or(
                "FACEBOOK_PROFILE_URL",
                "https://graph.facebook.com/me",
            ),
        }
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?;

    let mut config: Settings = settings.try_deserialize()?;

    // Secrets come from the environment, never from the file
    config.auth = AuthSettings::from_env();
    config.smtp = SmtpSettings::from_env();
    config.oauth = OAuthSettings::from_env();

    Ok(config)
}
