//! Google and Facebook OAuth2 code-exchange client.
//!
//! Provider endpoints come from configuration so tests can point them at a
//! local mock server instead of the real providers.

use crate::configuration::OAuthSettings;
use serde_derive::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            other => Err(format!("unknown oauth provider {:?}", other)),
        }
    }
}

/// The subset of a provider profile the app cares about.
#[derive(Debug, Clone)]
pub struct Profile {
    pub provider_id: String,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("oauth provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("oauth provider returned an unusable response: {0}")]
    BadResponse(String),
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GoogleProfile {
    id: String,
    name: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FacebookProfile {
    id: String,
    name: String,
    email: Option<String>,
}

#[derive(Clone)]
pub struct OAuthClient {
    http: reqwest::Client,
    settings: OAuthSettings,
}

impl OAuthClient {
    pub fn new(settings: OAuthSettings) -> Self {
        OAuthClient {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// The provider consent page the browser is redirected to.
    pub fn authorize_url(&self, provider: Provider, redirect_uri: &str) -> String {
        match provider {
            Provider::Google => format!(
                "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
                self.settings.google_auth_url,
                urlencoding::encode(&self.settings.google_client_id),
                urlencoding::encode(redirect_uri),
                urlencoding::encode("profile email"),
            ),
            Provider::Facebook => format!(
                "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
                self.settings.facebook_auth_url,
                urlencoding::encode(&self.settings.facebook_app_id),
                urlencoding::encode(redirect_uri),
                urlencoding::encode("email"),
            ),
        }
    }

    /// Exchanges a callback `code` for the provider profile.
    #[tracing::instrument(name = "OAuth code exchange.", skip(self, code))]
    pub async fn exchange(
        &self,
        provider: Provider,
        code: &str,
        redirect_uri: &str,
    ) -> Result<Profile, OAuthError> {
        match provider {
            Provider::Google => self.exchange_google(code, redirect_uri).await,
            Provider::Facebook => self.exchange_facebook(code, redirect_uri).await,
        }
    }

    async fn exchange_google(&self, code: &str, redirect_uri: &str) -> Result<Profile, OAuthError> {
        let token: TokenResponse = self
            .http
            .post(&self.settings.google_token_url)
            .form(&[
                ("code", code),
                ("client_id", &self.settings.google_client_id),
                ("client_secret", &self.settings.google_client_secret),
                ("redirect_uri", redirect_uri),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|err| OAuthError::BadResponse(err.to_string()))?
            .json()
            .await?;

        let profile: GoogleProfile = self
            .http
            .get(&self.settings.google_profile_url)
            .bearer_auth(&token.access_token)
            .send()
            .await?
            .error_for_status()
            .map_err(|err| OAuthError::BadResponse(err.to_string()))?
            .json()
            .await?;

        Ok(Profile {
            provider_id: profile.id,
            name: profile.name,
            email: profile.email,
        })
    }

    async fn exchange_facebook(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<Profile, OAuthError> {
        let token: TokenResponse = self
            .http
            .get(&self.settings.facebook_token_url)
            .query(&[
                ("code", code),
                ("client_id", &self.settings.facebook_app_id),
                ("client_secret", &self.settings.facebook_app_secret),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|err| OAuthError::BadResponse(err.to_string()))?
            .json()
            .await?;

        let profile: FacebookProfile = self
            .http
            .get(&self.settings.facebook_profile_url)
            .query(&[
                ("fields", "id,name,email"),
                ("access_token", &token.access_token),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|err| OAuthError::BadResponse(err.to_string()))?
            .json()
            .await?;

        Ok(Profile {
            provider_id: profile.id,
            name: profile.name,
            email: profile.email,
        })
    }
}
