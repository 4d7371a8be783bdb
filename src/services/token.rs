//! Signed bearer tokens for sessions and password resets.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_derive::{Deserialize, Serialize};

const SESSION_TTL_DAYS: i64 = 7;
const RESET_TTL_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is expired")]
    Expired,
    #[error("token is invalid")]
    Invalid,
}

fn sign(user_id: i32, ttl: Duration, secret: &str) -> Result<String, TokenError> {
    let claims = Claims {
        id: user_id,
        exp: (Utc::now() + ttl).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::Invalid)
}

/// Week-long session token handed out at login and signup.
pub fn sign_session(user_id: i32, secret: &str) -> Result<String, TokenError> {
    sign(user_id, Duration::days(SESSION_TTL_DAYS), secret)
}

/// Short-lived token embedded in the password reset link.
pub fn sign_reset(user_id: i32, secret: &str) -> Result<String, TokenError> {
    sign(user_id, Duration::hours(RESET_TTL_HOURS), secret)
}

pub fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })
}
