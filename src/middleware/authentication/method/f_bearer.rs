use crate::configuration::Settings;
use crate::db;
use crate::middleware::authentication::get_header;
use crate::services::token;
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use sqlx::PgPool;
use std::sync::Arc;

/// Authenticates a `Bearer` token. `Ok(false)` when no Authorization
/// header is present; `Err` when a token is present but does not verify,
/// which the manager turns into a 401.
#[tracing::instrument(name = "Authenticate with bearer token.", skip(req))]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = match get_header::<String>(req, "authorization")? {
        Some(value) => value,
        None => return Ok(false),
    };

    let raw_token = authorization
        .strip_prefix("Bearer ")
        .ok_or_else(|| "malformed authorization header".to_string())?;

    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| "app settings not configured".to_string())?;

    let claims = token::verify(raw_token, &settings.auth.jwt_secret).map_err(|err| {
        tracing::debug!("bearer token rejected: {:?}", err);
        err.to_string()
    })?;

    let db_pool = req
        .app_data::<web::Data<PgPool>>()
        .ok_or_else(|| "db pool not configured".to_string())?
        .get_ref();

    let user = db::user::fetch(db_pool, claims.id)
        .await?
        .ok_or_else(|| "user no longer exists".to_string())?;

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}
