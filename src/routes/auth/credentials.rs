use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::token;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Signup.", skip(form, pg_pool, settings))]
#[post("/signup")]
pub async fn signup_handler(
    form: web::Json<forms::SignupForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    let email = form.email.trim().to_lowercase();
    let password = form.password.trim().to_string();

    let existing = db::user::fetch_by_email(pg_pool.get_ref(), &email)
        .await
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?;
    if existing.is_some() {
        return Err(JsonResponse::<serde_json::Value>::build().bad_request("User already exists"));
    }

    let hash = web::block(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|err| {
            JsonResponse::<serde_json::Value>::build().internal_server_error(err.to_string())
        })?
        .map_err(|err| {
            tracing::error!("failed to hash password: {:?}", err);
            JsonResponse::<serde_json::Value>::build().internal_server_error("")
        })?;

    let mut user = models::User::new(form.name.trim().to_string(), email);
    user.password = Some(hash);

    let user = db::user::insert(pg_pool.get_ref(), user)
        .await
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?;

    let jwt = token::sign_session(user.id, &settings.auth.jwt_secret)
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_id(user.id)
        .set_item(serde_json::json!({ "token": jwt }))
        .created("User created"))
}

#[tracing::instrument(name = "Login.", skip(form, pg_pool, settings))]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::LoginForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    let email = form.email.trim().to_lowercase();
    let password = form.password.trim().to_string();

    let user = db::user::fetch_by_email(pg_pool.get_ref(), &email)
        .await
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<serde_json::Value>::build().bad_request("Invalid credentials")
        })?;

    // OAuth-only accounts carry no hash and cannot log in with a password
    let hash = user.password.clone().ok_or_else(|| {
        JsonResponse::<serde_json::Value>::build().bad_request("Invalid credentials")
    })?;

    let valid = web::block(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|err| {
            JsonResponse::<serde_json::Value>::build().internal_server_error(err.to_string())
        })?
        .map_err(|err| {
            tracing::error!("failed to verify password: {:?}", err);
            JsonResponse::<serde_json::Value>::build().internal_server_error("")
        })?;

    if !valid {
        return Err(JsonResponse::<serde_json::Value>::build().bad_request("Invalid credentials"));
    }

    let jwt = token::sign_session(user.id, &settings.auth.jwt_secret)
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_id(user.id)
        .set_item(serde_json::json!({ "token": jwt }))
        .ok("OK"))
}
