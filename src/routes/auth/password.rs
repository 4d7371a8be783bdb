use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::{token, Mailer};
use actix_web::{post, web, Responder, Result};
use chrono::{Duration, Utc};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Forgot password.", skip(form, pg_pool, settings, mailer))]
#[post("/forgot-password")]
pub async fn forgot_password_handler(
    form: web::Json<forms::ForgotPasswordForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
    mailer: web::Data<Mailer>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().bad_request(errors.to_string()));
    }

    let email = form.email.trim().to_lowercase();
    let user = db::user::fetch_by_email(pg_pool.get_ref(), &email)
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<()>::build().not_found("User not found"))?;

    let reset_token = token::sign_reset(user.id, &settings.auth.jwt_secret)
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?;

    db::user::set_reset_token(
        pg_pool.get_ref(),
        user.id,
        &reset_token,
        Utc::now() + Duration::hours(1),
    )
    .await
    .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?;

    let reset_link = format!("{}/reset-password/{}", settings.frontend_url, reset_token);
    let mailer = mailer.get_ref().clone();
    tokio::spawn(async move {
        mailer.send_password_reset(&user.email, &reset_link).await;
    });

    Ok(JsonResponse::<()>::build().ok("Password reset email sent"))
}

#[tracing::instrument(name = "Reset password.", skip(form, pg_pool, settings))]
#[post("/reset-password")]
pub async fn reset_password_handler(
    form: web::Json<forms::ResetPasswordForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<()>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    let claims = token::verify(&form.token, &settings.auth.jwt_secret)
        .map_err(|_| JsonResponse::<()>::build().bad_request("Invalid or expired token"))?;

    let user = db::user::fetch(pg_pool.get_ref(), claims.id)
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<()>::build().bad_request("Invalid or expired token"))?;

    // the link is single-use: the stored token must match and be unexpired
    let stored_matches = user.reset_password_token.as_deref() == Some(form.token.as_str());
    let unexpired = user
        .reset_password_expires
        .map(|expires| expires > Utc::now())
        .unwrap_or(false);
    if !stored_matches || !unexpired {
        return Err(JsonResponse::<()>::build().bad_request("Invalid or expired token"));
    }

    let new_password = form.new_password.trim().to_string();
    let hash = web::block(move || bcrypt::hash(new_password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err.to_string()))?
        .map_err(|err| {
            tracing::error!("failed to hash password: {:?}", err);
            JsonResponse::<()>::build().internal_server_error("")
        })?;

    db::user::reset_password(pg_pool.get_ref(), user.id, &hash)
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?;

    Ok(JsonResponse::<()>::build().ok("Password has been reset"))
}
