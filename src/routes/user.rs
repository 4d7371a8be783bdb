use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_web::{get, put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Get own profile.", skip(user))]
#[get("")]
pub async fn me_handler(user: Authenticated) -> Result<impl Responder> {
    Ok(JsonResponse::build().set_item((*user).clone()).ok("OK"))
}

#[tracing::instrument(name = "Update own profile.", skip(user, form, pg_pool))]
#[put("")]
pub async fn update_profile_handler(
    user: Authenticated,
    form: web::Json<forms::UpdateProfileForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::User>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    let mut updated = (*user).clone();

    if let Some(name) = form.name {
        updated.name = name.trim().to_string();
    }
    if let Some(email) = form.email {
        updated.email = email.trim().to_lowercase();
    }
    if let Some(password) = form.password {
        let password = password.trim().to_string();
        let hash = web::block(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|err| {
                JsonResponse::<models::User>::build().internal_server_error(err.to_string())
            })?
            .map_err(|err| {
                tracing::error!("failed to hash password: {:?}", err);
                JsonResponse::<models::User>::build().internal_server_error("")
            })?;
        updated.password = Some(hash);
    }

    db::user::update(pg_pool.get_ref(), &updated)
        .await
        .map_err(|err| JsonResponse::<models::User>::build().internal_server_error(err))
        .map(|user| JsonResponse::build().set_item(user).ok("Profile updated"))
}
