use crate::configuration::Settings;
use crate::db;
use crate::helpers::access::{can, Action};
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete review.", skip(user, pg_pool, settings))]
#[delete("/deleteReview/{id}")]
pub async fn delete_handler(
    user: Authenticated,
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let review = db::review::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Review>::build().not_found("Review not found"))?;

    if !can(&user, Action::Delete, &review) {
        return Err(JsonResponse::<models::Review>::build().forbidden("Access denied"));
    }

    db::review::delete(pg_pool.get_ref(), review.id)
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))?;

    if let Some(image) = &review.image {
        let _ = uploads::remove_image(&settings.uploads_dir, image);
    }

    Ok(JsonResponse::<models::Review>::build().ok("Review deleted"))
}
