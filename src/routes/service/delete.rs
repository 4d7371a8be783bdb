use crate::configuration::Settings;
use crate::db;
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete service.", skip(_user, pg_pool, settings))]
#[delete("/{serviceId}")]
pub async fn delete_handler(
    _user: Authenticated,
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let service = db::service::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Service>::build().not_found("Service not found"))?;

    db::service::delete(pg_pool.get_ref(), service.id)
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))?;

    let _ = uploads::remove_image(&settings.uploads_dir, &service.main_image);
    for image in service.sub_images.split(", ").filter(|s| !s.is_empty()) {
        let _ = uploads::remove_image(&settings.uploads_dir, image);
    }

    Ok(JsonResponse::<models::Service>::build().ok("Service deleted"))
}
