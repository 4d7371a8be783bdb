use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_multipart::form::MultipartForm;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Update service.", skip(_user, form, pg_pool, settings))]
#[put("/{serviceId}")]
pub async fn update_handler(
    _user: Authenticated,
    path: web::Path<i32>,
    form: MultipartForm<forms::ServiceUpdateForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let mut service = db::service::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Service>::build().not_found("Service not found"))?;

    let form = form.into_inner();

    if let Some(title) = form.title {
        service.title = title.into_inner();
    }
    if let Some(description) = form.description {
        service.description = description.into_inner();
    }

    if let Some(file) = &form.main_image {
        let stored = uploads::store_image(&settings.uploads_dir, file)
            .map_err(|err| JsonResponse::<models::Service>::build().bad_request(err.to_string()))?;
        let old = std::mem::replace(&mut service.main_image, stored);
        let _ = uploads::remove_image(&settings.uploads_dir, &old);
    }

    if !form.sub_images.is_empty() {
        let mut stored_images = Vec::with_capacity(form.sub_images.len());
        for file in &form.sub_images {
            let stored = uploads::store_image(&settings.uploads_dir, file).map_err(|err| {
                JsonResponse::<models::Service>::build().bad_request(err.to_string())
            })?;
            stored_images.push(stored);
        }
        let old = std::mem::replace(&mut service.sub_images, stored_images.join(", "));
        for image in old.split(", ").filter(|s| !s.is_empty()) {
            let _ = uploads::remove_image(&settings.uploads_dir, image);
        }
    }

    db::service::update(pg_pool.get_ref(), &service)
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))
        .map(|service| JsonResponse::build().set_item(service).ok("Service updated"))
}
