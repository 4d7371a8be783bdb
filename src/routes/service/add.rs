use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use sqlx::PgPool;

#[tracing::instrument(name = "Create service.", skip(_user, form, pg_pool, settings))]
#[post("/create")]
pub async fn create_handler(
    _user: Authenticated,
    form: MultipartForm<forms::ServiceForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    let business = db::business::fetch(pg_pool.get_ref(), form.business_id.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Service>::build().not_found("Business not found"))?;

    let main_image = uploads::store_image(&settings.uploads_dir, &form.main_image)
        .map_err(|err| JsonResponse::<models::Service>::build().bad_request(err.to_string()))?;

    let mut sub_images = Vec::with_capacity(form.sub_images.len());
    for file in &form.sub_images {
        let stored = uploads::store_image(&settings.uploads_dir, file).map_err(|err| {
            JsonResponse::<models::Service>::build().bad_request(err.to_string())
        })?;
        sub_images.push(stored);
    }

    let service = models::Service {
        id: 0,
        business_id: business.id,
        title: form.title.into_inner(),
        description: form.description.into_inner(),
        main_image,
        sub_images: sub_images.join(", "),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::service::insert(pg_pool.get_ref(), service)
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))
        .map(|service| {
            JsonResponse::build()
                .set_id(service.id)
                .set_item(service)
                .created("Service created")
        })
}
