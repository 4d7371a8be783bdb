use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;

#[tracing::instrument(name = "Create product.", skip(user, form, pg_pool, settings))]
#[post("/products-create")]
pub async fn create_handler(
    user: Authenticated,
    form: MultipartForm<forms::ProductForm>,
    pg_pool: web::Data<sqlx::PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    let category = models::normalize_category(&form.category).ok_or_else(|| {
        JsonResponse::<models::Product>::build().bad_request("Invalid category")
    })?;

    if form.other_images.len() > forms::MAX_OTHER_IMAGES {
        return Err(JsonResponse::<models::Product>::build()
            .bad_request("A maximum of 4 additional images are allowed"));
    }

    let main_image = uploads::store_image(&settings.uploads_dir, &form.main_image)
        .map_err(|err| JsonResponse::<models::Product>::build().bad_request(err.to_string()))?;

    let mut other_images = Vec::with_capacity(form.other_images.len());
    for file in &form.other_images {
        let stored = uploads::store_image(&settings.uploads_dir, file).map_err(|err| {
            JsonResponse::<models::Product>::build().bad_request(err.to_string())
        })?;
        other_images.push(stored);
    }

    let product = models::Product {
        id: 0,
        user_id: user.id,
        title: form.title.into_inner(),
        description: form.description.into_inner(),
        main_image,
        other_images: other_images.join(","),
        category,
        sub_category: form.sub_category.into_inner(),
        address: form.address.map(|text| text.into_inner()),
        contact: form.contact.map(|text| text.into_inner()),
        product_url: form.product_url.map(|text| text.into_inner()),
        status: models::STATUS_PENDING.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::product::insert(pg_pool.get_ref(), product)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .map(|product| {
            JsonResponse::build()
                .set_id(product.id)
                .set_item(product)
                .created("Product submitted for approval")
        })
}
