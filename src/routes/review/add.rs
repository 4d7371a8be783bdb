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

#[tracing::instrument(name = "Write review.", skip(user, form, pg_pool, settings))]
#[post("/writeReview")]
pub async fn write_handler(
    user: Authenticated,
    form: MultipartForm<forms::ReviewForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    let rating = form.rating.into_inner();
    if !(1..=5).contains(&rating) {
        return Err(JsonResponse::<models::Review>::build()
            .bad_request("Rating must be between 1 and 5"));
    }

    let product_id = form.product_id.into_inner();
    db::product::fetch(pg_pool.get_ref(), product_id)
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Review>::build().not_found("Product not found"))?;

    let image = match &form.image {
        Some(file) => Some(
            uploads::store_image(&settings.uploads_dir, file).map_err(|err| {
                JsonResponse::<models::Review>::build().bad_request(err.to_string())
            })?,
        ),
        None => None,
    };

    let review = models::Review {
        id: 0,
        user_id: user.id,
        product_id,
        title: form.title.into_inner(),
        description: form.description.into_inner(),
        image,
        rating,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::review::insert(pg_pool.get_ref(), review)
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))
        .map(|review| {
            JsonResponse::build()
                .set_id(review.id)
                .set_item(review)
                .created("Review created")
        })
}
