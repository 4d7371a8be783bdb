use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::access::{can, Action};
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_multipart::form::MultipartForm;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Update review.", skip(user, form, pg_pool, settings))]
#[put("/updateReview/{id}")]
pub async fn update_handler(
    user: Authenticated,
    path: web::Path<i32>,
    form: MultipartForm<forms::ReviewUpdateForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let mut review = db::review::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Review>::build().not_found("Review not found"))?;

    if !can(&user, Action::Edit, &review) {
        return Err(JsonResponse::<models::Review>::build().forbidden("Access denied"));
    }

    let form = form.into_inner();

    if let Some(rating) = &form.rating {
        let rating = **rating;
        if !(1..=5).contains(&rating) {
            return Err(JsonResponse::<models::Review>::build()
                .bad_request("Rating must be between 1 and 5"));
        }
        review.rating = rating;
    }
    if let Some(title) = form.title {
        review.title = title.into_inner();
    }
    if let Some(description) = form.description {
        review.description = description.into_inner();
    }

    if let Some(file) = &form.image {
        let stored = uploads::store_image(&settings.uploads_dir, file)
            .map_err(|err| JsonResponse::<models::Review>::build().bad_request(err.to_string()))?;
        if let Some(old) = review.image.replace(stored) {
            let _ = uploads::remove_image(&settings.uploads_dir, &old);
        }
    }

    db::review::update(pg_pool.get_ref(), &review)
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))
        .map(|review| JsonResponse::build().set_item(review).ok("Review updated"))
}
