use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Create service review.", skip(user, form, pg_pool))]
#[post("/services/create")]
pub async fn create_handler(
    user: Authenticated,
    form: web::Json<forms::ServiceReviewForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::ServiceReview>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    db::service::fetch(pg_pool.get_ref(), form.service_id)
        .await
        .map_err(|err| JsonResponse::<models::ServiceReview>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<models::ServiceReview>::build().not_found("Service not found")
        })?;

    let review = models::ServiceReview {
        id: 0,
        user_id: user.id,
        service_id: form.service_id,
        title: form.title,
        description: form.description,
        rating: form.rating,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::service_review::insert(pg_pool.get_ref(), review)
        .await
        .map_err(|err| JsonResponse::<models::ServiceReview>::build().internal_server_error(err))
        .map(|review| {
            JsonResponse::build()
                .set_id(review.id)
                .set_item(review)
                .created("Review created")
        })
}

#[tracing::instrument(name = "List service reviews.", skip(pg_pool))]
#[get("/service/{serviceId}")]
pub async fn list_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::service_review::fetch_by_service_detailed(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| {
            JsonResponse::<views::ServiceReviewDetail>::build().internal_server_error(err)
        })
        .map(|reviews| JsonResponse::build().set_list(reviews).ok("OK"))
}
