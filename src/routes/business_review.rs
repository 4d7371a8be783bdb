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

#[tracing::instrument(name = "Create business review.", skip(user, form, pg_pool))]
#[post("/create")]
pub async fn create_handler(
    user: Authenticated,
    form: web::Json<forms::BusinessReviewForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(
            JsonResponse::<models::BusinessReview>::build().bad_request(errors.to_string())
        );
    }

    let form = form.into_inner();
    db::business::fetch(pg_pool.get_ref(), form.business_id)
        .await
        .map_err(|err| JsonResponse::<models::BusinessReview>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<models::BusinessReview>::build().not_found("Business not found")
        })?;

    let review = models::BusinessReview {
        id: 0,
        user_id: user.id,
        business_id: form.business_id,
        description: Some(form.description),
        rating: form.rating,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::business_review::insert(pg_pool.get_ref(), review)
        .await
        .map_err(|err| JsonResponse::<models::BusinessReview>::build().internal_server_error(err))
        .map(|review| {
            JsonResponse::build()
                .set_id(review.id)
                .set_item(review)
                .created("Review created")
        })
}

#[tracing::instrument(name = "List business reviews.", skip(pg_pool))]
#[get("/business/{businessId}")]
pub async fn list_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let reviews = db::business_review::fetch_by_business_detailed(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| {
            JsonResponse::<views::BusinessReviewDetail>::build().internal_server_error(err)
        })?;

    if reviews.is_empty() {
        return Err(JsonResponse::<views::BusinessReviewDetail>::build()
            .not_found("No reviews found for this business"));
    }

    Ok(JsonResponse::build().set_list(reviews).ok("OK"))
}

#[tracing::instrument(name = "Business rating stats.", skip(pg_pool))]
#[get("/business/{businessId}/stats")]
pub async fn stats_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let stats = db::business_review::rating(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<views::BusinessRating>::build().internal_server_error(err))?;

    if stats.number_of_users == 0 {
        return Err(JsonResponse::<views::BusinessRating>::build()
            .not_found("No reviews found for this business"));
    }

    Ok(JsonResponse::build().set_item(stats).ok("OK"))
}
