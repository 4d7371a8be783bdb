use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List all reviews.", skip(pg_pool))]
#[get("/allReviews")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::review::fetch_all_detailed(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::ReviewDetail>::build().internal_server_error(err))
        .map(|reviews| JsonResponse::build().set_list(reviews).ok("OK"))
}

#[tracing::instrument(name = "List own reviews.", skip(user, pg_pool))]
#[get("/myReviews")]
pub async fn mine_handler(user: Authenticated, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::review::fetch_by_user_detailed(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<views::ReviewDetail>::build().internal_server_error(err))
        .map(|reviews| JsonResponse::build().set_list(reviews).ok("OK"))
}

#[tracing::instrument(name = "Product rating.", skip(pg_pool))]
#[get("/productRating/{productId}")]
pub async fn product_rating_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let rating = db::review::product_rating(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<views::ProductRating>::build().internal_server_error(err))?;

    if rating.number_of_reviews == 0 {
        // 404 still carries the zero-valued aggregate
        return Err(JsonResponse::build()
            .set_item(rating)
            .not_found("No reviews found for this product"));
    }

    Ok(JsonResponse::build().set_item(rating).ok("OK"))
}
