use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get own business.", skip(user, pg_pool))]
#[get("/get-business")]
pub async fn mine_handler(user: Authenticated, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::business::fetch_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Business>::build().not_found("Business not found"))
        .map(|business| JsonResponse::build().set_item(business).ok("OK"))
}

#[tracing::instrument(name = "List all businesses (admin).", skip(user, pg_pool))]
#[get("/get-all-businesses")]
pub async fn list_all_handler(
    user: Authenticated,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if !user.is_admin() {
        return Err(JsonResponse::<views::BusinessDetail>::build().forbidden("Access denied"));
    }

    db::business::fetch_all_detailed(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::BusinessDetail>::build().internal_server_error(err))
        .map(|businesses| JsonResponse::build().set_list(businesses).ok("OK"))
}

#[tracing::instrument(name = "List approved businesses.", skip(pg_pool))]
#[get("/get-active-business")]
pub async fn list_approved_handler(
    query: web::Query<forms::BusinessListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let query = query.into_inner();
    db::business::fetch_approved(
        pg_pool.get_ref(),
        query.name.as_deref(),
        query.category.as_deref(),
        query.subcategory.as_deref(),
    )
    .await
    .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))
    .map(|businesses| JsonResponse::build().set_list(businesses).ok("OK"))
}

#[tracing::instrument(name = "Get business detail.", skip(pg_pool))]
#[get("/get-business/{businessId}")]
pub async fn item_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::business::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Business>::build().not_found("Business not found"))
        .map(|business| JsonResponse::build().set_item(business).ok("OK"))
}
