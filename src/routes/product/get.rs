use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

const DEFAULT_PAGE_SIZE: i64 = 10;

#[tracing::instrument(name = "List approved products.", skip(pg_pool))]
#[get("/products")]
pub async fn list_handler(
    query: web::Query<forms::ProductListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let query = query.into_inner();
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);
    let offset = (page - 1) * limit;

    let category = query.category.as_deref();
    let sub_category = query.sub_category.as_deref();
    let search = query.search.as_deref();

    let products = db::product::fetch_approved(
        pg_pool.get_ref(),
        category,
        sub_category,
        search,
        limit,
        offset,
    )
    .await
    .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?;

    let total = db::product::count_approved(pg_pool.get_ref(), category, sub_category, search)
        .await
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))?;

    let total_pages = (total + limit - 1) / limit;
    Ok(JsonResponse::build()
        .set_item(serde_json::json!({
            "products": products,
            "total": total,
            "page": page,
            "totalPages": total_pages,
        }))
        .ok("OK"))
}

#[tracing::instrument(name = "Get product detail.", skip(pg_pool))]
#[get("/products/{id}")]
pub async fn item_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::product::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<views::ProductDetail>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<views::ProductDetail>::build().not_found("Product not found"))
        .map(|product| {
            JsonResponse::build()
                .set_item(views::ProductDetail::from(product))
                .ok("OK")
        })
}

#[tracing::instrument(name = "List own products.", skip(user, pg_pool))]
#[get("/user-products")]
pub async fn user_products_handler(
    user: Authenticated,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::product::fetch_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))
        .map(|products| JsonResponse::build().set_list(products).ok("OK"))
}
