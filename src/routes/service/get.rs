use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List all services.", skip(pg_pool))]
#[get("/")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::service::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))
        .map(|services| JsonResponse::build().set_list(services).ok("OK"))
}

#[tracing::instrument(name = "List services of business.", skip(pg_pool))]
#[get("/business/{businessId}")]
pub async fn by_business_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let services = db::service::fetch_by_business(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))?;

    if services.is_empty() {
        return Err(JsonResponse::<models::Service>::build()
            .not_found("No services found for this business"));
    }

    Ok(JsonResponse::build().set_list(services).ok("OK"))
}

#[tracing::instrument(name = "Get service detail.", skip(pg_pool))]
#[get("/service/{serviceId}")]
pub async fn item_handler(
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::service::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Service>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Service>::build().not_found("Service not found"))
        .map(|service| JsonResponse::build().set_item(service).ok("OK"))
}
