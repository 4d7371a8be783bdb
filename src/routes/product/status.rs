use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_web::{patch, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Update product status.", skip(user, form, pg_pool))]
#[patch("/products/{id}/status")]
pub async fn update_status_handler(
    user: Authenticated,
    path: web::Path<i32>,
    form: web::Json<forms::ProductStatusForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if !user.is_admin() {
        return Err(JsonResponse::<models::Product>::build().forbidden("Access denied"));
    }

    if !models::is_valid_status(&form.status) {
        return Err(JsonResponse::<models::Product>::build().bad_request("Invalid status"));
    }

    db::product::update_status(pg_pool.get_ref(), path.into_inner(), &form.status)
        .await
        .map_err(|err| JsonResponse::<models::Product>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Product>::build().not_found("Product not found"))
        .map(|product| JsonResponse::build().set_item(product).ok("Status updated"))
}
