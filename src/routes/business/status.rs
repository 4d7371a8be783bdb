use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use crate::services::Mailer;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Update business status.", skip(user, form, pg_pool, mailer))]
#[put("/update-status")]
pub async fn update_status_handler(
    user: Authenticated,
    form: web::Json<forms::BusinessStatusForm>,
    pg_pool: web::Data<PgPool>,
    mailer: web::Data<Mailer>,
) -> Result<impl Responder> {
    if !user.is_admin() {
        return Err(JsonResponse::<models::Business>::build().forbidden("Access denied"));
    }

    if !models::is_valid_status(&form.status) {
        return Err(JsonResponse::<models::Business>::build().bad_request("Invalid status"));
    }

    // approval also promotes the owner; both writes share one transaction
    let business = if form.status == models::STATUS_APPROVED {
        db::business::approve(pg_pool.get_ref(), form.business_id).await
    } else {
        db::business::update_status(pg_pool.get_ref(), form.business_id, &form.status).await
    }
    .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
    .ok_or_else(|| JsonResponse::<models::Business>::build().not_found("Business not found"))?;

    // notify the owner; a failed send never rolls the decision back
    let owner = db::user::fetch(pg_pool.get_ref(), business.user_id)
        .await
        .unwrap_or(None);
    if let Some(owner) = owner {
        let mailer = mailer.get_ref().clone();
        let business_name = business.business_name.clone();
        let status = business.status.clone();
        tokio::spawn(async move {
            mailer
                .send_business_status(&owner.email, &business_name, &status)
                .await;
        });
    }

    Ok(JsonResponse::build().set_item(business).ok("Status updated"))
}
