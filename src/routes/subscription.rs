use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_web::{get, put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "List subscription plans.", skip(pg_pool))]
#[get("/get-all")]
pub async fn list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::subscription::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<models::Subscription>::build().internal_server_error(err))
        .map(|plans| JsonResponse::build().set_list(plans).ok("OK"))
}

#[tracing::instrument(name = "Update subscription plan.", skip(user, form, pg_pool))]
#[put("/update-single-subscription/{id}")]
pub async fn update_handler(
    user: Authenticated,
    path: web::Path<i32>,
    form: web::Json<forms::PlanUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if !user.is_admin() {
        return Err(JsonResponse::<models::Subscription>::build().forbidden("Access denied"));
    }
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Subscription>::build().bad_request(errors.to_string()));
    }

    let mut plan = db::subscription::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Subscription>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<models::Subscription>::build().not_found("Subscription not found")
        })?;

    let form = form.into_inner();
    if let Some(name) = form.name {
        plan.name = name;
    }
    if let Some(description) = form.description {
        plan.description = description;
    }
    if let Some(features) = form.features {
        plan.features = features;
    }
    if let Some(price) = form.price_weekly {
        plan.price_weekly = price;
    }
    if let Some(price) = form.price_monthly {
        plan.price_monthly = price;
    }
    if let Some(price) = form.price_yearly {
        plan.price_yearly = price;
    }
    if let Some(is_active) = form.is_active {
        plan.is_active = is_active;
    }

    db::subscription::update(pg_pool.get_ref(), &plan)
        .await
        .map_err(|err| JsonResponse::<models::Subscription>::build().internal_server_error(err))
        .map(|plan| JsonResponse::build().set_item(plan).ok("Subscription updated"))
}
