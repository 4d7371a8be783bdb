use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::access::{can, Action};
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use crate::views;
use actix_web::{delete, get, post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Create report.", skip(user, form, pg_pool))]
#[post("/create-report")]
pub async fn create_handler(
    user: Authenticated,
    form: web::Json<forms::ReportForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Report>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    db::review::fetch(pg_pool.get_ref(), form.review_id)
        .await
        .map_err(|err| JsonResponse::<models::Report>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Report>::build().not_found("Review not found"))?;

    let report = models::Report {
        id: 0,
        review_id: form.review_id,
        user_id: user.id,
        reason: form.reason,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::report::insert(pg_pool.get_ref(), report)
        .await
        .map_err(|err| JsonResponse::<models::Report>::build().internal_server_error(err))
        .map(|report| {
            JsonResponse::build()
                .set_id(report.id)
                .set_item(report)
                .created("Report submitted")
        })
}

#[tracing::instrument(name = "List reports (admin).", skip(user, pg_pool))]
#[get("/reports")]
pub async fn list_handler(user: Authenticated, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    if !user.is_admin() {
        return Err(JsonResponse::<views::ReportDetail>::build().forbidden("Access denied"));
    }

    db::report::fetch_all_detailed(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::ReportDetail>::build().internal_server_error(err))
        .map(|reports| JsonResponse::build().set_list(reports).ok("OK"))
}

/// Moderation teardown: removing the review cascades to its reports.
#[tracing::instrument(name = "Delete reported review (admin).", skip(user, pg_pool, settings))]
#[delete("/review/{id}")]
pub async fn delete_review_handler(
    user: Authenticated,
    path: web::Path<i32>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let review = db::review::fetch(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Review>::build().not_found("Review not found"))?;

    if !can(&user, Action::Moderate, &review) {
        return Err(JsonResponse::<models::Review>::build().forbidden("Access denied"));
    }

    db::review::delete(pg_pool.get_ref(), review.id)
        .await
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(err))?;

    if let Some(image) = &review.image {
        let _ = uploads::remove_image(&settings.uploads_dir, image);
    }

    Ok(JsonResponse::<models::Review>::build().ok("Review deleted"))
}
