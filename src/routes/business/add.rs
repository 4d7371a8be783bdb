use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use sqlx::PgPool;

#[tracing::instrument(name = "Create business.", skip(user, form, pg_pool, settings))]
#[post("/create")]
pub async fn create_handler(
    user: Authenticated,
    form: MultipartForm<forms::BusinessCreateForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    let plan = db::subscription::fetch(pg_pool.get_ref(), form.subscription_id.into_inner())
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<models::Business>::build().not_found("Subscription plan not found")
        })?;

    // reject before anything is stored; no row and no file may remain
    let billing_cycle: models::BillingCycle =
        form.billing_cycle.into_inner().parse().map_err(|err: String| {
            JsonResponse::<models::Business>::build().bad_request(err)
        })?;

    let main_image = match &form.main_image {
        Some(file) => Some(
            uploads::store_image(&settings.uploads_dir, file).map_err(|err| {
                JsonResponse::<models::Business>::build().bad_request(err.to_string())
            })?,
        ),
        None => None,
    };

    let start_date = Utc::now();
    let business = models::Business {
        id: 0,
        user_id: user.id,
        subscription_id: plan.id,
        billing_cycle: billing_cycle.as_str().to_string(),
        start_date,
        end_date: billing_cycle.period_end(start_date),
        is_active: true,
        business_name: form.business_name.into_inner(),
        business_email: form.business_email.into_inner(),
        business_phone: form.business_phone.into_inner(),
        business_description: form.business_description.map(|text| text.into_inner()),
        business_website_url: form.business_website_url.map(|text| text.into_inner()),
        category: form.category.map(|text| text.into_inner()),
        sub_category: form.sub_category.map(|text| text.into_inner()),
        status: models::STATUS_PENDING.to_string(),
        main_image,
        created_at: start_date,
        updated_at: start_date,
    };

    db::business::insert(pg_pool.get_ref(), business)
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))
        .map(|business| {
            JsonResponse::build()
                .set_id(business.id)
                .set_item(business)
                .created("Business submitted for approval")
        })
}
