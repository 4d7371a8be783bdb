use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::{uploads, JsonResponse};
use crate::middleware::authentication::Authenticated;
use crate::models;
use actix_multipart::form::MultipartForm;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Update own business.", skip(user, form, pg_pool, settings))]
#[put("/update-business")]
pub async fn update_handler(
    user: Authenticated,
    form: MultipartForm<forms::BusinessUpdateForm>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let mut business = db::business::fetch_by_user(pg_pool.get_ref(), user.id)
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Business>::build().not_found("Business not found"))?;

    let form = form.into_inner();

    if let Some(name) = form.business_name {
        business.business_name = name.into_inner();
    }
    if let Some(email) = form.business_email {
        business.business_email = email.into_inner();
    }
    if let Some(phone) = form.business_phone {
        business.business_phone = phone.into_inner();
    }
    if let Some(description) = form.business_description {
        business.business_description = Some(description.into_inner());
    }
    if let Some(url) = form.business_website_url {
        business.business_website_url = Some(url.into_inner());
    }
    if let Some(category) = form.category {
        business.category = Some(category.into_inner());
    }
    if let Some(sub_category) = form.sub_category {
        business.sub_category = Some(sub_category.into_inner());
    }

    if let Some(file) = &form.main_image {
        let stored = uploads::store_image(&settings.uploads_dir, file).map_err(|err| {
            JsonResponse::<models::Business>::build().bad_request(err.to_string())
        })?;
        if let Some(old) = business.main_image.replace(stored) {
            let _ = uploads::remove_image(&settings.uploads_dir, &old);
        }
    }

    db::business::update(pg_pool.get_ref(), &business)
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))
        .map(|business| JsonResponse::build().set_item(business).ok("Business updated"))
}
