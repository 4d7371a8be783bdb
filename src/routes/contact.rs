use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Create contact message.", skip(form, pg_pool))]
#[post("/create/contact-messages")]
pub async fn create_handler(
    form: web::Json<forms::ContactForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::ContactMessage>::build().bad_request(errors.to_string()));
    }

    let form = form.into_inner();
    let message = models::ContactMessage {
        id: 0,
        name: form.name,
        email: form.email,
        message: form.message,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::contact::insert(pg_pool.get_ref(), message)
        .await
        .map_err(|err| JsonResponse::<models::ContactMessage>::build().internal_server_error(err))
        .map(|message| {
            JsonResponse::build()
                .set_id(message.id)
                .set_item(message)
                .created("Message sent")
        })
}
