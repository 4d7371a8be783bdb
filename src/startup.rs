use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use crate::services::{Mailer, OAuthClient};
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let uploads_dir = settings.uploads_dir.clone();
    std::fs::create_dir_all(&uploads_dir)?;

    let mailer = web::Data::new(Mailer::new(&settings.smtp));
    let oauth_client = web::Data::new(OAuthClient::new(settings.oauth.clone()));
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(
                web::scope("/auth")
                    .service(routes::auth::signup_handler)
                    .service(routes::auth::login_handler)
                    .service(routes::auth::forgot_password_handler)
                    .service(routes::auth::reset_password_handler)
                    .service(routes::auth::authorize_handler)
                    .service(routes::auth::callback_handler),
            )
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/me")
                            .service(routes::user::me_handler)
                            .service(routes::user::update_profile_handler),
                    )
                    .service(
                        web::scope("/reviews")
                            .service(routes::review::write_handler)
                            .service(routes::review::update_handler)
                            .service(routes::review::delete_handler)
                            .service(routes::review::list_handler)
                            .service(routes::review::mine_handler)
                            .service(routes::review::product_rating_handler)
                            .service(routes::business_review::create_handler)
                            .service(routes::business_review::stats_handler)
                            .service(routes::business_review::list_handler)
                            .service(routes::service_review::create_handler)
                            .service(routes::service_review::list_handler),
                    )
                    .service(
                        web::scope("/subscriptions")
                            .service(routes::subscription::list_handler)
                            .service(routes::subscription::update_handler)
                            .service(
                                web::scope("/user")
                                    .service(routes::business::create_handler)
                                    .service(routes::business::list_all_handler)
                                    .service(routes::business::list_approved_handler)
                                    .service(routes::business::mine_handler)
                                    .service(routes::business::item_handler)
                                    .service(routes::business::update_handler)
                                    .service(routes::business::update_status_handler),
                            ),
                    )
                    .service(
                        web::scope("/services")
                            .service(routes::service::create_handler)
                            .service(routes::service::by_business_handler)
                            .service(routes::service::item_handler)
                            .service(routes::service::list_handler)
                            .service(routes::service::update_handler)
                            .service(routes::service::delete_handler),
                    )
                    .service(routes::product::create_handler)
                    .service(routes::product::list_handler)
                    .service(routes::product::user_products_handler)
                    .service(routes::product::update_status_handler)
                    .service(routes::product::item_handler)
                    .service(routes::report::create_handler)
                    .service(routes::report::list_handler)
                    .service(routes::report::delete_review_handler)
                    .service(routes::contact::create_handler),
            )
            .service(actix_files::Files::new("/uploads", uploads_dir.clone()))
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(mailer.clone())
            .app_data(oauth_client.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
