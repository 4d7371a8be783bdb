use crate::configuration::Settings;
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::oauth::{OAuthClient, Profile, Provider};
use crate::services::token;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

fn callback_url(settings: &Settings, provider: Provider) -> String {
    format!(
        "http://{}:{}/auth/{}/callback",
        settings.app_host,
        settings.app_port,
        provider.as_str()
    )
}

fn parse_provider(raw: &str) -> Result<Provider, actix_web::Error> {
    raw.parse::<Provider>()
        .map_err(|_| JsonResponse::<()>::build().not_found("Unknown provider"))
}

#[tracing::instrument(name = "OAuth authorize redirect.", skip(settings, oauth))]
#[get("/{provider}")]
pub async fn authorize_handler(
    path: web::Path<String>,
    settings: web::Data<Settings>,
    oauth: web::Data<OAuthClient>,
) -> Result<impl Responder> {
    let provider = parse_provider(&path.into_inner())?;
    let url = oauth.authorize_url(provider, &callback_url(&settings, provider));
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, url))
        .finish())
}

#[derive(Deserialize, Debug)]
pub struct CallbackQuery {
    pub code: String,
}

#[tracing::instrument(name = "OAuth callback.", skip(query, settings, oauth, pg_pool))]
#[get("/{provider}/callback")]
pub async fn callback_handler(
    path: web::Path<String>,
    query: web::Query<CallbackQuery>,
    settings: web::Data<Settings>,
    oauth: web::Data<OAuthClient>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let provider = parse_provider(&path.into_inner())?;

    let profile = oauth
        .exchange(provider, &query.code, &callback_url(&settings, provider))
        .await
        .map_err(|err| {
            tracing::error!("oauth exchange failed: {:?}", err);
            JsonResponse::<()>::build().bad_request("OAuth sign-in failed")
        })?;

    let user = find_or_create(pg_pool.get_ref(), provider, profile).await?;

    let jwt = token::sign_session(user.id, &settings.auth.jwt_secret)
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?;

    Ok(HttpResponse::Found()
        .insert_header((
            header::LOCATION,
            format!("{}?token={}", settings.frontend_url, jwt),
        ))
        .finish())
}

async fn find_or_create(
    pg_pool: &PgPool,
    provider: Provider,
    profile: Profile,
) -> Result<models::User, actix_web::Error> {
    let existing = match provider {
        Provider::Google => db::user::fetch_by_google_id(pg_pool, &profile.provider_id).await,
        Provider::Facebook => db::user::fetch_by_facebook_id(pg_pool, &profile.provider_id).await,
    }
    .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))?;

    if let Some(user) = existing {
        return Ok(user);
    }

    let email = match (provider, profile.email) {
        (_, Some(email)) => email,
        // the Graph API omits the email when the account has none verified
        (Provider::Facebook, None) => format!("{}@facebook.com", profile.provider_id),
        (Provider::Google, None) => {
            return Err(JsonResponse::<()>::build().bad_request("OAuth profile has no email"))
        }
    };

    let mut user = models::User::new(profile.name, email);
    match provider {
        Provider::Google => user.google_id = Some(profile.provider_id),
        Provider::Facebook => user.facebook_id = Some(profile.provider_id),
    }

    db::user::insert(pg_pool, user)
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(err))
}
