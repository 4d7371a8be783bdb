mod common;

use ratenest::configuration::get_configuration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn google_sign_in_creates_a_user_and_redirects_with_a_token() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "mock-access-token",
                "token_type": "Bearer",
            })),
        )
        .mount(&provider)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "google-user-1",
                "name": "Grace",
                "email": "grace@example.com",
            })),
        )
        .mount(&provider)
        .await;

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.oauth.google_client_id = "client-1".to_string();
    configuration.oauth.google_client_secret = "secret-1".to_string();
    configuration.oauth.google_auth_url = format!("{}/auth", provider.uri());
    configuration.oauth.google_token_url = format!("{}/token", provider.uri());
    configuration.oauth.google_profile_url = format!("{}/userinfo", provider.uri());

    let app = match common::spawn_app_with_configuration(configuration).await {
        Some(app) => app,
        None => return,
    };

    // the consent redirect points at the configured provider
    let response = app
        .api_client
        .get(format!("{}/auth/google", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 302);
    let location = response.headers()["location"].to_str().unwrap();
    assert!(location.starts_with(&format!("{}/auth?", provider.uri())));
    assert!(location.contains("client_id=client-1"));

    let response = app
        .api_client
        .get(format!("{}/auth/google/callback?code=abc", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 302);
    let location = response.headers()["location"].to_str().unwrap();
    assert!(location.contains("token="));

    let google_id = sqlx::query_scalar::<_, Option<String>>(
        "SELECT google_id FROM users WHERE email = 'grace@example.com'",
    )
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(google_id.as_deref(), Some("google-user-1"));

    // a second sign-in reuses the account
    let response = app
        .api_client
        .get(format!("{}/auth/google/callback?code=def", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 302);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn unknown_provider_is_a_404() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .api_client
        .get(format!("{}/auth/github", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
