mod common;

#[tokio::test]
async fn health_check_works() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };

    let response = app
        .api_client
        .get(format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
