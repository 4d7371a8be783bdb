mod common;

use reqwest::multipart;

async fn create_business(app: &common::TestApp, token: &str) -> i64 {
    let plan_id = app.insert_plan("basic").await;
    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(token)
        .multipart(
            multipart::Form::new()
                .text("subscriptionId", plan_id.to_string())
                .text("billingCycle", "monthly")
                .text("businessName", "Acme Widgets")
                .text("businessEmail", "contact@acme.example.com")
                .text("businessPhone", "+1 555 0100"),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    body["id"].as_i64().unwrap()
}

fn service_form(business_id: i64) -> multipart::Form {
    multipart::Form::new()
        .text("businessId", business_id.to_string())
        .text("title", "Gadget repair")
        .text("description", "We fix gadgets")
        .part(
            "mainImage",
            multipart::Part::bytes(common::png_bytes())
                .file_name("main.png")
                .mime_str("image/png")
                .unwrap(),
        )
}

#[tokio::test]
async fn services_require_an_existing_business() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Owner", "owner@example.com", "secret123").await;

    let response = app
        .api_client
        .post(format!("{}/api/services/create", app.address))
        .bearer_auth(&token)
        .multipart(service_form(999999))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let business_id = create_business(&app, &token).await;
    let response = app
        .api_client
        .post(format!("{}/api/services/create", app.address))
        .bearer_auth(&token)
        .multipart(service_form(business_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let service_id = body["id"].as_i64().unwrap();

    let response = app
        .api_client
        .get(format!("{}/api/services/service/{}", app.address, service_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .api_client
        .get(format!("{}/api/services/business/{}", app.address, business_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 1);

    // a business with no services is a 404, not an empty list
    let response = app
        .api_client
        .get(format!("{}/api/services/business/999999", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn service_update_keeps_absent_images() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Owner", "owner@example.com", "secret123").await;
    let business_id = create_business(&app, &token).await;

    let response = app
        .api_client
        .post(format!("{}/api/services/create", app.address))
        .bearer_auth(&token)
        .multipart(service_form(business_id))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let service_id = body["id"].as_i64().unwrap();
    let original_image = body["item"]["mainImage"].as_str().unwrap().to_string();

    let response = app
        .api_client
        .put(format!("{}/api/services/{}", app.address, service_id))
        .bearer_auth(&token)
        .multipart(multipart::Form::new().text("title", "Gadget repair deluxe"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["title"], "Gadget repair deluxe");
    assert_eq!(body["item"]["mainImage"], original_image.as_str());
}

#[tokio::test]
async fn business_reviews_and_stats() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let owner = app.signup("Owner", "owner@example.com", "secret123").await;
    let alice = app.signup("Alice", "alice@example.com", "secret123").await;
    let bob = app.signup("Bob", "bob@example.com", "secret123").await;
    let business_id = create_business(&app, &owner).await;

    // before any review both endpoints are 404
    let response = app
        .api_client
        .get(format!("{}/api/reviews/business/{}", app.address, business_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    for (token, rating) in [(&alice, 5), (&bob, 2)] {
        let response = app
            .api_client
            .post(format!("{}/api/reviews/create", app.address))
            .bearer_auth(token)
            .json(&serde_json::json!({
                "businessId": business_id,
                "description": "good enough",
                "rating": rating,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = app
        .api_client
        .post(format!("{}/api/reviews/create", app.address))
        .bearer_auth(&alice)
        .json(&serde_json::json!({
            "businessId": business_id,
            "description": "way too good",
            "rating": 9,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .api_client
        .get(format!(
            "{}/api/reviews/business/{}/stats",
            app.address, business_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["averageRating"], 3.5);
    assert_eq!(body["item"]["numberOfUsers"], 2);
}

#[tokio::test]
async fn service_reviews_carry_the_reviewer() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let owner = app.signup("Owner", "owner@example.com", "secret123").await;
    let business_id = create_business(&app, &owner).await;

    let response = app
        .api_client
        .post(format!("{}/api/services/create", app.address))
        .bearer_auth(&owner)
        .multipart(service_form(business_id))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let service_id = body["id"].as_i64().unwrap();

    let response = app
        .api_client
        .post(format!("{}/api/reviews/services/create", app.address))
        .bearer_auth(&owner)
        .json(&serde_json::json!({
            "serviceId": service_id,
            "title": "Fast",
            "description": "Fixed in a day",
            "rating": 5,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let response = app
        .api_client
        .get(format!("{}/api/reviews/service/{}", app.address, service_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"][0]["user"]["name"], "Owner");
}
