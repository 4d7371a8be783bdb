mod common;

use reqwest::multipart;

fn business_form(plan_id: i32, billing_cycle: &str) -> multipart::Form {
    multipart::Form::new()
        .text("subscriptionId", plan_id.to_string())
        .text("billingCycle", billing_cycle.to_string())
        .text("businessName", "Acme Widgets")
        .text("businessEmail", "contact@acme.example.com")
        .text("businessPhone", "+1 555 0100")
}

#[tokio::test]
async fn invalid_billing_cycle_leaves_no_row() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Owner", "owner@example.com", "secret123").await;
    let plan_id = app.insert_plan("basic").await;

    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(&token)
        .multipart(business_form(plan_id, "daily"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn unknown_plan_is_a_404() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Owner", "owner@example.com", "secret123").await;

    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(&token)
        .multipart(business_form(999999, "weekly"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn end_date_is_start_plus_one_cycle() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Owner", "owner@example.com", "secret123").await;
    let plan_id = app.insert_plan("basic").await;

    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(&token)
        .multipart(business_form(plan_id, "weekly"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["status"], "pending");

    let start = body["item"]["startDate"].as_str().unwrap();
    let end = body["item"]["endDate"].as_str().unwrap();
    let start = chrono::DateTime::parse_from_rfc3339(start).unwrap();
    let end = chrono::DateTime::parse_from_rfc3339(end).unwrap();
    assert_eq!(end - start, chrono::Duration::weeks(1));
}

#[tokio::test]
async fn approval_promotes_the_owner_to_business() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let owner = app.signup("Owner", "owner@example.com", "secret123").await;
    let admin = app.signup("Admin", "admin@example.com", "secret123").await;
    app.promote_to_admin("admin@example.com").await;
    let plan_id = app.insert_plan("basic").await;

    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(&owner)
        .multipart(business_form(plan_id, "monthly"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let business_id = body["id"].as_i64().unwrap();

    // non-admins may not decide
    let response = app
        .api_client
        .put(format!("{}/api/subscriptions/user/update-status", app.address))
        .bearer_auth(&owner)
        .json(&serde_json::json!({ "businessId": business_id, "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .api_client
        .put(format!("{}/api/subscriptions/user/update-status", app.address))
        .bearer_auth(&admin)
        .json(&serde_json::json!({ "businessId": business_id, "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let role = sqlx::query_scalar::<_, String>("SELECT role FROM users WHERE email = $1")
        .bind("owner@example.com")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(role, "business");
}

#[tokio::test]
async fn rejection_leaves_the_owner_role_untouched() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let owner = app.signup("Owner", "owner@example.com", "secret123").await;
    let admin = app.signup("Admin", "admin@example.com", "secret123").await;
    app.promote_to_admin("admin@example.com").await;
    let plan_id = app.insert_plan("basic").await;

    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(&owner)
        .multipart(business_form(plan_id, "monthly"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let business_id = body["id"].as_i64().unwrap();

    let response = app
        .api_client
        .put(format!("{}/api/subscriptions/user/update-status", app.address))
        .bearer_auth(&admin)
        .json(&serde_json::json!({ "businessId": business_id, "status": "rejected" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["status"], "rejected");

    let role = sqlx::query_scalar::<_, String>("SELECT role FROM users WHERE email = $1")
        .bind("owner@example.com")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(role, "user");
}

#[tokio::test]
async fn public_directory_lists_only_approved() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let owner = app.signup("Owner", "owner@example.com", "secret123").await;
    let plan_id = app.insert_plan("basic").await;

    let response = app
        .api_client
        .post(format!("{}/api/subscriptions/user/create", app.address))
        .bearer_auth(&owner)
        .multipart(business_form(plan_id, "yearly"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let response = app
        .api_client
        .get(format!(
            "{}/api/subscriptions/user/get-active-business",
            app.address
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);

    sqlx::query("UPDATE businesses SET status = 'approved'")
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .api_client
        .get(format!(
            "{}/api/subscriptions/user/get-active-business?name=acme",
            app.address
        ))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 1);
    assert_eq!(body["list"][0]["businessName"], "Acme Widgets");
}
