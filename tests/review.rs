mod common;

use reqwest::multipart;

fn review_form(product_id: i32, rating: i32) -> multipart::Form {
    multipart::Form::new()
        .text("productId", product_id.to_string())
        .text("title", "Great widget")
        .text("description", "Works as advertised")
        .text("rating", rating.to_string())
}

#[tokio::test]
async fn rating_must_be_between_one_and_five() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Rita", "rita@example.com", "secret123").await;
    let product_id = app
        .insert_product("rita@example.com", "Widget", "approved")
        .await;

    for rating in [0, 6] {
        let response = app
            .api_client
            .post(format!("{}/api/reviews/writeReview", app.address))
            .bearer_auth(&token)
            .multipart(review_form(product_id, rating))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
    }

    let response = app
        .api_client
        .post(format!("{}/api/reviews/writeReview", app.address))
        .bearer_auth(&token)
        .multipart(review_form(product_id, 5))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn only_the_owner_may_edit_or_delete() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let owner = app.signup("Owner", "owner@example.com", "secret123").await;
    let other = app.signup("Other", "other@example.com", "secret123").await;
    let product_id = app
        .insert_product("owner@example.com", "Widget", "approved")
        .await;

    let response = app
        .api_client
        .post(format!("{}/api/reviews/writeReview", app.address))
        .bearer_auth(&owner)
        .multipart(review_form(product_id, 4))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let review_id = body["id"].as_i64().unwrap();

    let response = app
        .api_client
        .put(format!("{}/api/reviews/updateReview/{}", app.address, review_id))
        .bearer_auth(&other)
        .multipart(multipart::Form::new().text("title", "hijacked"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .api_client
        .delete(format!("{}/api/reviews/deleteReview/{}", app.address, review_id))
        .bearer_auth(&other)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .api_client
        .put(format!("{}/api/reviews/updateReview/{}", app.address, review_id))
        .bearer_auth(&owner)
        .multipart(multipart::Form::new().text("title", "Updated title"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["title"], "Updated title");
    // untouched fields keep their values
    assert_eq!(body["item"]["rating"], 4);

    let response = app
        .api_client
        .delete(format!("{}/api/reviews/deleteReview/{}", app.address, review_id))
        .bearer_auth(&owner)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn product_rating_is_the_arithmetic_mean() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let alice = app.signup("Alice", "alice@example.com", "secret123").await;
    let bob = app.signup("Bob", "bob@example.com", "secret123").await;
    let product_id = app
        .insert_product("alice@example.com", "Widget", "approved")
        .await;

    for (token, rating) in [(&alice, 4), (&bob, 5)] {
        let response = app
            .api_client
            .post(format!("{}/api/reviews/writeReview", app.address))
            .bearer_auth(token)
            .multipart(review_form(product_id, rating))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = app
        .api_client
        .get(format!("{}/api/reviews/productRating/{}", app.address, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["averageRating"], 4.5);
    assert_eq!(body["item"]["numberOfReviews"], 2);

    // no reviews: 404 with a zero-valued aggregate
    let empty_product = app
        .insert_product("alice@example.com", "Unrated", "approved")
        .await;
    let response = app
        .api_client
        .get(format!("{}/api/reviews/productRating/{}", app.address, empty_product))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["numberOfReviews"], 0);
}

#[tokio::test]
async fn all_reviews_carry_user_and_product() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Alice", "alice@example.com", "secret123").await;
    let product_id = app
        .insert_product("alice@example.com", "Widget", "approved")
        .await;

    let response = app
        .api_client
        .post(format!("{}/api/reviews/writeReview", app.address))
        .bearer_auth(&token)
        .multipart(review_form(product_id, 3))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let response = app
        .api_client
        .get(format!("{}/api/reviews/allReviews", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let review = &body["list"][0];
    assert_eq!(review["user"]["email"], "alice@example.com");
    assert_eq!(review["product"]["title"], "Widget");
}
