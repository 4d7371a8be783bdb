mod common;

use reqwest::multipart;

fn product_form(category: &str) -> multipart::Form {
    multipart::Form::new()
        .text("title", "Widget")
        .text("description", "A fine widget")
        .text("category", category.to_string())
        .text("subCategory", "gadgets")
        .part(
            "mainImage",
            multipart::Part::bytes(common::png_bytes())
                .file_name("main.png")
                .mime_str("image/png")
                .unwrap(),
        )
}

#[tokio::test]
async fn product_creation_validates_category() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Seller", "seller@example.com", "secret123").await;

    let response = app
        .api_client
        .post(format!("{}/api/products-create", app.address))
        .bearer_auth(&token)
        .multipart(product_form("not-a-category"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    // case-insensitive match against the fixed enumeration
    let response = app
        .api_client
        .post(format!("{}/api/products-create", app.address))
        .bearer_auth(&token)
        .multipart(product_form("Electronics"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["category"], "electronics");
    assert_eq!(body["item"]["status"], "pending");
}

#[tokio::test]
async fn public_list_shows_only_approved_products() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    app.signup("Seller", "seller@example.com", "secret123").await;
    app.insert_product("seller@example.com", "Hidden", "pending").await;
    app.insert_product("seller@example.com", "Visible", "approved").await;

    let response = app
        .api_client
        .get(format!("{}/api/products", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["total"], 1);
    assert_eq!(body["item"]["products"][0]["title"], "Visible");
}

#[tokio::test]
async fn status_change_is_admin_only() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let seller = app.signup("Seller", "seller@example.com", "secret123").await;
    let admin = app.signup("Admin", "admin@example.com", "secret123").await;
    app.promote_to_admin("admin@example.com").await;

    let product_id = app
        .insert_product("seller@example.com", "Widget", "pending")
        .await;

    let response = app
        .api_client
        .patch(format!("{}/api/products/{}/status", app.address, product_id))
        .bearer_auth(&seller)
        .json(&serde_json::json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .api_client
        .patch(format!("{}/api/products/{}/status", app.address, product_id))
        .bearer_auth(&admin)
        .json(&serde_json::json!({ "status": "archived" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .api_client
        .patch(format!("{}/api/products/{}/status", app.address, product_id))
        .bearer_auth(&admin)
        .json(&serde_json::json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["status"], "approved");

    let response = app
        .api_client
        .patch(format!("{}/api/products/999999/status", app.address))
        .bearer_auth(&admin)
        .json(&serde_json::json!({ "status": "approved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn gallery_uploads_keep_their_order_and_are_capped_at_four() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let token = app.signup("Seller", "seller@example.com", "secret123").await;

    // png first, gif second; the stored extensions reveal the order
    let form = product_form("electronics")
        .part(
            "otherImages",
            multipart::Part::bytes(common::png_bytes())
                .file_name("one.png")
                .mime_str("image/png")
                .unwrap(),
        )
        .part(
            "otherImages",
            multipart::Part::bytes(common::gif_bytes())
                .file_name("two.gif")
                .mime_str("image/gif")
                .unwrap(),
        );
    let response = app
        .api_client
        .post(format!("{}/api/products-create", app.address))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let product_id = body["id"].as_i64().unwrap();

    let response = app
        .api_client
        .get(format!("{}/api/products/{}", app.address, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let gallery = body["item"]["otherImages"].as_array().unwrap();
    assert_eq!(gallery.len(), 2);
    assert!(gallery[0].as_str().unwrap().ends_with(".png"));
    assert!(gallery[1].as_str().unwrap().ends_with(".gif"));

    // a fifth gallery image is one too many
    let mut form = product_form("electronics");
    for i in 0..5 {
        form = form.part(
            "otherImages",
            multipart::Part::bytes(common::png_bytes())
                .file_name(format!("extra-{}.png", i))
                .mime_str("image/png")
                .unwrap(),
        );
    }
    let response = app
        .api_client
        .post(format!("{}/api/products-create", app.address))
        .bearer_auth(&token)
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn detail_explodes_gallery_into_array() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    app.signup("Seller", "seller@example.com", "secret123").await;
    let product_id = app
        .insert_product("seller@example.com", "Widget", "approved")
        .await;
    sqlx::query("UPDATE products SET other_images = '/uploads/a.png,/uploads/b.png' WHERE id = $1")
        .bind(product_id)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .api_client
        .get(format!("{}/api/products/{}", app.address, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["item"]["otherImages"],
        serde_json::json!(["/uploads/a.png", "/uploads/b.png"])
    );

    let response = app
        .api_client
        .get(format!("{}/api/products/999999", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
