use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn insert(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database.");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products
            (user_id, title, description, main_image, other_images,
             category, sub_category, address, contact, product_url, status,
             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(product.user_id)
    .bind(&product.title)
    .bind(&product.description)
    .bind(&product.main_image)
    .bind(&product.other_images)
    .bind(&product.category)
    .bind(&product.sub_category)
    .bind(&product.address)
    .bind(&product.contact)
    .bind(&product.product_url)
    .bind(&product.status)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id.");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

const APPROVED_FILTER: &str = r#"
    status = 'approved'
    AND ($1::text IS NULL OR LOWER(category) = LOWER($1))
    AND ($2::text IS NULL OR LOWER(sub_category) = LOWER($2))
    AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%'
         OR description ILIKE '%' || $3 || '%'
         OR product_url ILIKE '%' || $3 || '%')
"#;

pub async fn fetch_approved(
    pool: &PgPool,
    category: Option<&str>,
    sub_category: Option<&str>,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch approved products page.");
    let sql = format!(
        "SELECT * FROM products WHERE {} ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        APPROVED_FILTER
    );
    sqlx::query_as::<_, models::Product>(&sql)
        .bind(category)
        .bind(sub_category)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn count_approved(
    pool: &PgPool,
    category: Option<&str>,
    sub_category: Option<&str>,
    search: Option<&str>,
) -> Result<i64, String> {
    let query_span = tracing::info_span!("Count approved products.");
    let sql = format!("SELECT COUNT(*) FROM products WHERE {}", APPROVED_FILTER);
    sqlx::query_scalar::<_, i64>(&sql)
        .bind(category)
        .bind(sub_category)
        .bind(search)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch products owned by user.");
    sqlx::query_as::<_, models::Product>(
        "SELECT * FROM products WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}

pub async fn update_status(
    pool: &PgPool,
    id: i32,
    status: &str,
) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Updating product status.");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET status = $2, updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}
