use crate::{models, views};
use sqlx::PgPool;
use tracing::Instrument;

fn fetch_error(err: sqlx::Error) -> String {
    tracing::error!("Failed to execute fetch query: {:?}", err);
    "".to_string()
}

pub async fn insert(pool: &PgPool, business: models::Business) -> Result<models::Business, String> {
    let query_span = tracing::info_span!("Saving new business into the database.");
    sqlx::query_as::<_, models::Business>(
        r#"
        INSERT INTO businesses
            (user_id, subscription_id, billing_cycle, start_date, end_date, is_active,
             business_name, business_email, business_phone, business_description,
             business_website_url, category, sub_category, status, main_image,
             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(business.user_id)
    .bind(business.subscription_id)
    .bind(&business.billing_cycle)
    .bind(business.start_date)
    .bind(business.end_date)
    .bind(business.is_active)
    .bind(&business.business_name)
    .bind(&business.business_email)
    .bind(&business.business_phone)
    .bind(&business.business_description)
    .bind(&business.business_website_url)
    .bind(&business.category)
    .bind(&business.sub_category)
    .bind(&business.status)
    .bind(&business.main_image)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Business>, String> {
    let query_span = tracing::info_span!("Fetch business by id.");
    sqlx::query_as::<_, models::Business>("SELECT * FROM businesses WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn fetch_by_user(pool: &PgPool, user_id: i32) -> Result<Option<models::Business>, String> {
    let query_span = tracing::info_span!("Fetch business by owner.");
    sqlx::query_as::<_, models::Business>("SELECT * FROM businesses WHERE user_id = $1 LIMIT 1")
        .bind(user_id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(fetch_error)
}

pub async fn update(pool: &PgPool, business: &models::Business) -> Result<models::Business, String> {
    let query_span = tracing::info_span!("Updating business.");
    sqlx::query_as::<_, models::Business>(
        r#"
        UPDATE businesses
        SET business_name = $2, business_email = $3, business_phone = $4,
            business_description = $5, business_website_url = $6,
            category = $7, sub_category = $8, main_image = $9,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(business.id)
    .bind(&business.business_name)
    .bind(&business.business_email)
    .bind(&business.business_phone)
    .bind(&business.business_description)
    .bind(&business.business_website_url)
    .bind(&business.category)
    .bind(&business.sub_category)
    .bind(&business.main_image)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}

pub async fn update_status(
    pool: &PgPool,
    id: i32,
    status: &str,
) -> Result<Option<models::Business>, String> {
    let query_span = tracing::info_span!("Updating business status.");
    sqlx::query_as::<_, models::Business>(
        r#"
        UPDATE businesses
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

/// Approves the business and promotes its owner to the business role.
/// Both writes land in one transaction; neither survives without the other.
pub async fn approve(pool: &PgPool, id: i32) -> Result<Option<models::Business>, String> {
    let query_span = tracing::info_span!("Approving business and promoting owner.");
    async move {
        let mut tx = pool.begin().await?;

        let business = sqlx::query_as::<_, models::Business>(
            r#"
            UPDATE businesses
            SET status = 'approved', updated_at = NOW() at time zone 'utc'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(business) = &business {
            sqlx::query(
                "UPDATE users SET role = $2, updated_at = NOW() at time zone 'utc' WHERE id = $1",
            )
            .bind(business.user_id)
            .bind(models::ROLE_BUSINESS)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(business)
    }
    .instrument(query_span)
    .await
    .map_err(|e: sqlx::Error| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to update".to_string()
    })
}

pub async fn fetch_all_detailed(pool: &PgPool) -> Result<Vec<views::BusinessDetail>, String> {
    let query_span = tracing::info_span!("Fetch all businesses with owner and plan.");
    sqlx::query_as::<_, views::BusinessDetail>(
        r#"
        SELECT b.*,
               u.id AS owner_id, u.name AS owner_name, u.email AS owner_email,
               u.role AS owner_role,
               s.id AS plan_id, s.name AS plan_name
        FROM businesses b
        JOIN users u ON u.id = b.user_id
        JOIN subscriptions s ON s.id = b.subscription_id
        ORDER BY b.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}

pub async fn fetch_approved(
    pool: &PgPool,
    name: Option<&str>,
    category: Option<&str>,
    sub_category: Option<&str>,
) -> Result<Vec<models::Business>, String> {
    let query_span = tracing::info_span!("Fetch approved businesses.");
    sqlx::query_as::<_, models::Business>(
        r#"
        SELECT * FROM businesses
        WHERE status = 'approved'
          AND ($1::text IS NULL OR business_name ILIKE '%' || $1 || '%')
          AND ($2::text IS NULL OR LOWER(category) = LOWER($2))
          AND ($3::text IS NULL OR LOWER(sub_category) = LOWER($3))
        ORDER BY created_at DESC
        "#,
    )
    .bind(name)
    .bind(category)
    .bind(sub_category)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(fetch_error)
}
