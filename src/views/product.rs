use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

/// Detail payload: the stored comma-joined gallery becomes a real array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub main_image: String,
    pub other_images: Vec<String>,
    pub category: String,
    pub sub_category: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub product_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Product> for ProductDetail {
    fn from(product: models::Product) -> Self {
        let other_images = product.other_images_vec();
        Self {
            id: product.id,
            user_id: product.user_id,
            title: product.title,
            description: product.description,
            main_image: product.main_image,
            other_images,
            category: product.category,
            sub_category: product.sub_category,
            address: product.address,
            contact: product.contact,
            product_url: product.product_url,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
