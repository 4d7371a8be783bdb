use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use serde::{Deserialize, Serialize};

pub const MAX_OTHER_IMAGES: usize = 4;

#[derive(Debug, MultipartForm)]
pub struct ProductForm {
    #[multipart(rename = "mainImage", limit = "5MB")]
    pub main_image: TempFile,
    #[multipart(rename = "otherImages", limit = "5MB")]
    pub other_images: Vec<TempFile>,
    pub title: Text<String>,
    pub description: Text<String>,
    pub category: Text<String>,
    #[multipart(rename = "subCategory")]
    pub sub_category: Text<String>,
    pub address: Option<Text<String>>,
    pub contact: Option<Text<String>>,
    #[multipart(rename = "productUrl")]
    pub product_url: Option<Text<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProductStatusForm {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
