use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;

#[derive(Debug, MultipartForm)]
pub struct ServiceForm {
    #[multipart(rename = "businessId")]
    pub business_id: Text<i32>,
    pub title: Text<String>,
    pub description: Text<String>,
    #[multipart(rename = "mainImage", limit = "5MB")]
    pub main_image: TempFile,
    #[multipart(rename = "subImage", limit = "5MB")]
    pub sub_images: Vec<TempFile>,
}

/// Absent fields, including images, keep their stored values.
#[derive(Debug, MultipartForm)]
pub struct ServiceUpdateForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "mainImage", limit = "5MB")]
    pub main_image: Option<TempFile>,
    #[multipart(rename = "subImage", limit = "5MB")]
    pub sub_images: Vec<TempFile>,
}
