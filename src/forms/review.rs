use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;

#[derive(Debug, MultipartForm)]
pub struct ReviewForm {
    #[multipart(rename = "productId")]
    pub product_id: Text<i32>,
    pub title: Text<String>,
    pub description: Text<String>,
    pub rating: Text<i32>,
    #[multipart(limit = "5MB")]
    pub image: Option<TempFile>,
}

/// Every field optional; whatever is absent keeps its stored value.
#[derive(Debug, MultipartForm)]
pub struct ReviewUpdateForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub rating: Option<Text<i32>>,
    #[multipart(limit = "5MB")]
    pub image: Option<TempFile>,
}
