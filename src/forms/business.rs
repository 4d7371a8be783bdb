use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use serde::{Deserialize, Serialize};

#[derive(Debug, MultipartForm)]
pub struct BusinessCreateForm {
    #[multipart(rename = "subscriptionId")]
    pub subscription_id: Text<i32>,
    #[multipart(rename = "billingCycle")]
    pub billing_cycle: Text<String>,
    #[multipart(rename = "businessName")]
    pub business_name: Text<String>,
    #[multipart(rename = "businessEmail")]
    pub business_email: Text<String>,
    #[multipart(rename = "businessPhone")]
    pub business_phone: Text<String>,
    #[multipart(rename = "businessDescription")]
    pub business_description: Option<Text<String>>,
    #[multipart(rename = "businessWebsiteUrl")]
    pub business_website_url: Option<Text<String>>,
    pub category: Option<Text<String>>,
    #[multipart(rename = "subCategory")]
    pub sub_category: Option<Text<String>>,
    #[multipart(rename = "mainImage", limit = "5MB")]
    pub main_image: Option<TempFile>,
}

#[derive(Debug, MultipartForm)]
pub struct BusinessUpdateForm {
    #[multipart(rename = "businessName")]
    pub business_name: Option<Text<String>>,
    #[multipart(rename = "businessEmail")]
    pub business_email: Option<Text<String>>,
    #[multipart(rename = "businessPhone")]
    pub business_phone: Option<Text<String>>,
    #[multipart(rename = "businessDescription")]
    pub business_description: Option<Text<String>>,
    #[multipart(rename = "businessWebsiteUrl")]
    pub business_website_url: Option<Text<String>>,
    pub category: Option<Text<String>>,
    #[multipart(rename = "subCategory")]
    pub sub_category: Option<Text<String>>,
    #[multipart(rename = "mainImage", limit = "5MB")]
    pub main_image: Option<TempFile>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStatusForm {
    pub business_id: i32,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BusinessListQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}
