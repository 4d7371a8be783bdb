pub mod auth;
pub(crate) mod business;
pub(crate) mod business_review;
pub(crate) mod contact;
pub mod health_checks;
pub(crate) mod product;
pub(crate) mod report;
pub(crate) mod review;
pub(crate) mod service;
pub(crate) mod service_review;
pub(crate) mod subscription;
pub(crate) mod user;

pub use health_checks::*;
