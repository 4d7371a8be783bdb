pub mod business;
pub mod business_review;
pub mod contact;
pub mod product;
pub mod report;
pub mod review;
pub mod service;
pub mod service_review;
pub mod subscription;
pub mod user;
