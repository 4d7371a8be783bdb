mod auth;
mod business;
mod business_review;
mod contact;
mod product;
mod report;
mod review;
mod service;
mod service_review;
mod subscription;
mod user;

pub use auth::*;
pub use business::*;
pub use business_review::*;
pub use contact::*;
pub use product::*;
pub use report::*;
pub use review::*;
pub use service::*;
pub use service_review::*;
pub use subscription::*;
pub use user::*;
