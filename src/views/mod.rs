pub mod business;
pub mod business_review;
pub mod product;
pub mod report;
pub mod review;
pub mod service_review;

pub use business::*;
pub use business_review::*;
pub use product::*;
pub use report::*;
pub use review::*;
pub use service_review::*;
