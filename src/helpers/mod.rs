pub mod access;
pub(crate) mod json;
pub mod uploads;

pub use json::*;
