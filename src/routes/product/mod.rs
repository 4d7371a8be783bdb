mod add;
mod get;
mod status;

pub use add::*;
pub use get::*;
pub use status::*;
