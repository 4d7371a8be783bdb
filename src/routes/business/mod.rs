mod add;
mod edit;
mod get;
mod status;

pub use add::*;
pub use edit::*;
pub use get::*;
pub use status::*;
