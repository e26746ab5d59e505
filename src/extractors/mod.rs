mod json;
mod path;
mod query;
mod user_id;

pub use json::*;
pub use path::*;
pub use query::*;
pub use user_id::*;
