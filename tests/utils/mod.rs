pub mod fixtures;
pub mod macros;
pub mod prelude;
mod request;
mod response;
mod setup;

pub use setup::App;
