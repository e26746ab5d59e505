mod media;
mod orm;
mod pagination;
pub mod panic;
mod signal;

pub use media::*;
pub use orm::*;
pub use pagination::*;
pub use signal::*;
