pub mod error;
pub mod model;

pub use error::IdParseError;
pub use model::*;
