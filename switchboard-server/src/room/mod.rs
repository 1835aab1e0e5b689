mod room_registry;
mod user_record;

pub use room_registry::*;
pub use user_record::*;
