mod connection;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use room::RoomMember;
pub use signaling::{ClientEvent, IceServerConfig, ServerEvent};
