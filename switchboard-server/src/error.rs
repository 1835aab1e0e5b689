use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),
}
