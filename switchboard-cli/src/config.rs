use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use switchboard::model::IceServerConfig;
use switchboard::server::ServerConfig;

/// WebRTC signaling relay
#[derive(Parser, Debug, Clone)]
#[command(name = "switchboard", version, about = "WebRTC signaling relay")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "SWITCHBOARD_BIND_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_address: IpAddr,

    /// Emit logs as JSON lines
    #[arg(long, env = "SWITCHBOARD_JSON_LOGS")]
    pub json_logs: bool,

    /// STUN/TURN URL advertised to clients (repeatable or comma separated)
    #[arg(long = "ice-server", env = "SWITCHBOARD_ICE_SERVERS", value_delimiter = ',')]
    pub ice_servers: Vec<String>,

    /// Username for the advertised ICE servers
    #[arg(long, env = "TURN_USERNAME")]
    pub ice_username: Option<String>,

    /// Credential for the advertised ICE servers
    #[arg(long, env = "TURN_CREDENTIAL")]
    pub ice_credential: Option<String>,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn server_config(&self) -> ServerConfig {
        let ice_servers = if self.ice_servers.is_empty() {
            Vec::new()
        } else {
            vec![IceServerConfig {
                urls: self.ice_servers.clone(),
                username: self.ice_username.clone(),
                credential: self.ice_credential.clone(),
            }]
        };

        ServerConfig { ice_servers }
    }
}
