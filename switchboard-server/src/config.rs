use switchboard_core::IceServerConfig;

/// Настройки сервера, которые не зависят от способа запуска.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// ICE servers advertised to every client in its `welcome` event.
    pub ice_servers: Vec<IceServerConfig>,
}
