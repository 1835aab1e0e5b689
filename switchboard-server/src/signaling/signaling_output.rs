use async_trait::async_trait;
use switchboard_core::{ConnectionId, ServerEvent};

/// Трейт, который должна реализовать внешняя система (WebSocket сервер),
/// чтобы роутер мог отправлять события клиентам.
///
/// Доставка best-effort: если соединения уже нет, событие молча теряется.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Отправить событие конкретному соединению.
    async fn send(&self, connection_id: ConnectionId, event: ServerEvent);

    /// Отправить одно и то же событие явному списку соединений.
    async fn broadcast(&self, targets: &[ConnectionId], event: ServerEvent) {
        for target in targets {
            self.send(*target, event.clone()).await;
        }
    }
}
