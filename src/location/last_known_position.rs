use crate::domain::Position;
use tokio::sync::RwLock;
use tracing::debug;

/// The most recent position successfully retrieved from the location API.
///
/// The whole position is replaced under a single write lock, so readers never see the latitude of one update
/// paired with the longitude of another.
#[derive(Debug, Default)]
pub struct LastKnownPosition {
    position: RwLock<Option<Position>>,
}

impl LastKnownPosition {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_position(position: Position) -> Self {
        LastKnownPosition {
            position: RwLock::new(Some(position)),
        }
    }

    pub async fn get(&self) -> Option<Position> {
        *self.position.read().await
    }

    pub async fn set(&self, position: Position) {
        let mut write_guard = self.position.write().await;
        *write_guard = Some(position);
        debug!("🔵 Updated last known position to {}", position);
    }
}
