use crate::domain::Position;
use crate::location::RetrievalError;
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait LocationService: Debug + Send + Sync {
    /// Resolves the current position of the ISS, erroring only when the service is configured to report failures.
    async fn locate(&self) -> Result<Position, RetrievalError>;
}
