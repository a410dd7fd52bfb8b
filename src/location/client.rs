use crate::app_config::{AppConfig, ExhaustedPolicy};
use crate::domain::Position;
use crate::location::{LastKnownPosition, LocationService, RetrievalError, RetryPolicy, retry_with_fixed_delay};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Retrieves the position of the ISS from the location API, remembering the last position it saw.
#[derive(Debug)]
pub struct LocationClient {
    client: Client,
    url: String,
    retry_policy: RetryPolicy,
    on_exhausted: ExhaustedPolicy,
    last_known: Arc<LastKnownPosition>,
}

impl LocationClient {
    pub fn new(client: Client, config: &AppConfig, last_known: Arc<LastKnownPosition>) -> Self {
        let location_api = config.location_api();

        LocationClient {
            client,
            url: location_api.url().to_string(),
            retry_policy: RetryPolicy::new(location_api.max_attempts(), location_api.retry_delay()),
            on_exhausted: location_api.on_exhausted(),
            last_known,
        }
    }

    /// Returns the current position of the ISS.
    ///
    /// Never fails: once every attempt has failed this returns the last known position, or (0, 0) if no attempt
    /// has ever succeeded.
    #[instrument(skip(self))]
    pub async fn current_location(&self) -> Position {
        match self.fetch_with_retry().await {
            Ok(position) => position,
            Err(e) => self.recover(e).await,
        }
    }

    /// Fetches the current position, retrying according to the retry policy, and caches it on success.
    pub async fn fetch_with_retry(&self) -> Result<Position, RetrievalError> {
        debug!("Retrieving current location of the ISS...");

        let position = retry_with_fixed_delay(&self.retry_policy, |attempt| self.fetch(attempt)).await?;
        self.last_known.set(position).await;

        debug!("Retrieving current location of the ISS... OK, {}", position);
        Ok(position)
    }

    async fn fetch(&self, attempt: u32) -> Result<Position, RetrievalError> {
        debug!(attempt, "Requesting {}...", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RetrievalError::from_status(status, &body));
        }

        Ok(serde_json::from_str::<Position>(&body)?)
    }

    async fn recover(&self, error: RetrievalError) -> Position {
        match self.last_known.get().await {
            Some(position) => {
                info!("🟠 Unable to retrieve the location of the ISS ({}), returning last known location {}", error, position);
                position
            }
            None => {
                warn!("⚠️ Unable to retrieve the location of the ISS ({}), returning the default location", error);
                Position::default()
            }
        }
    }
}

#[async_trait]
impl LocationService for LocationClient {
    async fn locate(&self) -> Result<Position, RetrievalError> {
        match self.on_exhausted {
            ExhaustedPolicy::Fallback => Ok(self.current_location().await),
            ExhaustedPolicy::Fail => self.fetch_with_retry().await,
        }
    }
}
