use crate::api::ApiError;
use crate::domain::Position;
use crate::location::LocationService;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Handles `GET /location/currentISSLocation`.
#[instrument(skip_all)]
pub async fn current_iss_location(State(service): State<Arc<dyn LocationService>>) -> Result<Json<Position>, ApiError> {
    debug!("Getting current location of the ISS");

    match service.locate().await {
        Ok(position) => Ok(Json(position)),
        Err(e) => {
            error!("❌ Error getting current location of the ISS: {}", e);
            Err(ApiError::from(e))
        }
    }
}
