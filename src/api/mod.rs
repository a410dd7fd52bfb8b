mod current_location;
mod error;

use crate::location::LocationService;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

pub fn router(service: Arc<dyn LocationService>) -> Router {
    Router::new()
        .route("/location/currentISSLocation", get(current_location::current_iss_location))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::{AppConfigBuilder, ExhaustedPolicy};
    use crate::domain::Position;
    use crate::location::{LastKnownPosition, LocationClient, RetrievalError, new_client};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::error::Error;
    use test_log::test;
    use tower::ServiceExt;

    #[derive(Debug)]
    struct FixedLocation(Position);

    #[async_trait]
    impl LocationService for FixedLocation {
        async fn locate(&self) -> Result<Position, RetrievalError> {
            Ok(self.0)
        }
    }

    async fn send_get(router: Router, uri: &str) -> Result<(StatusCode, Value), Box<dyn Error>> {
        let response = router.oneshot(Request::builder().uri(uri).body(Body::empty())?).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, body))
    }

    fn failing_client(url: String, on_exhausted: ExhaustedPolicy, last_known: LastKnownPosition) -> Result<Arc<dyn LocationService>, Box<dyn Error>> {
        let config = AppConfigBuilder::new().location_api_url(url).on_exhausted(on_exhausted).build();
        Ok(Arc::new(LocationClient::new(new_client(&config)?, &config, Arc::new(last_known))))
    }

    #[test(tokio::test)]
    async fn returns_the_current_location() -> Result<(), Box<dyn Error>> {
        let router = router(Arc::new(FixedLocation(Position::new(51.5072, -0.1276))));

        let (status, body) = send_get(router, "/location/currentISSLocation").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "latitude": 51.5072, "longitude": -0.1276 }));
        Ok(())
    }

    #[test(tokio::test)]
    async fn returns_200_with_the_default_location_when_the_api_is_down() -> Result<(), Box<dyn Error>> {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/").with_status(500).expect(2).create_async().await;

        let service = failing_client(server.url(), ExhaustedPolicy::Fallback, LastKnownPosition::new())?;
        let (status, body) = send_get(router(service), "/location/currentISSLocation").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "latitude": 0.0, "longitude": 0.0 }));
        Ok(())
    }

    #[test(tokio::test)]
    async fn returns_200_with_the_last_known_location_when_the_api_is_down() -> Result<(), Box<dyn Error>> {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/").with_status(503).create_async().await;

        let last_known = LastKnownPosition::with_position(Position::new(10.0, 20.0));
        let service = failing_client(server.url(), ExhaustedPolicy::Fallback, last_known)?;
        let (status, body) = send_get(router(service), "/location/currentISSLocation").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "latitude": 10.0, "longitude": 20.0 }));
        Ok(())
    }

    #[test(tokio::test)]
    async fn returns_500_when_configured_to_fail() -> Result<(), Box<dyn Error>> {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/").with_status(500).create_async().await;

        let last_known = LastKnownPosition::with_position(Position::new(10.0, 20.0));
        let service = failing_client(server.url(), ExhaustedPolicy::Fail, last_known)?;
        let (status, body) = send_get(router(service), "/location/currentISSLocation").await?;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().ok_or("expected an error message")?;
        assert!(message.starts_with("unable to retrieve the current location of the ISS"), "unexpected message '{message}'");
        Ok(())
    }

    #[test(tokio::test)]
    async fn unknown_routes_return_404() -> Result<(), Box<dyn Error>> {
        let router = router(Arc::new(FixedLocation(Position::default())));

        let (status, _) = send_get(router, "/location/predictedISSLocation").await?;

        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }
}
