use reqwest::StatusCode;
use thiserror::Error;

const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Why a single attempt to fetch the position from the location API failed.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("request to the location API failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("location API responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid location API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl RetrievalError {
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        RetrievalError::Status {
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}
