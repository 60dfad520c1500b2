use model::{LookupResponse, ResponseStatus};
use std::fmt::{Display, Formatter};
use store::StoreError;

/// Every way a lookup can fail.
#[derive(Debug)]
pub enum LookupError {
    // The event envelope wasn't an object with a string body
    InvalidEvent(serde_json::Error),
    MissingBody,
    // The body wasn't JSON
    MalformedBody(serde_json::Error),
    // The body didn't carry a string productId
    InvalidPayload(serde_json::Error),
    Store(StoreError),
}

impl LookupError {
    /// Malformed input and store failures are reported alike, the caller
    /// can't tell a bad request from an internal failure.
    pub fn status_code(&self) -> u16 {
        match self {
            LookupError::InvalidEvent(_)
            | LookupError::MissingBody
            | LookupError::MalformedBody(_)
            | LookupError::InvalidPayload(_)
            | LookupError::Store(_) => 500,
        }
    }

    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::ServerError
    }

    pub fn into_response(self) -> LookupResponse {
        LookupResponse::new(self.status_code(), self.status())
    }
}

impl From<StoreError> for LookupError {
    fn from(value: StoreError) -> Self {
        LookupError::Store(value)
    }
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::InvalidEvent(err) => write!(f, "Invalid event envelope: {}", err),
            LookupError::MissingBody => f.write_str("Event has no body"),
            LookupError::MalformedBody(err) => write!(f, "Malformed JSON body: {}", err),
            LookupError::InvalidPayload(err) => write!(f, "Invalid lookup request: {}", err),
            LookupError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::InvalidEvent(err)
            | LookupError::MalformedBody(err)
            | LookupError::InvalidPayload(err) => Some(err),
            LookupError::MissingBody => None,
            LookupError::Store(err) => Some(err),
        }
    }
}
