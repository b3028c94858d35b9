//! Response envelope and classification.
//!
//! Every body is `{"data": <string|null>, "error": <string|null>}` with
//! exactly one side set.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Fallback message for an internal error with no description.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// The JSON body of every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Option<String>,
    pub error: Option<String>,
}

impl Envelope {
    /// A success body carrying `data`.
    pub fn data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            error: None,
        }
    }

    /// A failure body carrying `error`.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> String {
        // Two optional strings cannot practically fail to serialize.
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"data":null,"error":"serialization failed"}"#.into())
    }
}

/// The externally observable outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClass {
    /// The grid is mutant (2xx).
    Success,
    /// The grid is valid but not mutant (403).
    Rejected,
    /// The request was malformed (4xx other than 403).
    ClientError,
    /// Something failed while serving the request (5xx).
    ServerError,
}

impl ResponseClass {
    /// Classify a status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => ResponseClass::Success,
            403 => ResponseClass::Rejected,
            400..=499 => ResponseClass::ClientError,
            _ => ResponseClass::ServerError,
        }
    }
}

/// A status code and JSON body, ready to hand to any HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// `200` with `data` set.
    pub fn ok(data: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: Envelope::data(data).to_json(),
        }
    }

    /// `403` with `error` set: a well-formed request the domain turns down.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            status: 403,
            body: Envelope::error(error).to_json(),
        }
    }

    /// Which of the response classes this is.
    pub fn class(&self) -> ResponseClass {
        ResponseClass::from_status(self.status)
    }

    /// Parse the body back into an [`Envelope`].
    pub fn envelope(&self) -> Option<Envelope> {
        serde_json::from_str(&self.body).ok()
    }
}

impl From<&ApiError> for ApiResponse {
    fn from(err: &ApiError) -> Self {
        let message = match err {
            ApiError::Internal(msg) if msg.is_empty() => UNEXPECTED_ERROR.to_string(),
            other => other.to_string(),
        };
        Self {
            status: err.status(),
            body: Envelope::error(message).to_json(),
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self::from(&err)
    }
}
