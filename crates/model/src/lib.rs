use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

pub mod env;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// An item returned from the product table, as the store's raw attributes.
/// Only logged, the schema belongs to the table owner.
pub type ProductItem = HashMap<String, AttributeValue>;

/// The HTTP-style envelope the function is invoked with.
/// Only the serialized `body` is read, other API Gateway fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LookupEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl LookupEvent {
    pub fn with_body(body: impl Into<String>) -> Self {
        LookupEvent {
            body: Some(body.into()),
        }
    }
}

/// The parsed request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    ProductCreated,
    ServerError,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::ProductCreated => "Product created",
            ResponseStatus::ServerError => "Server error",
        }
    }
}

/// Response envelope returned to the invoking platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl LookupResponse {
    pub fn new(status_code: u16, status: ResponseStatus) -> Self {
        LookupResponse {
            status_code,
            body: json!({ "status": status.as_str() }).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_with_status_code_and_text_body() {
        let response = LookupResponse::new(201, ResponseStatus::ProductCreated);

        let value = serde_json::to_value(&response).expect("Response should serialize");

        assert_eq!(
            json!({ "statusCode": 201, "body": "{\"status\":\"Product created\"}" }),
            value
        );
    }

    #[test]
    fn event_ignores_unknown_envelope_fields() {
        let event: LookupEvent = serde_json::from_value(json!({
            "body": "{\"productId\": \"p-1\"}",
            "httpMethod": "POST",
            "headers": { "content-type": "application/json" }
        }))
        .expect("Event should deserialize");

        assert_eq!(Some("{\"productId\": \"p-1\"}".to_string()), event.body);
    }

    #[test]
    fn event_without_body_has_none() {
        let event: LookupEvent =
            serde_json::from_value(json!({})).expect("Event should deserialize");

        assert_eq!(None, event.body);
    }

    #[test]
    fn request_reads_camel_case_product_id() {
        let request: LookupRequest =
            serde_json::from_str("{\"productId\": \"p-123\"}").expect("Request should parse");

        assert_eq!("p-123", request.product_id);
    }
}
