use async_trait::async_trait;
use aws_sdk_dynamodb::operation::get_item::{GetItemError, GetItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::types::error::InternalServerError;
use aws_smithy_mocks::{RuleMode, Rule, mock, mock_client};
use lambda_runtime::{Context, LambdaEvent};
use model::env::{PRODUCT_TABLE, REGION};
use model::{ProductItem, LookupEvent};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use store::StoreErrorReason::BackendFailure;
use store::{ProductStore, StoreError};

/// Test configuration values
pub const TEST_REGION: &str = "eu-west-1";
pub const TEST_TABLE: &str = "products";

/// Environment variables for a valid configuration
pub fn default_env() -> HashMap<String, String> {
    HashMap::from([
        (REGION.to_string(), TEST_REGION.to_string()),
        (PRODUCT_TABLE.to_string(), TEST_TABLE.to_string()),
    ])
}

/// A raw invocation payload asking for `product_id`
pub fn lookup_payload(product_id: &str) -> Value {
    payload_with_body(&json!({ "productId": product_id }).to_string())
}

/// A raw invocation payload with an arbitrary body string
pub fn payload_with_body(body: &str) -> Value {
    json!(LookupEvent::with_body(body))
}

/// Wrap a payload in a `LambdaEvent` with a default context
pub fn lambda_event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}

/// Build a `ProductItem` from attribute name and value pairs
pub fn product_item(attributes: &[(&str, AttributeValue)]) -> ProductItem {
    attributes
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// A store whose every lookup fails with a backend error.
#[derive(Default)]
pub struct FailingProductStore {
    calls: AtomicUsize,
}

impl FailingProductStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStore for FailingProductStore {
    async fn get_product(&self, product_id: &str) -> Result<Option<ProductItem>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Err(StoreError::new(
            product_id,
            BackendFailure("table unavailable".into()),
        ))
    }
}

/// A `get_item` rule which always returns an empty output
pub fn get_item_empty_rule() -> Rule {
    mock!(aws_sdk_dynamodb::Client::get_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| GetItemOutput::builder().build())
        .repeatedly()
        .build()
}

/// A `get_item` rule which always returns `item`
pub fn get_item_returning_rule(item: ProductItem) -> Rule {
    mock!(aws_sdk_dynamodb::Client::get_item)
        .match_requests(|_| true)
        .sequence()
        .output(move || GetItemOutput::builder().set_item(Some(item.clone())).build())
        .repeatedly()
        .build()
}

/// A `get_item` rule which always fails with a service error
pub fn get_item_failing_rule() -> Rule {
    mock!(aws_sdk_dynamodb::Client::get_item)
        .match_requests(|_| true)
        .sequence()
        .error(|| {
            GetItemError::InternalServerError(
                InternalServerError::builder()
                    .message("internal server error")
                    .build(),
            )
        })
        .repeatedly()
        .build()
}

/// A mock DynamoDB client answering with the first matching rule
pub fn create_mock_dynamodb_client(rules: &[&Rule]) -> aws_sdk_dynamodb::Client {
    mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, rules)
}
