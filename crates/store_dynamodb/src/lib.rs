use async_trait::async_trait;
use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use model::ProductItem;
use store::StoreErrorReason::BackendFailure;
use store::{ProductStore, StoreError};

/// Partition key of the product table.
pub const PRODUCT_ID: &str = "product_id";

/// A `ProductStore` reading from a single DynamoDB table.
///
/// The client is expected to be built once per process and shared,
/// `aws_sdk_dynamodb::Client` is cheap to clone and safe to use concurrently.
pub struct DynamoDbProductStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
    consistent_read: bool,
}

impl DynamoDbProductStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        DynamoDbProductStore {
            table_name: table_name.into(),
            dynamodb_client,
            consistent_read: false,
        }
    }

    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = consistent_read;
        self
    }
}

#[async_trait]
impl ProductStore for DynamoDbProductStore {
    /// The item is returned as stored, whatever attribute types it holds.
    async fn get_product(&self, product_id: &str) -> Result<Option<ProductItem>, StoreError> {
        let output: GetItemOutput = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .consistent_read(self.consistent_read)
            .key(PRODUCT_ID, AttributeValue::S(product_id.to_string()))
            .send()
            .await
            .map_err(|err| StoreError::new(product_id, BackendFailure(err.into())))?;

        Ok(output.item)
    }
}
