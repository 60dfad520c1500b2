/// Region of the DynamoDB service holding the product table
pub const REGION: &str = "REGION";
/// Name of the table used for product lookups
pub const PRODUCT_TABLE: &str = "PRODUCT_TABLE";
/// Optional endpoint override, e.g. a local DynamoDB container
pub const DYNAMODB_ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT_URL";
/// Optional flag enabling strongly consistent reads
pub const PRODUCT_TABLE_CONSISTENT_READ: &str = "PRODUCT_TABLE_CONSISTENT_READ";
