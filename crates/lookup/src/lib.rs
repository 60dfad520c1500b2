//! Lambda handler reading a single product from DynamoDB.
//!
//! The handler expects an API Gateway style event whose `body` is JSON
//! containing a `productId`, and always answers with a `statusCode` and a
//! JSON `body`.
//!
//! ```ignore
//! use lambda_runtime::{service_fn, LambdaEvent};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), model::Error> {
//!     let runtime = lookup::runtime::init().await?;
//!
//!     lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| runtime.invoke(event))).await
//! }
//! ```
pub mod config;
pub mod error;
pub mod handler;
pub mod runtime;

pub use handler::{LookupOutcome, handle, lookup};
