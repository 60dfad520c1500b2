use crate::config::LookupConfig;
use crate::handler::handle;
use lambda_runtime::tracing::{Instrument, Span};
use lambda_runtime::{LambdaEvent, tracing};
use model::{Error, LookupResponse};
use serde_json::Value;
use std::sync::{Arc, OnceLock};
use store::ProductStore;
use store_dynamodb::DynamoDbProductStore;

static RUNTIME: OnceLock<LookupRuntime> = OnceLock::new();

/// Process-wide state shared by every invocation on an instance.
pub struct LookupRuntime {
    store: Arc<dyn ProductStore>,
}

impl LookupRuntime {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        LookupRuntime { store }
    }

    /// Create the DynamoDB client and store described by `config`.
    pub async fn from_config(config: &LookupConfig) -> Self {
        let dynamodb_client = aws_sdk_dynamodb::Client::new(&config.sdk_config().await);

        tracing::info!(
            table = %config.product_table,
            region = %config.region,
            "Initialised product store"
        );

        LookupRuntime::new(Arc::new(
            DynamoDbProductStore::new(dynamodb_client, &config.product_table)
                .with_consistent_read(config.consistent_read),
        ))
    }

    /// Handler for `lambda_runtime::run`, failures are returned as a 500 response.
    pub async fn invoke(&self, event: LambdaEvent<Value>) -> Result<LookupResponse, Error> {
        let (payload, context) = event.into_parts();

        let span: Span =
            tracing::span!(tracing::Level::INFO, "Lookup", request_id = %context.request_id);

        Ok(handle(&*self.store, payload).instrument(span).await)
    }
}

/// Initialise the runtime from the environment on first use.
///
/// Missing configuration fails here, before any invocation is served.
pub async fn init() -> Result<&'static LookupRuntime, Error> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime);
    }

    let config: LookupConfig = LookupConfig::from_env()?;

    Ok(init_with(&config).await)
}

/// Initialise the runtime from an explicit config, a no-op once initialised.
pub async fn init_with(config: &LookupConfig) -> &'static LookupRuntime {
    if let Some(runtime) = RUNTIME.get() {
        return runtime;
    }

    let runtime: LookupRuntime = LookupRuntime::from_config(config).await;

    RUNTIME.get_or_init(|| runtime)
}
