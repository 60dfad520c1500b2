use crate::error::LookupError;
use lambda_runtime::tracing;
use model::{LookupEvent, LookupRequest, LookupResponse, ProductItem, ResponseStatus};
use serde_json::Value;
use store::ProductStore;

/// Result of a successful point lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found {
        product_id: String,
        item: ProductItem,
    },
    NotFound {
        product_id: String,
    },
}

impl LookupOutcome {
    pub fn product_id(&self) -> &str {
        match self {
            LookupOutcome::Found { product_id, .. } => product_id,
            LookupOutcome::NotFound { product_id } => product_id,
        }
    }

    /// Found and missing products both answer 201.
    pub fn status_code(&self) -> u16 {
        match self {
            LookupOutcome::Found { .. } | LookupOutcome::NotFound { .. } => 201,
        }
    }

    pub fn into_response(self) -> LookupResponse {
        LookupResponse::new(self.status_code(), ResponseStatus::ProductCreated)
    }
}

/// Handle one invocation, always producing a response.
///
/// Failures are logged once here and never reach the caller as errors.
pub async fn handle(store: &dyn ProductStore, event: Value) -> LookupResponse {
    tracing::info!("event -> {}", event);

    match lookup(store, event).await {
        Ok(outcome) => outcome.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Product lookup failed");

            err.into_response()
        }
    }
}

/// Parse the event and read the requested product from the store.
pub async fn lookup(store: &dyn ProductStore, event: Value) -> Result<LookupOutcome, LookupError> {
    let event: LookupEvent = serde_json::from_value(event).map_err(LookupError::InvalidEvent)?;
    let body: String = event.body.ok_or(LookupError::MissingBody)?;

    let payload: Value = serde_json::from_str(&body).map_err(LookupError::MalformedBody)?;
    tracing::info!("payload -> {}", payload);

    let request: LookupRequest =
        serde_json::from_value(payload).map_err(LookupError::InvalidPayload)?;
    let product_id: String = request.product_id;

    let item: Option<ProductItem> = store.get_product(&product_id).await?;
    tracing::info!(product_id = %product_id, found = item.is_some(), "store response -> {:?}", item);

    Ok(match item {
        Some(item) => LookupOutcome::Found { product_id, item },
        None => LookupOutcome::NotFound { product_id },
    })
}
