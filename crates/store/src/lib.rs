use async_trait::async_trait;
use model::{Error, ProductItem};
use std::fmt::{Display, Formatter};

/// Point lookups against the table holding products.
///
/// Implementations issue exactly one read per call and never retry,
/// an empty result is `Ok(None)` rather than an error.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_product(&self, product_id: &str) -> Result<Option<ProductItem>, StoreError>;
}

/// Errors arising from a product lookup.
#[derive(Debug)]
pub struct StoreError {
    pub product_id: String,
    pub reason: StoreErrorReason,
}

#[derive(Debug)]
pub enum StoreErrorReason {
    // An error from the underlying store
    BackendFailure(Error),
}

impl StoreError {
    pub fn new(product_id: impl Into<String>, reason: StoreErrorReason) -> Self {
        StoreError {
            product_id: product_id.into(),
            reason,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            StoreErrorReason::BackendFailure(err) => {
                write!(f, "lookup of product {} failed: {}", self.product_id, err)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            StoreErrorReason::BackendFailure(err) => Some(&**err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failure_names_product_and_cause() {
        let error = StoreError::new(
            "p-1",
            StoreErrorReason::BackendFailure("connection reset".into()),
        );

        assert_eq!(
            "lookup of product p-1 failed: connection reset",
            error.to_string()
        );
        assert!(std::error::Error::source(&error).is_some());
    }
}
