use async_trait::async_trait;
use model::ProductItem;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use store::StoreErrorReason::BackendFailure;
use store::{ProductStore, StoreError};

/// Products held in a map, for tests and local runs.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<Mutex<HashMap<String, ProductItem>>>,
    reads: Arc<AtomicUsize>,
}

impl InMemoryProductStore {
    pub fn insert(&self, product_id: impl Into<String>, item: ProductItem) {
        self.products
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product_id.into(), item);
    }

    /// Number of lookups served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_product(&self, product_id: &str) -> Result<Option<ProductItem>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let products = self
            .products
            .lock()
            .map_err(|err| StoreError::new(product_id, BackendFailure(err.to_string().into())))?;

        Ok(products.get(product_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;

    fn item(product_id: &str) -> ProductItem {
        HashMap::from([(
            "product_id".to_string(),
            AttributeValue::S(product_id.to_string()),
        )])
    }

    #[tokio::test]
    async fn returns_inserted_product() {
        let store = InMemoryProductStore::default();
        store.insert("p-1", item("p-1"));

        let found: Option<ProductItem> = store.get_product("p-1").await.expect("Lookup should succeed");

        assert_eq!(Some(item("p-1")), found);
    }

    #[tokio::test]
    async fn missing_product_is_none_and_counted() {
        let store = InMemoryProductStore::default();

        let found: Option<ProductItem> = store.get_product("p-2").await.expect("Lookup should succeed");

        assert!(found.is_none());
        assert_eq!(1, store.reads());
    }

    #[tokio::test]
    async fn clones_share_products() {
        let store = InMemoryProductStore::default();
        let other = store.clone();
        other.insert("p-3", item("p-3"));

        assert!(store.get_product("p-3").await.expect("Lookup should succeed").is_some());
        assert_eq!(1, other.reads());
    }

    #[test]
    fn insert_survives_a_poisoned_lock() {
        let store = InMemoryProductStore::default();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.products.lock();
            panic!("poison the product map");
        })
        .join();
        assert!(store.products.is_poisoned());

        store.insert("p-4", item("p-4"));

        let products = store.products.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(Some(&item("p-4")), products.get("p-4"));
    }
}
