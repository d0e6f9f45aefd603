//! Service wiring shared by the route handlers.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use storefront_core::{CatalogError, CatalogResult, ProductId};
use storefront_products::Product;

use crate::app::dto::SerializedProduct;
use crate::app::serializer::ProductSerializer;

/// Source of catalog products for the storefront routes.
pub trait ProductRepository: Send + Sync {
    fn get(&self, product_id: ProductId) -> CatalogResult<Option<Product>>;

    /// All products, ordered by id.
    fn list(&self) -> CatalogResult<Vec<Product>>;
}

/// In-memory product repository for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, product: Product) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id, product);
        }
    }
}

fn poisoned() -> CatalogError {
    CatalogError::collaborator("product repository", "lock poisoned")
}

impl ProductRepository for InMemoryProductRepository {
    fn get(&self, product_id: ProductId) -> CatalogResult<Option<Product>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&product_id).cloned())
    }

    fn list(&self) -> CatalogResult<Vec<Product>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut products: Vec<Product> = map.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }
}

/// Everything the storefront routes need, shared through an axum `Extension`.
pub struct AppServices {
    products: Arc<dyn ProductRepository>,
    serializer: ProductSerializer,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductRepository>, serializer: ProductSerializer) -> Self {
        Self {
            products,
            serializer,
        }
    }

    /// Load and serialize one product; `Ok(None)` when the id is unknown.
    pub fn product_resource(&self, product_id: ProductId) -> CatalogResult<Option<SerializedProduct>> {
        match self.products.get(product_id)? {
            Some(product) => self.serializer.serialize(&product).map(Some),
            None => Ok(None),
        }
    }

    pub fn product_resources(&self) -> CatalogResult<Vec<SerializedProduct>> {
        let products = self.products.list()?;
        self.serializer.collection(&products)
    }
}
