use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// ============================================================================
// Product Catalog - In-memory product list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(i32),
}

/// Ordered product list. Ids are not enforced unique; lookups take the
/// first match.
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// The three starter products the service boots with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "product1", 10.0),
            Product::new(2, "product2", 20.0),
            Product::new(3, "product3", 30.0),
        ])
    }

    pub async fn get_all(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, CatalogError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    pub async fn add(&self, product: Product) {
        tracing::debug!(product_id = product.id, name = %product.name, "Adding product");
        self.products.write().await.push(product);
    }

    /// Replace the first product with `id` by `product`, as given.
    pub async fn update(&self, id: i32, product: Product) -> Result<Product, CatalogError> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))?;

        *slot = product.clone();
        Ok(product)
    }

    /// Remove every product with `id`. Missing ids are not an error.
    pub async fn delete(&self, id: i32) {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        tracing::debug!(product_id = id, removed = before - products.len(), "Deleted product");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_products() {
        let store = CatalogStore::seeded();
        let products = store.get_all().await;

        assert_eq!(products.len(), 3);
        assert_eq!(products[0], Product::new(1, "product1", 10.0));
        assert_eq!(products[2].price, 30.0);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = CatalogStore::seeded();
        assert_eq!(store.get_by_id(2).await.unwrap().name, "product2");
        assert!(matches!(store.get_by_id(42).await, Err(CatalogError::ProductNotFound(42))));
    }

    #[tokio::test]
    async fn test_add_appends_even_with_duplicate_id() {
        let store = CatalogStore::seeded();
        store.add(Product::new(1, "duplicate", 99.0)).await;

        let products = store.get_all().await;
        assert_eq!(products.len(), 4);
        assert_eq!(products[3].name, "duplicate");
        // First match still wins
        assert_eq!(store.get_by_id(1).await.unwrap().name, "product1");
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = CatalogStore::seeded();
        let updated = store.update(2, Product::new(2, "renamed", 25.0)).await.unwrap();

        assert_eq!(updated.name, "renamed");
        let products = store.get_all().await;
        assert_eq!(products[1], Product::new(2, "renamed", 25.0));
    }

    #[tokio::test]
    async fn test_update_keeps_body_id() {
        let store = CatalogStore::seeded();
        store.update(3, Product::new(7, "moved", 1.0)).await.unwrap();

        assert!(store.get_by_id(3).await.is_err());
        assert_eq!(store.get_by_id(7).await.unwrap().name, "moved");
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let store = CatalogStore::seeded();
        let result = store.update(9, Product::new(9, "ghost", 1.0)).await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(9))));
        assert_eq!(store.get_all().await.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_removes_all_matches() {
        let store = CatalogStore::seeded();
        store.add(Product::new(1, "another one", 5.0)).await;

        store.delete(1).await;
        let products = store.get_all().await;
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.id != 1));

        // Deleting again is a no-op
        store.delete(1).await;
        assert_eq!(store.get_all().await.len(), 2);
    }
}
