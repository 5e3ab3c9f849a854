//! Product repository, write side.

use mongodb::{Collection, Database};

use phone_dokan_core::ProductId;

use super::{PRODUCTS_COLLECTION, RepositoryError};
use crate::models::Product;

/// Write-side repository over the `products` collection.
///
/// Products are only ever inserted; there is no update or delete operation
/// anywhere in the system, and no uniqueness constraint on name or SKU
/// (duplicate SKUs are possible by design).
pub struct ProductRepository {
    collection: Collection<Product>,
}

impl ProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PRODUCTS_COLLECTION),
        }
    }

    /// Insert a product document and return its new id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::DataCorruption` if the inserted id has an
    /// unexpected type.
    pub async fn insert(&self, product: &Product) -> Result<ProductId, RepositoryError> {
        let result = self.collection.insert_one(product).await?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::DataCorruption("inserted product id is not an ObjectId".to_owned())
        })?;

        Ok(ProductId::new(oid.to_hex()))
    }
}
