//! Product repository for catalog reads.

use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use phone_dokan_core::ProductId;

use super::{PRODUCTS_COLLECTION, RepositoryError};
use crate::models::Product;

/// Read-side repository over the `products` collection.
///
/// The storefront never writes products; creation lives in the admin tool.
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

    /// List every product, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut cursor = self.collection.find(doc! {}).await?;

        let mut products = Vec::new();
        while cursor.advance().await? {
            products.push(cursor.deserialize_current()?);
        }

        Ok(products)
    }

    /// Get a product by its document id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidId` if the id is not valid ObjectId
    /// hex, `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let oid = ObjectId::parse_str(id.as_str())
            .map_err(|_| RepositoryError::InvalidId(id.as_str().to_owned()))?;

        Ok(self.collection.find_one(doc! { "_id": oid }).await?)
    }

    /// Get a product by its stored slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "slug": slug }).await?)
    }

    /// Get a product by exact display name.
    ///
    /// Used as the fallback for documents created before the stored slug
    /// existed; the caller de-slugifies the URL segment first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_name(&self, product_name: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .collection
            .find_one(doc! { "productName": product_name })
            .await?)
    }
}
