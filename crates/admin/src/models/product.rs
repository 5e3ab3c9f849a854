//! Product document assembly (write side).

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use phone_dokan_core::{Availability, Price, Specification, slug};

/// A product document for the `products` collection.
///
/// Field names mirror the collection (camelCase). The admin tool only ever
/// inserts these; reading them back is the storefront's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub product_name: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub storage_options: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub emi_available: bool,
    #[serde(default)]
    pub product_images: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// A validated product about to be created.
///
/// Produced by the create handlers once required fields are checked; turns
/// into a [`Product`] document with the slug generated from the name and
/// both timestamps stamped.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub product_name: String,
    pub sku: String,
    pub brand: Option<String>,
    pub price: Price,
    pub availability: Availability,
    pub colors: Vec<String>,
    pub storage_options: Vec<String>,
    pub specifications: Vec<Specification>,
    pub accessories: Option<String>,
    pub delivery_time: Option<String>,
    pub emi_available: bool,
    pub product_images: Vec<String>,
}

impl NewProduct {
    /// Build the document to insert.
    ///
    /// The slug is generated exactly once, here; lookups never have to
    /// reconstruct it from the display name again.
    #[must_use]
    pub fn into_product(self, now: DateTime<Utc>) -> Product {
        let slug = slug::slugify(&self.product_name);

        Product {
            id: None,
            product_name: self.product_name,
            sku: self.sku,
            brand: self.brand,
            slug: Some(slug),
            price: self.price,
            availability: self.availability,
            colors: self.colors,
            storage_options: self.storage_options,
            specifications: self.specifications,
            accessories: self.accessories,
            delivery_time: self.delivery_time,
            emi_available: self.emi_available,
            product_images: self.product_images,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_product_generates_slug_and_timestamps() {
        let now = Utc::now();
        let product = NewProduct {
            product_name: "iPhone 12 Pro".to_owned(),
            sku: "sku-1".to_owned(),
            price: Price::new(60000),
            ..NewProduct::default()
        }
        .into_product(now);

        assert_eq!(product.slug.as_deref(), Some("iphone-12-pro"));
        assert_eq!(product.created_at, now);
        assert_eq!(product.updated_at, now);
        assert!(product.id.is_none());
        assert_eq!(product.availability, Availability::InStock);
    }

    #[test]
    fn document_serializes_with_collection_field_names() {
        let product = NewProduct {
            product_name: "OnePlus 12".to_owned(),
            sku: "op-12".to_owned(),
            price: Price::new(85000),
            emi_available: true,
            ..NewProduct::default()
        }
        .into_product(Utc::now());

        let doc = bson::to_document(&product).expect("to bson");
        assert_eq!(doc.get_str("productName").expect("name"), "OnePlus 12");
        assert_eq!(doc.get_str("slug").expect("slug"), "oneplus-12");
        assert!(doc.get_bool("emiAvailable").expect("emi"));
        assert!(doc.get("_id").is_none());
    }
}
