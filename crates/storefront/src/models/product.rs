//! Product document and its JSON representation.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use phone_dokan_core::{Availability, Price, ProductId, Specification};

/// A product document as stored in the `products` collection.
///
/// Field names mirror the collection (camelCase). `colors`,
/// `storageOptions`, `specifications` and `productImages` are ordered
/// sequences; insertion order is what the detail page displays. `slug` is
/// generated at creation time; documents written before the field existed
/// may lack it, which is why name lookup keeps a de-slugify fallback.
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

impl Product {
    /// The document id as a hex `ProductId`.
    ///
    /// Documents read from the collection always carry an `_id`; a missing
    /// one maps to an empty id rather than a panic.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.id
            .as_ref()
            .map_or_else(|| ProductId::new(""), |oid| ProductId::new(oid.to_hex()))
    }

    /// The URL slug for this product, stored or derived from the name.
    #[must_use]
    pub fn url_slug(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| phone_dokan_core::slug::slugify(&self.product_name))
    }
}

/// Product representation for JSON API responses.
///
/// Same field vocabulary as the document, with `_id` flattened to a hex
/// string and BSON datetimes rendered as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub product_name: String,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub price: Price,
    pub availability: Availability,
    pub colors: Vec<String>,
    pub storage_options: Vec<String>,
    pub specifications: Vec<Specification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    pub emi_available: bool,
    pub product_images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let id = product.product_id();
        Self {
            id,
            product_name: product.product_name,
            sku: product.sku,
            brand: product.brand,
            slug: product.slug,
            price: product.price,
            availability: product.availability,
            colors: product.colors,
            storage_options: product.storage_options,
            specifications: product.specifications,
            accessories: product.accessories,
            delivery_time: product.delivery_time,
            emi_available: product.emi_available,
            product_images: product.product_images,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: Some(ObjectId::new()),
            product_name: "iPhone 12 Pro".to_owned(),
            sku: "sku-1".to_owned(),
            brand: Some("Apple".to_owned()),
            slug: Some("iphone-12-pro".to_owned()),
            price: Price::new(60000),
            availability: Availability::default(),
            colors: vec!["Graphite".to_owned(), "Silver".to_owned()],
            storage_options: vec!["128GB".to_owned(), "256GB".to_owned()],
            specifications: vec![
                Specification::new("Display", "6.1-inch OLED"),
                Specification::new("Chip", "A14 Bionic"),
            ],
            accessories: None,
            delivery_time: Some("2-5".to_owned()),
            emi_available: false,
            product_images: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn response_uses_collection_field_names() {
        let response = ProductResponse::from(sample());
        let json = serde_json::to_value(&response).expect("serialize");

        assert_eq!(json["productName"], "iPhone 12 Pro");
        assert_eq!(json["sku"], "sku-1");
        assert_eq!(json["price"], 60000);
        assert_eq!(json["availability"], "In Stock");
        assert_eq!(json["emiAvailable"], false);
        assert_eq!(json["storageOptions"][1], "256GB");
        // ordered sequences keep their insertion order
        assert_eq!(json["specifications"][0]["key"], "Display");
        assert_eq!(json["specifications"][1]["key"], "Chip");
    }

    #[test]
    fn document_round_trips_through_bson() {
        let product = sample();
        let doc = bson::to_document(&product).expect("to bson");
        let back: Product = bson::from_document(doc).expect("from bson");

        assert_eq!(back.product_name, product.product_name);
        assert_eq!(back.colors, product.colors);
        assert_eq!(back.specifications, product.specifications);
        assert_eq!(back.price, product.price);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        // A minimal legacy document: required fields only.
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "productName": "iPhone 12 Pro",
            "sku": "sku-1",
            "price": 60000_i64,
            "createdAt": bson::DateTime::now(),
            "updatedAt": bson::DateTime::now(),
        };

        let product: Product = bson::from_document(doc).expect("deserialize");
        assert_eq!(product.availability, Availability::InStock);
        assert!(product.colors.is_empty());
        assert!(product.specifications.is_empty());
        assert!(!product.emi_available);
        assert!(product.slug.is_none());
        assert_eq!(product.url_slug(), "iphone-12-pro");
    }
}
