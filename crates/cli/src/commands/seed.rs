//! Catalog seeding with sample products.

use bson::{Document, doc};
use chrono::Utc;

use phone_dokan_core::slug::slugify;

/// Seed the `products` collection with a few sample phones.
///
/// Idempotent: a sample whose slug already exists is skipped, so re-running
/// the command never duplicates the catalog.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn seed_products() -> Result<(), Box<dyn std::error::Error>> {
    let db = super::connect_from_env().await?;
    let products = db.collection::<Document>("products");

    let mut inserted = 0usize;
    for sample in samples() {
        let slug = sample.get_str("slug").unwrap_or_default().to_owned();

        if products.find_one(doc! { "slug": &slug }).await?.is_some() {
            tracing::info!(%slug, "Sample already present, skipping");
            continue;
        }

        products.insert_one(sample).await?;
        tracing::info!(%slug, "Inserted sample product");
        inserted += 1;
    }

    tracing::info!(inserted, "Seeding complete");
    Ok(())
}

fn samples() -> Vec<Document> {
    let now = bson::DateTime::from_chrono(Utc::now());

    vec![
        sample_product(
            "iPhone 12 Pro",
            "ip12p-128",
            "Apple",
            105_000,
            vec!["Graphite", "Silver", "Pacific Blue"],
            vec!["128GB", "256GB", "512GB"],
            vec![
                ("Display", "6.1-inch Super Retina XDR OLED"),
                ("Chip", "A14 Bionic"),
                ("Camera", "12MP triple rear"),
            ],
            now,
        ),
        sample_product(
            "Samsung Galaxy S24",
            "sgs24-256",
            "Samsung",
            95_000,
            vec!["Onyx Black", "Marble Gray"],
            vec!["256GB", "512GB"],
            vec![
                ("Display", "6.2-inch Dynamic AMOLED 2X"),
                ("Chip", "Exynos 2400"),
            ],
            now,
        ),
        sample_product(
            "OnePlus 12",
            "op12-256",
            "OnePlus",
            85_000,
            vec!["Flowy Emerald", "Silky Black"],
            vec!["256GB"],
            vec![
                ("Display", "6.82-inch LTPO AMOLED"),
                ("Chip", "Snapdragon 8 Gen 3"),
            ],
            now,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample_product(
    name: &str,
    sku: &str,
    brand: &str,
    price: i64,
    colors: Vec<&str>,
    storage: Vec<&str>,
    specs: Vec<(&str, &str)>,
    now: bson::DateTime,
) -> Document {
    let specifications: Vec<Document> = specs
        .into_iter()
        .map(|(key, value)| doc! { "key": key, "value": value })
        .collect();

    doc! {
        "productName": name,
        "sku": sku,
        "brand": brand,
        "slug": slugify(name),
        "price": price,
        "availability": "In Stock",
        "colors": colors,
        "storageOptions": storage,
        "specifications": specifications,
        "deliveryTime": "2-5",
        "emiAvailable": true,
        "productImages": [],
        "createdAt": now,
        "updatedAt": now,
    }
}
