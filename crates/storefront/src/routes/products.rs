//! Product page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use phone_dokan_core::{Availability, Price, Specification, slug};

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Principal, Product};
use crate::state::AppState;

/// Product card data for listing templates.
#[derive(Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: Price,
    pub availability: Availability,
    pub image: Option<String>,
    pub slug: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id().into_inner(),
            name: product.product_name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            availability: product.availability,
            image: product.product_images.first().cloned(),
            slug: product.url_slug(),
        }
    }
}

/// Full product data for the detail template.
#[derive(Clone)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub sku: String,
    pub price: Price,
    pub availability: Availability,
    pub colors: Vec<String>,
    pub storage_options: Vec<String>,
    pub specifications: Vec<Specification>,
    pub accessories: Option<String>,
    pub delivery_time: Option<String>,
    pub emi_available: bool,
    pub images: Vec<String>,
}

impl From<Product> for ProductDetail {
    fn from(product: Product) -> Self {
        let id = product.product_id().into_inner();
        Self {
            id,
            name: product.product_name,
            brand: product.brand,
            sku: product.sku,
            price: product.price,
            availability: product.availability,
            colors: product.colors,
            storage_options: product.storage_options,
            specifications: product.specifications,
            accessories: product.accessories,
            delivery_time: product.delivery_time,
            emi_available: product.emi_available,
            images: product.product_images,
        }
    }
}

/// Optional display-name override for slug lookups.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub user: Option<Principal>,
    pub products: Vec<ProductCard>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub user: Option<Principal>,
    pub product: ProductDetail,
}

/// Resolve a product from a URL slug.
///
/// The stored slug is authoritative. Documents created before the field
/// existed fall back to the legacy reverse mapping: de-slugify the segment
/// (or the explicit `?name=` override) and match the display name exactly.
pub(crate) async fn resolve_by_slug(
    repo: &ProductRepository,
    url_slug: &str,
    name_override: Option<&str>,
) -> std::result::Result<Option<Product>, RepositoryError> {
    if let Some(product) = repo.get_by_slug(url_slug).await? {
        return Ok(Some(product));
    }

    let readable_name = slug::deslugify(name_override.unwrap_or(url_slug));
    repo.get_by_name(&readable_name).await
}

/// Display the product listing page.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<ProductsIndexTemplate> {
    let products = ProductRepository::new(state.db()).list().await?;
    let products = products.iter().map(ProductCard::from).collect();

    Ok(ProductsIndexTemplate { user, products })
}

/// Display the product detail page.
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(url_slug): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<ProductShowTemplate> {
    let repo = ProductRepository::new(state.db());
    let product = resolve_by_slug(&repo, &url_slug, query.name.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))?;

    Ok(ProductShowTemplate {
        user,
        product: ProductDetail::from(product),
    })
}
