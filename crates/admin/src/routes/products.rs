//! Product entry route handlers.
//!
//! Two ways in: the HTML form and the JSON endpoint. Both converge on
//! `NewProduct`; only the form path rejects duplicate specification keys,
//! the store layer itself accepts them.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

use phone_dokan_core::{Availability, Price, Specification};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{CurrentAdmin, NewProduct};
use crate::state::AppState;

// =============================================================================
// Form Parsing
// =============================================================================

/// Errors in the free-form specification textarea.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum SpecParseError {
    /// A non-empty line without a `key: value` shape.
    #[error("specification line {0} must look like `key: value`")]
    MalformedLine(usize),

    /// The same key given twice.
    #[error("duplicate specification key: {0}")]
    DuplicateKey(String),
}

/// Parse `key: value` lines into ordered specification pairs.
///
/// Empty lines are skipped. Duplicate keys are rejected here, before
/// anything reaches the store layer.
///
/// # Errors
///
/// Returns `SpecParseError` on a malformed line or a repeated key.
pub fn parse_specifications(input: &str) -> std::result::Result<Vec<Specification>, SpecParseError> {
    let mut specifications: Vec<Specification> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(SpecParseError::MalformedLine(index + 1))?;
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || value.is_empty() {
            return Err(SpecParseError::MalformedLine(index + 1));
        }

        if specifications.iter().any(|s| s.key == key) {
            return Err(SpecParseError::DuplicateKey(key.to_owned()));
        }

        specifications.push(Specification::new(key, value));
    }

    Ok(specifications)
}

/// Split a comma-separated list, dropping empties.
fn parse_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Split a one-per-line list, dropping empties.
fn parse_line_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn non_empty(input: String) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

// =============================================================================
// JSON API
// =============================================================================

/// `POST /products` request body.
///
/// Everything optional at the serde layer so a missing required field gets
/// a 400 with a message instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub brand: Option<String>,
    pub price: Option<i64>,
    pub availability: Option<Availability>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub storage_options: Vec<String>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    pub accessories: Option<String>,
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub emi_available: bool,
    #[serde(default)]
    pub product_images: Vec<String>,
}

impl CreateProductRequest {
    /// Check required fields and build the validated product.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` naming the missing fields.
    pub fn validate(self) -> Result<NewProduct> {
        let mut missing = Vec::new();

        let product_name = self.product_name.and_then(non_empty);
        if product_name.is_none() {
            missing.push("productName");
        }

        let sku = self.sku.and_then(non_empty);
        if sku.is_none() {
            missing.push("sku");
        }

        if self.price.is_none() {
            missing.push("price");
        }

        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(NewProduct {
            product_name: product_name.unwrap_or_default(),
            sku: sku.unwrap_or_default(),
            brand: self.brand.and_then(non_empty),
            price: Price::new(self.price.unwrap_or_default()),
            availability: self.availability.unwrap_or_default(),
            colors: self.colors,
            storage_options: self.storage_options,
            specifications: self.specifications,
            accessories: self.accessories.and_then(non_empty),
            delivery_time: self.delivery_time.and_then(non_empty),
            emi_available: self.emi_available,
            product_images: self.product_images,
        })
    }
}

/// `POST /products` - create a product from a JSON document.
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let product = request.validate()?.into_product(Utc::now());

    let id = ProductRepository::new(state.db()).insert(&product).await?;
    tracing::info!(product_id = %id, slug = product.slug.as_deref().unwrap_or_default(), "Product created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product added successfully" })),
    ))
}

// =============================================================================
// HTML Form
// =============================================================================

/// Raw product form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub colors: String,
    #[serde(default)]
    pub storage_options: String,
    #[serde(default)]
    pub specifications: String,
    #[serde(default)]
    pub accessories: String,
    #[serde(default)]
    pub delivery_time: String,
    /// Checkbox; present ("on") when ticked.
    pub emi_available: Option<String>,
    #[serde(default)]
    pub product_images: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Product entry form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct NewProductTemplate {
    pub admin: CurrentAdmin,
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

fn error_message(code: &str) -> &'static str {
    match code {
        "missing" => "Product name, SKU and price are required",
        "price" => "Price must be a whole number of taka",
        "spec" => "Each specification line must look like `key: value`",
        "spec_dup" => "Duplicate specification keys are not allowed",
        _ => "Something went wrong, please try again",
    }
}

/// Display the product entry form.
pub async fn new_product_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    Query(query): Query<MessageQuery>,
) -> NewProductTemplate {
    NewProductTemplate {
        admin,
        error: query.error.as_deref().map(error_message),
        success: query
            .success
            .as_deref()
            .map(|_| "Product added successfully"),
    }
}

/// Handle product form submission.
pub async fn create_from_form(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProductFormData>,
) -> Result<Response> {
    if form.product_name.trim().is_empty()
        || form.sku.trim().is_empty()
        || form.price.trim().is_empty()
    {
        return Ok(Redirect::to("/products/new?error=missing").into_response());
    }

    let Ok(price) = form.price.trim().parse::<i64>() else {
        return Ok(Redirect::to("/products/new?error=price").into_response());
    };

    let specifications = match parse_specifications(&form.specifications) {
        Ok(specifications) => specifications,
        Err(SpecParseError::DuplicateKey(key)) => {
            tracing::warn!(%key, "Duplicate specification key rejected");
            return Ok(Redirect::to("/products/new?error=spec_dup").into_response());
        }
        Err(SpecParseError::MalformedLine(_)) => {
            return Ok(Redirect::to("/products/new?error=spec").into_response());
        }
    };

    let product = NewProduct {
        product_name: form.product_name.trim().to_owned(),
        sku: form.sku.trim().to_owned(),
        brand: non_empty(form.brand),
        price: Price::new(price),
        availability: form.availability.parse().unwrap_or_default(),
        colors: parse_comma_list(&form.colors),
        storage_options: parse_comma_list(&form.storage_options),
        specifications,
        accessories: non_empty(form.accessories),
        delivery_time: non_empty(form.delivery_time),
        emi_available: form.emi_available.is_some(),
        product_images: parse_line_list(&form.product_images),
    }
    .into_product(Utc::now());

    let id = ProductRepository::new(state.db()).insert(&product).await?;
    tracing::info!(product_id = %id, "Product created from form");

    Ok(Redirect::to("/products/new?success=created").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specifications_keep_insertion_order() {
        let specs = parse_specifications("Display: 6.1-inch OLED\nChip: A14 Bionic\n")
            .expect("valid input");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs.first().map(|s| s.key.as_str()), Some("Display"));
        assert_eq!(specs.last().map(|s| s.value.as_str()), Some("A14 Bionic"));
    }

    #[test]
    fn duplicate_specification_keys_are_rejected() {
        let result = parse_specifications("Display: OLED\nChip: A14\nDisplay: LCD");
        assert_eq!(
            result,
            Err(SpecParseError::DuplicateKey("Display".to_owned()))
        );
    }

    #[test]
    fn blank_lines_are_skipped_and_values_may_contain_colons() {
        let specs = parse_specifications("\nCamera: 12MP + 12MP\n\nRatio: 19.5:9\n")
            .expect("valid input");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs.last().map(|s| s.value.as_str()), Some("19.5:9"));
    }

    #[test]
    fn malformed_lines_are_reported_with_their_number() {
        let result = parse_specifications("Display: OLED\njust words");
        assert_eq!(result, Err(SpecParseError::MalformedLine(2)));
    }

    #[test]
    fn comma_lists_drop_empty_entries() {
        assert_eq!(
            parse_comma_list("Graphite, Silver, , Pacific Blue,"),
            vec!["Graphite", "Silver", "Pacific Blue"]
        );
        assert!(parse_comma_list("").is_empty());
    }

    #[test]
    fn json_create_requires_name_sku_and_price() {
        let request = CreateProductRequest {
            brand: Some("Apple".to_owned()),
            ..CreateProductRequest::default()
        };

        let err = request.validate().expect_err("missing fields");
        let message = err.to_string();
        assert!(message.contains("productName"));
        assert!(message.contains("sku"));
        assert!(message.contains("price"));
    }

    #[test]
    fn json_create_fills_defaults() {
        let request = CreateProductRequest {
            product_name: Some("iPhone 12 Pro".to_owned()),
            sku: Some("sku-1".to_owned()),
            price: Some(60000),
            ..CreateProductRequest::default()
        };

        let product = request.validate().expect("valid");
        assert_eq!(product.availability, Availability::InStock);
        assert!(product.colors.is_empty());
        assert!(product.specifications.is_empty());
        assert!(!product.emi_available);
    }

    // The store layer does not require unique keys; only the form rejects
    // duplicates, so the JSON path lets them through untouched.
    #[test]
    fn json_create_accepts_duplicate_specification_keys() {
        let request = CreateProductRequest {
            product_name: Some("Pixel 8".to_owned()),
            sku: Some("px-8".to_owned()),
            price: Some(70000),
            specifications: vec![
                Specification::new("Port", "USB-C"),
                Specification::new("Port", "None"),
            ],
            ..CreateProductRequest::default()
        };

        let product = request.validate().expect("valid");
        assert_eq!(product.specifications.len(), 2);
    }
}
