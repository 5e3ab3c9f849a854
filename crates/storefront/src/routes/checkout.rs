//! Checkout page handlers.
//!
//! Loads one product's summary, collects delivery details, and on a valid
//! submission logs the assembled order payload. No order record is
//! persisted anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;

use phone_dokan_core::{Price, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Principal, Product};
use crate::services::checkout::{CheckoutForm, ValidationErrors, geo};
use crate::state::AppState;

/// Query parameters for the checkout page.
#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
}

/// The product summary shown above the form.
#[derive(Clone)]
pub struct CheckoutSummary {
    pub id: String,
    pub name: String,
    pub price: Price,
}

impl From<&Product> for CheckoutSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id().into_inner(),
            name: product.product_name.clone(),
            price: product.price,
        }
    }
}

/// Raw checkout form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFormData {
    pub product_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub upazila: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub delivery_method: String,
}

impl CheckoutFormData {
    /// Replay the submission through the state machine.
    ///
    /// Selections are applied parent-to-child, so a district or upazila
    /// inconsistent with its parent ends up cleared and fails validation
    /// the same way an empty selection would.
    fn into_snapshot(self) -> CheckoutForm {
        let base = CheckoutForm {
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            post_code: self.post_code,
            address: self.address,
            payment_method: self.payment_method.parse().unwrap_or_default(),
            delivery_method: self.delivery_method.parse().unwrap_or_default(),
            ..CheckoutForm::default()
        };

        base.with_division(&self.division)
            .with_district(&self.district)
            .with_upazila(&self.upazila)
    }
}

/// Checkout page template.
///
/// There is no client-side script, so the district and upazila selects
/// render every known option grouped by parent; the state machine rejects
/// any pick inconsistent with the chosen parent on submit.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutTemplate {
    pub user: Option<Principal>,
    pub product: CheckoutSummary,
    pub form: CheckoutForm,
    pub errors: ValidationErrors,
    pub divisions: Vec<String>,
    pub district_groups: Vec<(String, Vec<String>)>,
    pub upazila_groups: Vec<(String, Vec<String>)>,
}

fn grouped(groups: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    groups
        .iter()
        .map(|(parent, children)| {
            (
                (*parent).to_owned(),
                children.iter().map(ToString::to_string).collect(),
            )
        })
        .collect()
}

impl CheckoutTemplate {
    fn new(
        user: Option<Principal>,
        product: CheckoutSummary,
        form: CheckoutForm,
        errors: ValidationErrors,
    ) -> Self {
        Self {
            user,
            product,
            form,
            errors,
            divisions: geo::DIVISIONS.iter().map(ToString::to_string).collect(),
            district_groups: grouped(geo::DISTRICT_GROUPS),
            upazila_groups: grouped(geo::UPAZILA_GROUPS),
        }
    }
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct CheckoutSuccessTemplate {
    pub user: Option<Principal>,
    pub product_name: String,
    pub total: Price,
}

/// Display the checkout page for one product.
///
/// Without a `productId` there is nothing to check out; the visitor is
/// sent back to the catalog.
pub async fn page(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<CheckoutQuery>,
) -> Result<Response> {
    let Some(product_id) = query.product_id else {
        return Ok(Redirect::to("/").into_response());
    };

    let product = load_product(&state, &product_id).await?;

    Ok(CheckoutTemplate::new(
        user,
        CheckoutSummary::from(&product),
        CheckoutForm::default(),
        ValidationErrors::default(),
    )
    .into_response())
}

/// Handle checkout form submission.
///
/// Invalid forms re-render with inline field errors. Valid forms assemble
/// the order payload, log it, and show the confirmation page.
pub async fn submit(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Form(data): Form<CheckoutFormData>,
) -> Result<Response> {
    let product = load_product(&state, &data.product_id).await?;
    let form = data.into_snapshot();

    if let Err(errors) = form.validate() {
        return Ok(CheckoutTemplate::new(
            user,
            CheckoutSummary::from(&product),
            form,
            errors,
        )
        .into_response());
    }

    let payload = form.order_payload(&product, Utc::now());
    let order_json = serde_json::to_string(&payload).unwrap_or_default();
    tracing::info!(order = %order_json, "Order submitted");

    Ok(CheckoutSuccessTemplate {
        user,
        product_name: product.product_name,
        total: product.price,
    }
    .into_response())
}

async fn load_product(state: &AppState, product_id: &str) -> Result<Product> {
    ProductRepository::new(state.db())
        .get_by_id(&ProductId::new(product_id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))
}
