//! JSON API handlers.
//!
//! The read side of the product service plus the signup endpoint. Bodies
//! and responses are JSON; errors follow the `AppError` taxonomy.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use phone_dokan_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::ProductResponse;
use crate::routes::products::{NameQuery, resolve_by_slug};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// `GET /api/products` - list every product.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>> {
    let products = ProductRepository::new(state.db()).list().await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// `GET /api/products/{id}` - fetch one product by document id.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = ProductRepository::new(state.db())
        .get_by_id(&ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))?;

    Ok(Json(ProductResponse::from(product)))
}

/// `GET /api/products/by-name/{slug}?name=<override>` - fetch by slug.
///
/// The stored slug wins; de-slugified exact-name match is the legacy
/// fallback. An explicit `?name=` overrides the path segment for the
/// fallback, mirroring the original endpoint.
pub async fn get_product_by_name(
    State(state): State<AppState>,
    Path(url_slug): Path<String>,
    Query(query): Query<NameQuery>,
) -> Result<Json<ProductResponse>> {
    let repo = ProductRepository::new(state.db());
    let product = resolve_by_slug(&repo, &url_slug, query.name.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))?;

    Ok(Json(ProductResponse::from(product)))
}

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /api/signup` - create a user.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<Value>> {
    AuthService::new(state.db())
        .signup(&request.username, &request.email, &request.password)
        .await?;

    Ok(Json(json!({ "message": "User created successfully" })))
}
