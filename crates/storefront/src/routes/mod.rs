//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page (product grid)
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (pings MongoDB)
//!
//! # Products (pages)
//! GET  /products                - Product listing
//! GET  /products/{slug}         - Product detail
//!
//! # Checkout
//! GET  /checkout?productId=...  - Checkout form with product summary
//! POST /checkout                - Validate and submit (logged only)
//!
//! # Auth (pages)
//! GET  /auth/login              - Login page
//! POST /auth/login              - Login action
//! GET  /auth/register           - Register page
//! POST /auth/register           - Register action
//! POST /auth/logout             - Logout action
//!
//! # JSON API
//! GET  /api/products                    - All products
//! GET  /api/products/{id}               - One product by id
//! GET  /api/products/by-name/{slug}     - One product by slug (?name= override)
//! POST /api/signup                      - Create a user
//! ```

pub mod api;
pub mod auth;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the product page routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::list_products))
        .route("/products/{id}", get(api::get_product))
        .route("/products/by-name/{slug}", get(api::get_product_by_name))
        .route("/signup", post(api::signup))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Checkout
        .route("/checkout", get(checkout::page).post(checkout::submit))
        // Auth routes
        .nest("/auth", auth_routes())
        // JSON API
        .nest("/api", api_routes())
}
