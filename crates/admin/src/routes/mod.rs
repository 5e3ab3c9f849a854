//! HTTP route handlers for the admin tool.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Redirect to the product form
//! GET  /health           - Liveness check
//! GET  /health/ready     - Readiness check (pings MongoDB)
//!
//! # Auth
//! GET  /auth/login       - Login page
//! POST /auth/login       - Login action (requires isAdmin)
//! POST /auth/logout      - Logout action
//!
//! # Products (auth required)
//! GET  /products/new     - Product entry form
//! POST /products/new     - Create from form submission
//! POST /products         - Create from JSON body (API)
//!
//! # Asset uploads (auth required)
//! POST /upload           - Upload one file, returns {url}
//! POST /upload/batch     - Upload several files, per-file report
//! ```

pub mod auth;
pub mod products;
pub mod upload;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the admin tool.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The tool is the product form; the root just points at it
        .route("/", get(|| async { Redirect::to("/products/new") }))
        // Product entry
        .route(
            "/products/new",
            get(products::new_product_page).post(products::create_from_form),
        )
        .route("/products", post(products::create))
        // Asset uploads
        .route("/upload", post(upload::upload))
        .route("/upload/batch", post(upload::upload_batch))
        // Auth routes
        .nest("/auth", auth_routes())
}
