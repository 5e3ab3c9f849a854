//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::Principal;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<Principal>,
    pub products: Vec<ProductCard>,
}

/// Display the home page with the full product grid.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<HomeTemplate> {
    let products = ProductRepository::new(state.db()).list().await?;
    let products = products.iter().map(ProductCard::from).collect();

    Ok(HomeTemplate { user, products })
}
