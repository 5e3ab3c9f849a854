//! Custom Askama template filters.

use std::fmt::Display;

/// Format a minor-unit price with the taka sign.
///
/// Usage in templates: `{{ product.price|taka }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn taka(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("\u{09f3} {value}"))
}
