//! Phone Dokan Core - Shared types library.
//!
//! This crate provides common types used across all Phone Dokan components:
//! - `storefront` - Public-facing shop (catalog, checkout, accounts)
//! - `admin` - Internal product-entry tool
//! - `cli` - Command-line tools for seeding and admin management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   statuses, plus the slug <-> display-name mapping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
