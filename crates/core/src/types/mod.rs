//! Shared domain types.

mod email;
mod id;
mod price;
pub mod slug;
mod specification;
mod status;

pub use email::{Email, EmailError};
pub use id::{ProductId, UserId};
pub use price::Price;
pub use specification::Specification;
pub use status::{Availability, DeliveryMethod, PaymentMethod};
