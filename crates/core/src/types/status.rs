//! Status and choice enums for products and checkout.

use serde::{Deserialize, Serialize};

/// Product stock availability.
///
/// Serialized with the display strings stored in the `products` collection
/// (`"In Stock"`, `"Out of Stock"`, `"Preorder"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Availability {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Preorder")]
    Preorder,
}

impl Availability {
    /// The display string, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
            Self::Preorder => "Preorder",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(Self::InStock),
            "Out of Stock" => Ok(Self::OutOfStock),
            "Preorder" => Ok(Self::Preorder),
            _ => Err(format!("invalid availability: {s}")),
        }
    }
}

/// Payment method chosen on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Online,
    #[default]
    CashOnDelivery,
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "cash_on_delivery" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Delivery method chosen on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    CourierService,
    Pickup,
}

impl std::str::FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "courier_service" => Ok(Self::CourierService),
            "pickup" => Ok(Self::Pickup),
            _ => Err(format!("invalid delivery method: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_serializes_as_display_strings() {
        assert_eq!(
            serde_json::to_string(&Availability::InStock).expect("serialize"),
            "\"In Stock\""
        );
        assert_eq!(
            serde_json::to_string(&Availability::OutOfStock).expect("serialize"),
            "\"Out of Stock\""
        );
        assert_eq!(
            serde_json::to_string(&Availability::Preorder).expect("serialize"),
            "\"Preorder\""
        );
    }

    #[test]
    fn availability_defaults_to_in_stock() {
        assert_eq!(Availability::default(), Availability::InStock);
    }

    #[test]
    fn checkout_choices_use_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).expect("serialize"),
            "\"cash_on_delivery\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryMethod::CourierService).expect("serialize"),
            "\"courier_service\""
        );
        assert_eq!(
            "pickup".parse::<DeliveryMethod>().expect("parse"),
            DeliveryMethod::Pickup
        );
    }
}
