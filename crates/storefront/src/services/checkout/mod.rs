//! Checkout form state machine.
//!
//! The form is a flat field set with one structural rule: the three-level
//! address selection cascades. Selecting a division resets district and
//! upazila; selecting a district resets upazila; a child value that is not
//! consistent with its currently selected parent is rejected by the
//! transition. Transitions are pure functions over an immutable snapshot,
//! so a submitted request replays them in parent-to-child order and ends up
//! in a state the UI could have produced.
//!
//! Submission does not persist anything: the assembled order payload is
//! logged and the customer is told they will be contacted. Whether an order
//! record should ever exist is an open product question.

pub mod geo;

use chrono::{DateTime, Utc};
use serde::Serialize;

use phone_dokan_core::{DeliveryMethod, PaymentMethod, Price, ProductId};

use crate::models::Product;

/// Snapshot of the checkout form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub division: String,
    pub district: String,
    pub upazila: String,
    pub post_code: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
}

impl CheckoutForm {
    /// Select a division.
    ///
    /// Always clears district and upazila; an unknown division clears the
    /// selection entirely.
    #[must_use]
    pub fn with_division(&self, division: &str) -> Self {
        let mut next = self.clone();
        next.division = if geo::is_division(division) {
            division.to_owned()
        } else {
            String::new()
        };
        next.district.clear();
        next.upazila.clear();
        next
    }

    /// Select a district.
    ///
    /// Clearing (empty input) always succeeds and also clears the upazila.
    /// A district that does not belong to the currently selected division
    /// is rejected; the snapshot is returned unchanged.
    #[must_use]
    pub fn with_district(&self, district: &str) -> Self {
        let mut next = self.clone();
        if district.is_empty() {
            next.district.clear();
            next.upazila.clear();
            return next;
        }

        if !geo::districts(&self.division).contains(&district) {
            return next;
        }

        next.district = district.to_owned();
        next.upazila.clear();
        next
    }

    /// Select an upazila.
    ///
    /// Same contract as [`Self::with_district`], one level down.
    #[must_use]
    pub fn with_upazila(&self, upazila: &str) -> Self {
        let mut next = self.clone();
        if upazila.is_empty() {
            next.upazila.clear();
            return next;
        }

        if !geo::upazilas(&self.district).contains(&upazila) {
            return next;
        }

        next.upazila = upazila.to_owned();
        next
    }

    /// True when cash-on-delivery is selected (template helper).
    #[must_use]
    pub fn pays_cash_on_delivery(&self) -> bool {
        self.payment_method == PaymentMethod::CashOnDelivery
    }

    /// True when courier delivery is selected (template helper).
    #[must_use]
    pub fn ships_by_courier(&self) -> bool {
        self.delivery_method == DeliveryMethod::CourierService
    }

    /// Validate the mandatory fields.
    ///
    /// Full name, phone number, division, district, upazila and address are
    /// required; email and post code are optional.
    ///
    /// # Errors
    ///
    /// Returns the field-level errors when any mandatory field is missing.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.full_name.trim().is_empty() {
            errors.push("fullName", "Full name is required");
        }
        if self.phone_number.trim().is_empty() {
            errors.push("phoneNumber", "Phone number is required");
        }
        if self.division.is_empty() {
            errors.push("division", "Division is required");
        }
        if self.district.is_empty() {
            errors.push("district", "District is required");
        }
        if self.upazila.is_empty() {
            errors.push("upazila", "Upazila is required");
        }
        if self.address.trim().is_empty() {
            errors.push("address", "Address is required");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Assemble the order payload for a validated form.
    ///
    /// Quantity is always one, so the total is the product price.
    #[must_use]
    pub fn order_payload(&self, product: &Product, order_date: DateTime<Utc>) -> OrderPayload {
        OrderPayload {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            division: self.division.clone(),
            district: self.district.clone(),
            upazila: self.upazila.clone(),
            post_code: self.post_code.clone(),
            address: self.address.clone(),
            payment_method: self.payment_method,
            delivery_method: self.delivery_method,
            product_id: product.product_id(),
            product_name: product.product_name.clone(),
            order_date,
            total_amount: product.price,
        }
    }
}

/// Field-level validation errors, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, &'static str)>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push((field, message));
    }

    /// The error message for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| *message)
    }

    /// True when validation passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// The order payload assembled at submission.
///
/// This is what gets logged; no order collection exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub division: String,
    pub district: String,
    pub upazila: String,
    pub post_code: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
    pub product_id: ProductId,
    pub product_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_address() -> CheckoutForm {
        CheckoutForm::default()
            .with_division("Dhaka")
            .with_district("Gazipur")
    }

    #[test]
    fn changing_division_clears_district_and_upazila() {
        let form = CheckoutForm::default()
            .with_division("Dhaka")
            .with_district("Dhaka")
            .with_upazila("Gulshan");
        assert_eq!(form.upazila, "Gulshan");

        let form = form.with_division("Chittagong");
        assert_eq!(form.division, "Chittagong");
        assert_eq!(form.district, "");
        assert_eq!(form.upazila, "");
    }

    #[test]
    fn changing_district_clears_upazila() {
        let form = CheckoutForm::default()
            .with_division("Dhaka")
            .with_district("Dhaka")
            .with_upazila("Mirpur")
            .with_district("Gazipur");
        assert_eq!(form.district, "Gazipur");
        assert_eq!(form.upazila, "");
    }

    #[test]
    fn district_outside_division_is_rejected() {
        // Gazipur belongs to Dhaka, not Chittagong.
        let form = CheckoutForm::default()
            .with_division("Chittagong")
            .with_district("Gazipur");
        assert_eq!(form.district, "");
    }

    #[test]
    fn upazila_outside_district_is_rejected() {
        let form = filled_address().with_upazila("Gulshan");
        // Gulshan is a Dhaka-district upazila; Gazipur has no upazila data.
        assert_eq!(form.upazila, "");
    }

    #[test]
    fn unknown_division_clears_selection() {
        let form = CheckoutForm::default().with_division("Atlantis");
        assert_eq!(form.division, "");
    }

    #[test]
    fn validation_requires_the_six_mandatory_fields() {
        let errors = CheckoutForm::default().validate().expect_err("invalid");
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("fullName"), Some("Full name is required"));
        assert_eq!(errors.get("upazila"), Some("Upazila is required"));
        // optional fields are not flagged
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.get("postCode"), None);
    }

    #[test]
    fn complete_form_validates() {
        let mut form = CheckoutForm::default()
            .with_division("Dhaka")
            .with_district("Dhaka")
            .with_upazila("Uttara");
        form.full_name = "Rahim Uddin".to_owned();
        form.phone_number = "01700000000".to_owned();
        form.address = "House 7, Road 3".to_owned();

        assert!(form.validate().is_ok());
    }
}
