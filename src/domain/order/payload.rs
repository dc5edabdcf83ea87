//! Order payload - customer details plus cart contents.

use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, LineItem};
use crate::domain::foundation::{Money, OrderNumber, Timestamp, ValidationError};

/// Customer and delivery details collected at checkout.
///
/// Field-level validation UX belongs to the checkout form; this type
/// only guarantees the required fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_address: String,
    pub city: String,
    pub zip_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl CustomerDetails {
    /// Creates customer details, requiring every mandatory field.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty required field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        delivery_address: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let details = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            delivery_address: delivery_address.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            delivery_date: None,
            special_instructions: None,
        };

        let required = [
            ("first_name", &details.first_name),
            ("last_name", &details.last_name),
            ("email", &details.email),
            ("phone", &details.phone),
            ("delivery_address", &details.delivery_address),
            ("city", &details.city),
            ("zip_code", &details.zip_code),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(details)
    }

    /// Sets the requested delivery date.
    pub fn with_delivery_date(mut self, date: impl Into<String>) -> Self {
        self.delivery_date = Some(date.into());
        self
    }

    /// Sets free-form delivery instructions.
    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }
}

/// The order as handed to the submission gateway.
///
/// Customer fields are flattened alongside the cart data, matching the
/// payload shape the sales pipeline expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(flatten)]
    pub customer: CustomerDetails,

    /// Cart line items at submission time.
    pub items: Vec<LineItem>,

    /// Submission timestamp.
    pub order_date: Timestamp,

    /// Sum of line quantities.
    pub total_items: u32,

    /// Sum of unit price times quantity.
    pub total_value: Money,

    /// Assigned by the gateway when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<OrderNumber>,
}

impl OrderPayload {
    /// Assembles a payload from customer details and the current cart.
    pub fn new(customer: CustomerDetails, cart: &Cart) -> Self {
        Self {
            customer,
            items: cart.items().to_vec(),
            order_date: Timestamp::now(),
            total_items: cart.total_item_count(),
            total_value: cart.total_value(),
            order_number: None,
        }
    }

    /// Attaches a pre-assigned order number.
    pub fn with_order_number(mut self, order_number: OrderNumber) -> Self {
        self.order_number = Some(order_number);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::{CookieSelection, PackLineItem};
    use crate::domain::catalog::PackOption;
    use crate::domain::foundation::{FlavorId, PackOptionId};

    fn customer() -> CustomerDetails {
        CustomerDetails::new(
            "Jamie",
            "Rivera",
            "jamie@example.com",
            "555-0134",
            "12 Main St",
            "Springfield",
            "62704",
        )
        .unwrap()
    }

    fn cart_with_one_pack() -> Cart {
        let pack = PackOption::new(
            PackOptionId::new("4pack").unwrap(),
            "4-Pack",
            Money::from_dollars(18.99),
            4,
        )
        .unwrap();
        let mut cart = Cart::new();
        cart.add_line_item(LineItem::Pack(PackLineItem::from_pack(
            &pack,
            vec![CookieSelection {
                id: FlavorId::new(1),
                name: "Grandma's Chocolate Chip".to_string(),
                quantity: 4,
            }],
        )));
        cart
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result = CustomerDetails::new(
            "Jamie",
            "Rivera",
            "",
            "555-0134",
            "12 Main St",
            "Springfield",
            "62704",
        );
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField { field }) if field == "email"
        ));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let details = customer();
        assert!(details.delivery_date.is_none());
        assert!(details.special_instructions.is_none());
    }

    #[test]
    fn payload_captures_cart_totals() {
        let cart = cart_with_one_pack();
        let payload = OrderPayload::new(customer(), &cart);

        assert_eq!(payload.total_items, 1);
        assert_eq!(payload.total_value, Money::from_dollars(18.99));
        assert_eq!(payload.items.len(), 1);
        assert!(payload.order_number.is_none());
    }

    #[test]
    fn payload_serializes_with_flattened_customer_fields() {
        let cart = cart_with_one_pack();
        let payload = OrderPayload::new(
            customer().with_delivery_date("2026-08-14"),
            &cart,
        );
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["firstName"], "Jamie");
        assert_eq!(json["deliveryAddress"], "12 Main St");
        assert_eq!(json["deliveryDate"], "2026-08-14");
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["totalValue"], 18.99);
        assert!(json["orderDate"].is_string());
        assert!(json.get("orderNumber").is_none());
    }

    #[test]
    fn with_order_number_attaches_number() {
        let cart = cart_with_one_pack();
        let number = OrderNumber::new("CC-12345678").unwrap();
        let payload = OrderPayload::new(customer(), &cart).with_order_number(number.clone());
        assert_eq!(payload.order_number, Some(number));
    }
}
