use serde::{Deserialize, Serialize};

pub type CustomerID = i64;
pub type ProductID = i64;

/// A product line item inside a shopcart.
///
/// `instock` and `wishlist` travel as native JSON booleans. Responses that
/// encode them as strings are rejected rather than guessed at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerID>,

    pub product_id: ProductID,

    pub product_name: String,

    /// Nullable in the service's model; absent or `null` reads as `None`.
    #[serde(default)]
    pub quantity: Option<i64>,

    pub price: f64,

    pub instock: bool,

    pub wishlist: bool,
}

/// A single JSON scalar taken from user-entered text.
///
/// Text that spells an integer, a finite number or a boolean literal is sent
/// as that JSON type; anything else goes out as the raw string so the server
/// can reject it with its own message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WireValue {
    Integer(i64),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl WireValue {
    pub fn from_text(text: &str) -> Self {
        if let Ok(n) = text.parse::<i64>() {
            return WireValue::Integer(n);
        }
        if let Ok(n) = text.parse::<f64>() {
            if n.is_finite() {
                return WireValue::Number(n);
            }
        }
        match text {
            "true" => WireValue::Bool(true),
            "false" => WireValue::Bool(false),
            _ => WireValue::Text(text.to_string()),
        }
    }
}

/// Request body for the add and update product endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub customer_id: WireValue,
    pub product_id: WireValue,
    pub product_name: String,
    pub quantity: WireValue,
    pub price: WireValue,
    pub instock: WireValue,
    pub wishlist: WireValue,
}
