use serde::{Deserialize, Serialize};

use super::{product::Product, CustomerID};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Shopcart {
    pub customer_id: CustomerID,

    #[serde(default)]
    pub product_list: Vec<Product>,
}

/// Request body for `POST /shopcarts`. New carts always start empty.
#[derive(Serialize, Debug, Default)]
pub struct NewShopcart {
    pub product_list: Vec<Product>,
}
