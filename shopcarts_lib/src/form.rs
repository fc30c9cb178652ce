//! The product form: seven named text fields mirrored to and from the API.

use serde::Serialize;
use shopcarts_api::types::{Product, ProductUpdate, Shopcart, WireValue};

/// One named input of the product form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    CustomerId,
    ProductId,
    ProductName,
    Quantity,
    Price,
    Instock,
    Wishlist,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::CustomerId,
        FormField::ProductId,
        FormField::ProductName,
        FormField::Quantity,
        FormField::Price,
        FormField::Instock,
        FormField::Wishlist,
    ];

    /// Element id of the input on the admin page.
    pub fn element_id(self) -> &'static str {
        match self {
            FormField::CustomerId => "customer_id",
            FormField::ProductId => "product_id",
            FormField::ProductName => "product_name",
            FormField::Quantity => "product_quantity",
            FormField::Price => "product_price",
            FormField::Instock => "instock",
            FormField::Wishlist => "wishlist",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::CustomerId => "Customer ID",
            FormField::ProductId => "Product ID",
            FormField::ProductName => "Product Name",
            FormField::Quantity => "Quantity",
            FormField::Price => "Price",
            FormField::Instock => "Instock",
            FormField::Wishlist => "Wishlist",
        }
    }
}

/// Current text of every form field. Nothing here is validated: whatever is
/// typed is what gets sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProductForm {
    pub customer_id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub price: String,
    pub instock: String,
    pub wishlist: String,
}

/// Form text for a flag.
pub fn flag_text(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

impl ProductForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CustomerId => &self.customer_id,
            FormField::ProductId => &self.product_id,
            FormField::ProductName => &self.product_name,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price,
            FormField::Instock => &self.instock,
            FormField::Wishlist => &self.wishlist,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::CustomerId => self.customer_id = value,
            FormField::ProductId => self.product_id = value,
            FormField::ProductName => self.product_name = value,
            FormField::Quantity => self.quantity = value,
            FormField::Price => self.price = value,
            FormField::Instock => self.instock = value,
            FormField::Wishlist => self.wishlist = value,
        }
    }

    /// Builder-style [`ProductForm::set`].
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reads the form into an add/update request body.
    pub fn collect(&self) -> ProductUpdate {
        ProductUpdate {
            customer_id: WireValue::from_text(&self.customer_id),
            product_id: WireValue::from_text(&self.product_id),
            product_name: self.product_name.clone(),
            quantity: WireValue::from_text(&self.quantity),
            price: WireValue::from_text(&self.price),
            instock: WireValue::from_text(&self.instock),
            wishlist: WireValue::from_text(&self.wishlist),
        }
    }

    /// Writes every field of `product` into the form.
    ///
    /// Products returned without a `customer_id` leave the current one in
    /// place, since the request that fetched them was addressed by it.
    pub fn populate(&mut self, product: &Product) {
        if let Some(customer_id) = product.customer_id {
            self.customer_id = customer_id.to_string();
        }
        self.product_id = product.product_id.to_string();
        self.product_name = product.product_name.clone();
        self.quantity = product
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_default();
        self.price = product.price.to_string();
        self.instock = flag_text(product.instock).to_string();
        self.wishlist = flag_text(product.wishlist).to_string();
    }

    /// Writes the shopcart's id; product fields are left untouched.
    pub fn populate_customer(&mut self, shopcart: &Shopcart) {
        self.customer_id = shopcart.customer_id.to_string();
    }

    /// Shows a retrieved shopcart: its id, with every product field reset.
    /// Flags read `"false"` since the cart carries none.
    pub fn populate_shopcart(&mut self, shopcart: &Shopcart) {
        *self = ProductForm {
            customer_id: shopcart.customer_id.to_string(),
            instock: flag_text(false).to_string(),
            wishlist: flag_text(false).to_string(),
            ..ProductForm::default()
        };
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = ProductForm::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            customer_id: Some(7),
            product_id: 3,
            product_name: "Mug".to_string(),
            quantity: Some(2),
            price: 9.99,
            instock: true,
            wishlist: false,
        }
    }

    fn filled_form() -> ProductForm {
        ProductForm::default()
            .with(FormField::CustomerId, "7")
            .with(FormField::ProductId, "3")
            .with(FormField::ProductName, "Mug")
            .with(FormField::Quantity, "2")
            .with(FormField::Price, "9.99")
            .with(FormField::Instock, "true")
            .with(FormField::Wishlist, "false")
    }

    #[test]
    fn element_ids_match_page() {
        let ids: Vec<&str> = FormField::ALL.iter().map(|f| f.element_id()).collect();
        assert_eq!(
            ids,
            vec![
                "customer_id",
                "product_id",
                "product_name",
                "product_quantity",
                "product_price",
                "instock",
                "wishlist"
            ]
        );
    }

    #[test]
    fn set_and_get_every_field() {
        let mut form = ProductForm::default();
        for (i, field) in FormField::ALL.iter().enumerate() {
            form.set(*field, format!("v{}", i));
        }
        for (i, field) in FormField::ALL.iter().enumerate() {
            assert_eq!(form.get(*field), format!("v{}", i));
        }
    }

    #[test]
    fn populate_is_identity_mapping() {
        let mut form = ProductForm::default();
        form.populate(&mug());
        assert_eq!(form, filled_form());
    }

    #[test]
    fn populate_normalizes_flags() {
        let mut product = mug();
        product.instock = false;
        product.wishlist = true;
        let mut form = ProductForm::default();
        form.populate(&product);
        assert_eq!(form.instock, "false");
        assert_eq!(form.wishlist, "true");
    }

    #[test]
    fn populate_keeps_customer_when_absent() {
        let mut product = mug();
        product.customer_id = None;
        let mut form = ProductForm::default().with(FormField::CustomerId, "12");
        form.populate(&product);
        assert_eq!(form.customer_id, "12");
        assert_eq!(form.product_id, "3");
    }

    #[test]
    fn populate_customer_only_touches_id() {
        let mut form = ProductForm::default().with(FormField::ProductName, "Mug");
        form.populate_customer(&Shopcart {
            customer_id: 9,
            product_list: vec![],
        });
        assert_eq!(form.customer_id, "9");
        assert_eq!(form.product_name, "Mug");
    }

    #[test]
    fn populate_shopcart_resets_product_fields() {
        let mut form = filled_form();
        form.populate_shopcart(&Shopcart {
            customer_id: 9,
            product_list: vec![mug()],
        });
        assert_eq!(form.customer_id, "9");
        assert_eq!(form.product_id, "");
        assert_eq!(form.product_name, "");
        assert_eq!(form.quantity, "");
        assert_eq!(form.price, "");
        assert_eq!(form.instock, "false");
        assert_eq!(form.wishlist, "false");
    }

    #[test]
    fn populate_without_quantity_leaves_it_blank() {
        let mut product = mug();
        product.quantity = None;
        let mut form = filled_form();
        form.populate(&product);
        assert_eq!(form.quantity, "");
        assert_eq!(form.product_name, "Mug");
    }

    #[test]
    fn collect_maps_text_to_wire() {
        let body = filled_form().collect();
        assert_eq!(body.customer_id, WireValue::Integer(7));
        assert_eq!(body.product_id, WireValue::Integer(3));
        assert_eq!(body.product_name, "Mug");
        assert_eq!(body.quantity, WireValue::Integer(2));
        assert_eq!(body.price, WireValue::Number(9.99));
        assert_eq!(body.instock, WireValue::Bool(true));
        assert_eq!(body.wishlist, WireValue::Bool(false));
    }

    #[test]
    fn collect_forwards_unvalidated_text() {
        let body = ProductForm::default()
            .with(FormField::Quantity, "lots")
            .collect();
        assert_eq!(body.quantity, WireValue::Text("lots".to_string()));
        assert_eq!(body.customer_id, WireValue::Text(String::new()));
    }

    #[test]
    fn clear_empties_every_field() {
        let mut form = filled_form();
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, ProductForm::default());
    }
}
