use clap::Args;
use shopcarts_lib::{FormField, ProductForm};

/// Every field of the product form. Values are sent as typed.
#[derive(Args)]
pub struct ProductArgs {
    #[arg(long, default_value = "")]
    pub customer_id: String,

    #[arg(long, default_value = "")]
    pub product_id: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub quantity: String,

    #[arg(long, default_value = "")]
    pub price: String,

    /// true or false
    #[arg(long, default_value = "")]
    pub instock: String,

    /// true or false
    #[arg(long, default_value = "")]
    pub wishlist: String,
}

impl ProductArgs {
    pub fn fill(&self, form: &mut ProductForm) {
        form.set(FormField::CustomerId, self.customer_id.as_str());
        form.set(FormField::ProductId, self.product_id.as_str());
        form.set(FormField::ProductName, self.name.as_str());
        form.set(FormField::Quantity, self.quantity.as_str());
        form.set(FormField::Price, self.price.as_str());
        form.set(FormField::Instock, self.instock.as_str());
        form.set(FormField::Wishlist, self.wishlist.as_str());
    }
}

/// Addresses one product inside a shopcart.
#[derive(Args)]
pub struct ProductKeyArgs {
    #[arg(long, default_value = "")]
    pub customer_id: String,

    #[arg(long, default_value = "")]
    pub product_id: String,
}

impl ProductKeyArgs {
    pub fn fill(&self, form: &mut ProductForm) {
        form.set(FormField::CustomerId, self.customer_id.as_str());
        form.set(FormField::ProductId, self.product_id.as_str());
    }
}
