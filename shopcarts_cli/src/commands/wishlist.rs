use clap::Args;
use shopcarts_lib::{FormField, ProductForm};

#[derive(Args)]
pub struct WishlistArgs {
    /// Customer whose wishlisted products are listed
    #[arg(long, default_value = "")]
    pub customer_id: String,
}

impl WishlistArgs {
    pub fn fill(&self, form: &mut ProductForm) {
        form.set(FormField::CustomerId, self.customer_id.as_str());
    }
}
