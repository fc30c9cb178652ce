use clap::Args;
use shopcarts_lib::{FormField, ProductForm};

#[derive(Args)]
pub struct CustomerArgs {
    /// Customer ID of the shopcart
    #[arg(long, default_value = "")]
    pub customer_id: String,
}

impl CustomerArgs {
    pub fn fill(&self, form: &mut ProductForm) {
        form.set(FormField::CustomerId, self.customer_id.as_str());
    }
}
