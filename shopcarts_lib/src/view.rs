//! The page state and the pure function that advances it.

use serde::Serialize;
use shopcarts_api::types::{Product, Shopcart};

use crate::action::{DeleteTarget, Outcome, Response};
use crate::error::ShopcartsError;
use crate::form::ProductForm;
use crate::render::{
    render_table, SHOPCART_COLUMNS, SHOPCART_PRODUCT_COLUMNS, WISHLIST_COLUMNS,
};

pub const SUCCESS_MESSAGE: &str = "Success";
pub const SHOPCART_DELETED_MESSAGE: &str = "Shopcart has been Deleted!";
pub const PRODUCT_DELETED_MESSAGE: &str = "Product has been Deleted!";
pub const WISHLIST_MESSAGE: &str = "Successfully Retrieved Wishlisted Items";

/// Which column layout a product list is shown with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductView {
    Shopcart,
    Wishlist,
}

/// Contents of the search results area.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Results {
    #[default]
    Empty,
    Products {
        view: ProductView,
        items: Vec<Product>,
    },
    Shopcarts(Vec<Shopcart>),
}

impl Results {
    /// Markup for the results area, or `None` when there is nothing to show.
    pub fn to_html(&self) -> Result<Option<String>, ShopcartsError> {
        let html = match self {
            Results::Empty => return Ok(None),
            Results::Products {
                view: ProductView::Shopcart,
                items,
            } => render_table(SHOPCART_PRODUCT_COLUMNS, items)?,
            Results::Products {
                view: ProductView::Wishlist,
                items,
            } => render_table(WISHLIST_COLUMNS, items)?,
            Results::Shopcarts(carts) => render_table(SHOPCART_COLUMNS, carts)?,
        };
        Ok(Some(html))
    }
}

/// Everything the page displays: form fields, flash message, results.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ViewModel {
    pub form: ProductForm,
    pub flash: Option<String>,
    pub results: Results,
    /// Whether the last applied outcome was a failure.
    pub failed: bool,
}

impl ViewModel {
    /// Returns the view that follows `self` once `outcome` has arrived.
    ///
    /// Any failure clears the form and flashes the server's message (or the
    /// fallback text); the results area keeps whatever it showed before.
    pub fn apply(mut self, outcome: Outcome) -> ViewModel {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!("Applying failure: {}", err);
                self.form.clear();
                self.flash = Some(err.flash_message());
                self.failed = true;
                return self;
            }
        };
        self.failed = false;

        match response {
            // Creating a cart is silent: only the new id shows up.
            Response::Created(cart) => {
                tracing::info!("Created shopcart {}", cart.customer_id);
                self.form.populate_customer(&cart);
            }
            Response::Shopcart(cart) => {
                self.form.populate_shopcart(&cart);
                self.results = Results::Products {
                    view: ProductView::Shopcart,
                    items: cart.product_list,
                };
                self.flash = Some(SUCCESS_MESSAGE.to_string());
            }
            Response::Shopcarts(carts) => {
                tracing::info!("Listed {} shopcarts", carts.len());
                self.results = Results::Shopcarts(carts);
                self.flash = Some(SUCCESS_MESSAGE.to_string());
            }
            Response::Product(product) => {
                self.form.populate(&product);
                self.flash = Some(SUCCESS_MESSAGE.to_string());
            }
            Response::Wishlist(items) => {
                if let Some(first) = items.first() {
                    self.form.populate(first);
                }
                self.results = Results::Products {
                    view: ProductView::Wishlist,
                    items,
                };
                self.flash = Some(WISHLIST_MESSAGE.to_string());
            }
            Response::Deleted(DeleteTarget::Shopcart) => {
                self.form.clear();
                self.results = Results::Empty;
                self.flash = Some(SHOPCART_DELETED_MESSAGE.to_string());
            }
            Response::Deleted(DeleteTarget::Product) => {
                self.form.clear();
                self.flash = Some(PRODUCT_DELETED_MESSAGE.to_string());
            }
            Response::Health(health) => {
                self.flash = Some(health.message);
            }
            Response::Cleared => self.form.clear(),
        }
        self
    }
}
