//! Page actions: one button press, one request.

use shopcarts_api::types::{Health, Product, Shopcart};
use shopcarts_api::{Client, WishlistQuery};

use crate::error::ShopcartsError;
use crate::form::ProductForm;

/// A button on the admin page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    ListShopcarts,
    Retrieve,
    DeleteShopcart,
    AddProduct,
    Update,
    RetrieveProduct,
    DeleteProduct,
    ToggleWishlist,
    ListWishlist,
    Health,
    /// Resets the form without touching the server.
    Clear,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::ListShopcarts => "list",
            Action::Retrieve => "retrieve",
            Action::DeleteShopcart => "delete",
            Action::AddProduct => "add-product",
            Action::Update => "update",
            Action::RetrieveProduct => "retrieve-product",
            Action::DeleteProduct => "delete-product",
            Action::ToggleWishlist => "toggle-wishlist",
            Action::ListWishlist => "wishlist",
            Action::Health => "health",
            Action::Clear => "clear",
        }
    }
}

/// What was deleted by a successful delete action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Shopcart,
    Product,
}

/// Parsed payload of a successful action.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Created(Shopcart),
    Shopcart(Shopcart),
    Shopcarts(Vec<Shopcart>),
    Product(Product),
    Wishlist(Vec<Product>),
    Deleted(DeleteTarget),
    Health(Health),
    Cleared,
}

pub type Outcome = Result<Response, ShopcartsError>;

/// Runs `action` against the service, reading ids and fields from `form`.
///
/// Issues at most one request and never retries.
pub async fn perform(client: &Client, action: Action, form: &ProductForm) -> Outcome {
    let customer_id = form.customer_id.as_str();
    let product_id = form.product_id.as_str();
    tracing::debug!(
        "{}: customer_id={:?} product_id={:?}",
        action.name(),
        customer_id,
        product_id
    );

    let result = match action {
        Action::Create => client.create_shopcart().await.map(Response::Created),
        Action::ListShopcarts => client.list_shopcarts().await.map(Response::Shopcarts),
        Action::Retrieve => client.get_shopcart(customer_id).await.map(Response::Shopcart),
        Action::DeleteShopcart => client
            .delete_shopcart(customer_id)
            .await
            .map(|()| Response::Deleted(DeleteTarget::Shopcart)),
        Action::AddProduct => client
            .add_product(customer_id, &form.collect())
            .await
            .map(Response::Product),
        Action::Update => client
            .update_product(customer_id, product_id, &form.collect())
            .await
            .map(Response::Product),
        Action::RetrieveProduct => client
            .get_product(customer_id, product_id)
            .await
            .map(Response::Product),
        Action::DeleteProduct => client
            .delete_product(customer_id, product_id)
            .await
            .map(|()| Response::Deleted(DeleteTarget::Product)),
        Action::ToggleWishlist => client
            .reverse_wishlist(customer_id, product_id)
            .await
            .map(Response::Product),
        Action::ListWishlist => client
            .list_wishlist(&WishlistQuery::new(customer_id))
            .await
            .map(Response::Wishlist),
        Action::Health => client.healthcheck().await.map(Response::Health),
        Action::Clear => return Ok(Response::Cleared),
    };

    result.map_err(ShopcartsError::from)
}
