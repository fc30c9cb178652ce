//! Query builder for the wishlist listing endpoint.

use url::Url;

use super::common::Query;

/// Query parameter key used by `GET /shopcarts/wishlist`.
///
/// The service spells it with a hyphen even though the JSON field is
/// `customer_id`. Probably a server-side defect; kept as-is on the wire.
pub const CUSTOMER_ID_PARAM: &str = "customer-id";

/// Selects the wishlisted products of one shopcart.
///
/// The customer id is carried as raw text and is not validated before
/// sending.
#[derive(Clone, Debug, Default)]
pub struct WishlistQuery {
    pub customer_id: String,
}

impl WishlistQuery {
    pub fn new(customer_id: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
        }
    }
}

impl Query for WishlistQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(CUSTOMER_ID_PARAM, &self.customer_id);
        url
    }
}
