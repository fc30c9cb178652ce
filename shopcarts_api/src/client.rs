//! HTTP client for the shopcarts REST service.

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{Query, WishlistQuery},
    types::{ErrorBody, Health, NewShopcart, Product, ProductUpdate, Shopcart},
    Error,
};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client for the shopcarts service.
///
/// Every call is a single request: no retries, no explicit timeout, and no
/// validation of the ids it is handed. Ids are raw text inserted as
/// percent-encoded path segments, so an empty id produces an empty segment
/// and the server decides what that means.
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:8080`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at a locally running service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str], query: Option<&dyn Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Sends one request and returns the raw body of a successful response.
    async fn execute<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String, Error>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!("{} {}", method, url);
        let mut request = self
            .http
            .request(method, url)
            .header("content-type", "application/json")
            .header("accept", "application/json");
        if let Some(body) = body {
            let json = serde_json::to_string(body).map_err(|e| {
                tracing::error!("Failed to serialize request body: {}", e);
                Error::RequestFailed
            })?;
            request = request.body(json);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            let snippet = truncate_body(&body);
            tracing::warn!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message,
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn send<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.execute(method, url, body).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    /// Creates an empty shopcart; the server assigns its `customer_id`.
    pub async fn create_shopcart(&self) -> Result<Shopcart, Error> {
        let url = self.get_url(&["shopcarts"], None)?;
        self.send(Method::POST, url, Some(&NewShopcart::default())).await
    }

    /// Lists every shopcart known to the service.
    pub async fn list_shopcarts(&self) -> Result<Vec<Shopcart>, Error> {
        let url = self.get_url(&["shopcarts"], None)?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// Fetches a single shopcart by customer id.
    pub async fn get_shopcart(&self, customer_id: &str) -> Result<Shopcart, Error> {
        let url = self.get_url(&["shopcarts", customer_id], None)?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// Deletes a shopcart and all of its products.
    pub async fn delete_shopcart(&self, customer_id: &str) -> Result<(), Error> {
        let url = self.get_url(&["shopcarts", customer_id], None)?;
        self.execute(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    /// Adds a product to a shopcart.
    pub async fn add_product(
        &self,
        customer_id: &str,
        product: &ProductUpdate,
    ) -> Result<Product, Error> {
        let url = self.get_url(&["shopcarts", customer_id, "products"], None)?;
        self.send(Method::POST, url, Some(product)).await
    }

    /// Writes every field of one product, creating it if absent.
    pub async fn update_product(
        &self,
        customer_id: &str,
        product_id: &str,
        product: &ProductUpdate,
    ) -> Result<Product, Error> {
        let url = self.get_url(&["shopcarts", customer_id, "products", product_id], None)?;
        self.send(Method::PUT, url, Some(product)).await
    }

    /// Fetches a single product of a shopcart.
    pub async fn get_product(&self, customer_id: &str, product_id: &str) -> Result<Product, Error> {
        let url = self.get_url(&["shopcarts", customer_id, "products", product_id], None)?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// Removes a single product from a shopcart.
    pub async fn delete_product(&self, customer_id: &str, product_id: &str) -> Result<(), Error> {
        let url = self.get_url(&["shopcarts", customer_id, "products", product_id], None)?;
        self.execute(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    /// Flips the wishlist flag of a product and returns the updated product.
    pub async fn reverse_wishlist(
        &self,
        customer_id: &str,
        product_id: &str,
    ) -> Result<Product, Error> {
        let url = self.get_url(
            &["shopcarts", customer_id, "products", product_id, "reversewishlist"],
            None,
        )?;
        self.send(Method::PUT, url, None::<&()>).await
    }

    /// Lists the wishlisted products of one shopcart.
    pub async fn list_wishlist(&self, query: &WishlistQuery) -> Result<Vec<Product>, Error> {
        let url = self.get_url(&["shopcarts", "wishlist"], Some(query))?;
        self.send(Method::GET, url, None::<&()>).await
    }

    /// Checks that the service is up.
    pub async fn healthcheck(&self) -> Result<Health, Error> {
        let url = self.get_url(&["healthcheck"], None)?;
        self.send(Method::GET, url, None::<&()>).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
