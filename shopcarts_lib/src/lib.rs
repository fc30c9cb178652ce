//! View-binding layer for the shopcarts admin page.
//!
//! Maps a fixed set of named form fields to and from the `shopcarts_api`
//! payloads, renders list responses as HTML tables, and keeps the page
//! state in an explicit [`ViewModel`] that is only changed by applying the
//! outcome of one [`Action`].

pub mod action;
pub mod binder;
pub mod config;
pub mod error;
pub mod form;
pub mod render;
pub mod view;

pub use shopcarts_api;
pub use shopcarts_api::types;
pub use shopcarts_api::{Client, WishlistQuery};

pub use action::{Action, DeleteTarget, Outcome, Response};
pub use binder::Binder;
pub use config::ClientConfig;
pub use error::ShopcartsError;
pub use form::{FormField, ProductForm};
pub use view::{ProductView, Results, ViewModel};
