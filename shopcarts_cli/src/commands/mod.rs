//! CLI subcommand implementations.

pub mod products;
pub mod shopcarts;
pub mod wishlist;

use anyhow::Result;
use shopcarts_lib::{Action, Binder};

use crate::output::{print_view, OutputFormat};

/// Runs one action to completion and prints the resulting view.
///
/// Returns whether the action failed.
pub async fn run_action(
    binder: &mut Binder,
    action: Action,
    format: &OutputFormat,
) -> Result<bool> {
    let view = binder.run(action).await;
    print_view(view, format)?;
    Ok(view.failed)
}
