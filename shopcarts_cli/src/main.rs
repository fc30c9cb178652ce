mod commands;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopcarts_lib::{Action, Binder, ClientConfig};

use crate::commands::products::{ProductArgs, ProductKeyArgs};
use crate::commands::shopcarts::CustomerArgs;
use crate::commands::wishlist::WishlistArgs;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "shopcarts")]
#[command(about = "Manage shopcarts through the shopcarts REST service")]
struct Cli {
    /// Output format: table, json, csv, markdown, or html
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Service base URL (overrides SHOPCARTS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty shopcart
    Create,
    /// List all shopcarts
    List,
    /// Retrieve a shopcart and its products
    Get(CustomerArgs),
    /// Delete a shopcart
    Delete(CustomerArgs),
    /// Add a product to a shopcart
    AddProduct(ProductArgs),
    /// Create or replace a product in a shopcart
    UpdateProduct(ProductArgs),
    /// Retrieve one product of a shopcart
    GetProduct(ProductKeyArgs),
    /// Remove a product from a shopcart
    DeleteProduct(ProductKeyArgs),
    /// Flip the wishlist flag of a product
    ToggleWishlist(ProductKeyArgs),
    /// List the wishlisted products of a shopcart
    Wishlist(WishlistArgs),
    /// Check that the service is up
    Health,
}

impl Commands {
    /// Writes the command's arguments into the form and names the action to run.
    fn prepare(&self, binder: &mut Binder) -> Action {
        let form = binder.form_mut();
        match self {
            Commands::Create => Action::Create,
            Commands::List => Action::ListShopcarts,
            Commands::Get(args) => {
                args.fill(form);
                Action::Retrieve
            }
            Commands::Delete(args) => {
                args.fill(form);
                Action::DeleteShopcart
            }
            Commands::AddProduct(args) => {
                args.fill(form);
                Action::AddProduct
            }
            Commands::UpdateProduct(args) => {
                args.fill(form);
                Action::Update
            }
            Commands::GetProduct(args) => {
                args.fill(form);
                Action::RetrieveProduct
            }
            Commands::DeleteProduct(args) => {
                args.fill(form);
                Action::DeleteProduct
            }
            Commands::ToggleWishlist(args) => {
                args.fill(form);
                Action::ToggleWishlist
            }
            Commands::Wishlist(args) => {
                args.fill(form);
                Action::ListWishlist
            }
            Commands::Health => Action::Health,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shopcarts=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let config = ClientConfig::from_env().with_base_url(cli.base_url.as_deref());
    tracing::debug!("Using shopcarts service at {}", config.base_url);
    let mut binder = Binder::new(config.client());

    let action = cli.command.prepare(&mut binder);
    let failed = commands::run_action(&mut binder, action, &format).await?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
