use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use shopcarts_lib::types::{Product, Shopcart};
use shopcarts_lib::{FormField, ProductForm, Results, ViewModel};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "html" => OutputFormat::Html,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct FormRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Element")]
    #[serde(rename = "Element")]
    element_id: &'static str,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "Product ID")]
    #[serde(rename = "Product ID")]
    product_id: i64,
    #[tabled(rename = "Product Name")]
    #[serde(rename = "Product Name")]
    product_name: String,
    #[tabled(rename = "Quantity")]
    #[serde(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "In Stock")]
    #[serde(rename = "In Stock")]
    instock: bool,
    #[tabled(rename = "Wishlist")]
    #[serde(rename = "Wishlist")]
    wishlist: bool,
}

#[derive(Tabled, Serialize)]
struct ShopcartRow {
    #[tabled(rename = "Customer ID")]
    #[serde(rename = "Customer ID")]
    customer_id: i64,
    #[tabled(rename = "Products")]
    #[serde(rename = "Products")]
    products: usize,
    #[tabled(rename = "Product Names")]
    #[serde(rename = "Product Names")]
    product_names: String,
}

// -- Row builders --

fn build_form_rows(form: &ProductForm) -> Vec<FormRow> {
    FormField::ALL
        .iter()
        .map(|f| FormRow {
            label: f.label(),
            element_id: f.element_id(),
            value: form.get(*f).to_string(),
        })
        .collect()
}

fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            product_id: p.product_id,
            product_name: p.product_name.clone(),
            quantity: p.quantity.map(|q| q.to_string()).unwrap_or_default(),
            price: format_price(p.price),
            instock: p.instock,
            wishlist: p.wishlist,
        })
        .collect()
}

fn build_shopcart_rows(carts: &[Shopcart]) -> Vec<ShopcartRow> {
    carts
        .iter()
        .map(|c| ShopcartRow {
            customer_id: c.customer_id,
            products: c.product_list.len(),
            product_names: c
                .product_list
                .iter()
                .map(|p| p.product_name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

// -- Table and markdown output --

fn styled(mut table: Table, markdown: bool) -> String {
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

/// Form table followed by the results table, if there is one.
fn render_tables(view: &ViewModel, markdown: bool) -> String {
    let mut out = styled(Table::new(build_form_rows(&view.form)), markdown);
    let results = match &view.results {
        Results::Empty => None,
        Results::Products { items, .. } => Some(Table::new(build_product_rows(items))),
        Results::Shopcarts(carts) => Some(Table::new(build_shopcart_rows(carts))),
    };
    if let Some(table) = results {
        out.push_str("\n\n");
        out.push_str(&styled(table, markdown));
    }
    out
}

// -- CSV output --

/// Results rows, or the form as a single record when there are no results.
fn write_csv<W: Write>(view: &ViewModel, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    match &view.results {
        Results::Empty => wtr.serialize(&view.form)?,
        Results::Products { items, .. } => {
            for row in build_product_rows(items) {
                wtr.serialize(row)?;
            }
        }
        Results::Shopcarts(carts) => {
            for row in build_shopcart_rows(carts) {
                wtr.serialize(row)?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints the view in `format`. The flash message goes to stderr except in
/// JSON output, where it is part of the document.
pub fn print_view(view: &ViewModel, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_tables(view, false)),
        OutputFormat::Markdown => println!("{}", render_tables(view, true)),
        OutputFormat::Csv => write_csv(view, std::io::stdout())?,
        OutputFormat::Html => {
            if let Some(html) = view.results.to_html()? {
                println!("{}", html);
            }
        }
        OutputFormat::Json => {
            print_json(view);
            return Ok(());
        }
    }
    if let Some(flash) = &view.flash {
        eprintln!("{}", flash);
    }
    Ok(())
}

fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
