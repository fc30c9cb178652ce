//! HTML table rendering for list results.
//!
//! A table is a list of columns, each with header text, a width and a function
//! pulling the cell text out of one row. Cell text is escaped by the writer.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use shopcarts_api::types::{Product, Shopcart};

use crate::error::ShopcartsError;
use crate::form::flag_text;

/// One column of a results table.
pub struct Column<T> {
    pub header: &'static str,
    /// CSS width, e.g. `"10%"`.
    pub width: &'static str,
    pub value: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(header: &'static str, width: &'static str, value: fn(&T) -> String) -> Self {
        Self {
            header,
            width,
            value,
        }
    }
}

fn product_id(p: &Product) -> String {
    p.product_id.to_string()
}

fn product_name(p: &Product) -> String {
    p.product_name.clone()
}

fn quantity(p: &Product) -> String {
    p.quantity.map(|q| q.to_string()).unwrap_or_default()
}

fn price(p: &Product) -> String {
    p.price.to_string()
}

fn instock(p: &Product) -> String {
    flag_text(p.instock).to_string()
}

fn wishlist(p: &Product) -> String {
    flag_text(p.wishlist).to_string()
}

fn customer_id(s: &Shopcart) -> String {
    s.customer_id.to_string()
}

fn product_count(s: &Shopcart) -> String {
    s.product_list.len().to_string()
}

fn product_names(s: &Shopcart) -> String {
    s.product_list
        .iter()
        .map(|p| p.product_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Products of a retrieved shopcart.
pub const SHOPCART_PRODUCT_COLUMNS: &[Column<Product>] = &[
    Column::new("Product ID", "5%", product_id),
    Column::new("Product Name", "5%", product_name),
    Column::new("Quantity", "5%", quantity),
    Column::new("Price", "5%", price),
    Column::new("Instock Status", "5%", instock),
    Column::new("Wishlist Status", "5%", wishlist),
];

/// Wishlisted products of a shopcart.
pub const WISHLIST_COLUMNS: &[Column<Product>] = &[
    Column::new("Product ID", "10%", product_id),
    Column::new("Product Name", "15%", product_name),
    Column::new("Quantity", "15%", quantity),
    Column::new("Price", "15%", price),
    Column::new("In Stock", "15%", instock),
    Column::new("Wishlist", "10%", wishlist),
];

/// All shopcarts known to the service.
pub const SHOPCART_COLUMNS: &[Column<Shopcart>] = &[
    Column::new("Customer ID", "10%", customer_id),
    Column::new("Products", "10%", product_count),
    Column::new("Product Names", "80%", product_names),
];

/// Renders `rows` as `<table>` markup: one header row, one `<tr>` per row.
pub fn render_table<T>(columns: &[Column<T>], rows: &[T]) -> Result<String, ShopcartsError> {
    let buf = write_table(columns, rows).map_err(|e| ShopcartsError::Render(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ShopcartsError::Render(e.to_string()))
}

fn write_table<T>(columns: &[Column<T>], rows: &[T]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Start(
        BytesStart::new("table")
            .with_attributes([("class", "table-striped"), ("cellpadding", "10")]),
    ))?;

    writer.write_event(Event::Start(BytesStart::new("tr")))?;
    for column in columns {
        let style = format!("width:{}", column.width);
        writer.write_event(Event::Start(
            BytesStart::new("th").with_attributes([("style", style.as_str())]),
        ))?;
        writer.write_event(Event::Text(BytesText::new(column.header)))?;
        writer.write_event(Event::End(BytesEnd::new("th")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("tr")))?;

    for row in rows {
        writer.write_event(Event::Start(BytesStart::new("tr")))?;
        for column in columns {
            let text = (column.value)(row);
            writer.write_event(Event::Start(BytesStart::new("td")))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new("td")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("tr")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(writer.into_inner().into_inner())
}
