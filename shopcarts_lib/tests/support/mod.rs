//! In-process stand-in for the shopcarts service, backed by a map.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use shopcarts_lib::types::{Product, Shopcart};

#[derive(Default)]
struct Store {
    next_id: i64,
    carts: BTreeMap<i64, Vec<Product>>,
}

type Shared = Arc<Mutex<Store>>;
type Reply = Result<Response, Response>;

fn error(status: StatusCode, message: String) -> Response {
    let body = json!({
        "status_code": status.as_u16(),
        "error": status.canonical_reason().unwrap_or_default(),
        "message": message,
    });
    (status, Json(body)).into_response()
}

fn parse_id(raw: &str, what: &str) -> Result<i64, Response> {
    raw.parse().map_err(|_| {
        error(
            StatusCode::NOT_FOUND,
            format!("{} with id '{}' was not found.", what, raw),
        )
    })
}

fn cart_not_found(id: i64) -> Response {
    error(
        StatusCode::NOT_FOUND,
        format!("Shopcart with id '{}' was not found.", id),
    )
}

fn product_not_found(id: i64) -> Response {
    error(
        StatusCode::NOT_FOUND,
        format!("Product with id '{}' was not found.", id),
    )
}

fn to_cart(id: i64, products: &[Product]) -> Shopcart {
    Shopcart {
        customer_id: id,
        product_list: products.to_vec(),
    }
}

fn product_from_body(
    customer_id: i64,
    product_id: i64,
    mut body: Value,
) -> Result<Product, Response> {
    if let Some(obj) = body.as_object_mut() {
        obj.insert("customer_id".into(), json!(customer_id));
        obj.insert("product_id".into(), json!(product_id));
    }
    serde_json::from_value(body).map_err(|e| {
        error(
            StatusCode::BAD_REQUEST,
            format!("Invalid product: {}", e),
        )
    })
}

async fn healthcheck() -> Response {
    Json(json!({"status": 200, "message": "Healthy"})).into_response()
}

async fn create_shopcart(State(store): State<Shared>) -> Response {
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;
    store.carts.insert(id, Vec::new());
    (StatusCode::CREATED, Json(to_cart(id, &[]))).into_response()
}

async fn list_shopcarts(State(store): State<Shared>) -> Response {
    let store = store.lock().unwrap();
    let carts: Vec<Shopcart> = store
        .carts
        .iter()
        .map(|(id, products)| to_cart(*id, products))
        .collect();
    Json(carts).into_response()
}

async fn get_shopcart(State(store): State<Shared>, Path(customer_id): Path<String>) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    let store = store.lock().unwrap();
    let products = store.carts.get(&id).ok_or_else(|| cart_not_found(id))?;
    Ok(Json(to_cart(id, products)).into_response())
}

async fn delete_shopcart(State(store): State<Shared>, Path(customer_id): Path<String>) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    store.lock().unwrap().carts.remove(&id);
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn add_product(
    State(store): State<Shared>,
    Path(customer_id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    let product_id = body
        .get("product_id")
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                "Invalid product: missing product_id".into(),
            )
        })?;
    let product = product_from_body(id, product_id, body)?;
    let mut store = store.lock().unwrap();
    let products = store.carts.get_mut(&id).ok_or_else(|| cart_not_found(id))?;
    products.retain(|p| p.product_id != product_id);
    products.push(product.clone());
    Ok((StatusCode::CREATED, Json(product)).into_response())
}

async fn get_product(
    State(store): State<Shared>,
    Path((customer_id, product_id)): Path<(String, String)>,
) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    let pid = parse_id(&product_id, "Product")?;
    let store = store.lock().unwrap();
    let products = store.carts.get(&id).ok_or_else(|| cart_not_found(id))?;
    let product = products
        .iter()
        .find(|p| p.product_id == pid)
        .ok_or_else(|| product_not_found(pid))?;
    Ok(Json(product).into_response())
}

/// Upserts the product, creating the cart on first use.
async fn update_product(
    State(store): State<Shared>,
    Path((customer_id, product_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    let pid = parse_id(&product_id, "Product")?;
    let product = product_from_body(id, pid, body)?;
    let mut store = store.lock().unwrap();
    let products = store.carts.entry(id).or_default();
    match products.iter_mut().find(|p| p.product_id == pid) {
        Some(existing) => *existing = product.clone(),
        None => products.push(product.clone()),
    }
    Ok(Json(product).into_response())
}

async fn delete_product(
    State(store): State<Shared>,
    Path((customer_id, product_id)): Path<(String, String)>,
) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    let pid = parse_id(&product_id, "Product")?;
    if let Some(products) = store.lock().unwrap().carts.get_mut(&id) {
        products.retain(|p| p.product_id != pid);
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn reverse_wishlist(
    State(store): State<Shared>,
    Path((customer_id, product_id)): Path<(String, String)>,
) -> Reply {
    let id = parse_id(&customer_id, "Shopcart")?;
    let pid = parse_id(&product_id, "Product")?;
    let mut store = store.lock().unwrap();
    let products = store.carts.get_mut(&id).ok_or_else(|| cart_not_found(id))?;
    let product = products
        .iter_mut()
        .find(|p| p.product_id == pid)
        .ok_or_else(|| product_not_found(pid))?;
    product.wishlist = !product.wishlist;
    Ok(Json(product.clone()).into_response())
}

async fn list_wishlist(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    let raw = params.get("customer-id").ok_or_else(|| {
        error(
            StatusCode::BAD_REQUEST,
            "Missing customer-id query parameter".into(),
        )
    })?;
    let id = parse_id(raw, "Shopcart")?;
    let store = store.lock().unwrap();
    let products = store.carts.get(&id).ok_or_else(|| cart_not_found(id))?;
    let wished: Vec<Product> = products.iter().filter(|p| p.wishlist).cloned().collect();
    Ok(Json(wished).into_response())
}

fn router() -> Router {
    let store: Shared = Arc::new(Mutex::new(Store::default()));
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .route("/shopcarts", get(list_shopcarts).post(create_shopcart))
        .route("/shopcarts/wishlist", get(list_wishlist))
        .route(
            "/shopcarts/{customer_id}",
            get(get_shopcart).delete(delete_shopcart),
        )
        .route(
            "/shopcarts/{customer_id}/products",
            axum::routing::post(add_product),
        )
        .route(
            "/shopcarts/{customer_id}/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route(
            "/shopcarts/{customer_id}/products/{product_id}/reversewishlist",
            put(reverse_wishlist),
        )
        .with_state(store)
}

/// Starts a fresh service on a random local port and returns its base URL.
pub async fn spawn_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    format!("http://{}", addr)
}
