mod meta;
pub use self::meta::{ErrorBody, Health};

mod product;
pub use self::product::{CustomerID, Product, ProductID, ProductUpdate, WireValue};

mod shopcart;
pub use self::shopcart::{NewShopcart, Shopcart};
