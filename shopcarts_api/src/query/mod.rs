mod common;
pub use self::common::Query;

mod wishlist;
pub use self::wishlist::WishlistQuery;
