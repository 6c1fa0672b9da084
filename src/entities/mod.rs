//! Entity module - Contains the domain records shown by the storefront and the admin panel.
//! Books and users are held in client-side collections; products, orders and sales
//! points are read-only display data.

pub mod book;
pub mod order;
pub mod product;
pub mod sales;
pub mod user;

pub use book::Book;
pub use order::{Order, OrderStatus};
pub use product::{Discount, Product};
pub use sales::SalesPoint;
pub use user::{Role, User};

/// A record that lives in an ordered, id-addressed collection.
pub trait Record: Clone {
    /// Short name used in error messages and logs, e.g. `"book"`
    const KIND: &'static str;

    /// Identifier, unique within the record's collection
    fn id(&self) -> i64;
}
