//! Book entity - A product sold in the store, with an author and stock level.
//!
//! Books are managed from the admin "Books" screen. The admin form edits title,
//! author, price, stock and cover; discount and rating are carried over untouched.

use super::{Product, Record};
use serde::{Deserialize, Serialize};

/// A book in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog fields shared with every product
    #[serde(flatten)]
    pub product: Product,
    /// Author name
    pub author: String,
    /// Units in stock
    pub stock: u32,
}

impl Book {
    /// Title of the underlying product
    #[must_use]
    pub fn title(&self) -> &str {
        &self.product.title
    }

    /// Base price of the underlying product
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.product.price
    }

    /// Cover image reference
    #[must_use]
    pub fn cover(&self) -> Option<&str> {
        self.product.src_url.as_deref()
    }
}

impl Record for Book {
    const KIND: &'static str = "book";

    fn id(&self) -> i64 {
        self.product.id
    }
}
