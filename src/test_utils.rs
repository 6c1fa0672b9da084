//! Shared test utilities for the storefront admin layer.
//!
//! This module provides fixture records matching the admin panel's starting data and a
//! file reader whose reads complete only when the test says so.

use crate::{
    core::{
        edit::FormController,
        forms::{BookForm, UserForm},
        preview::{FileReader, PreviewPipeline},
        store::EntityStore,
    },
    entities::{Book, Order, OrderStatus, Product, Role, SalesPoint, User},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A catalog product without discount or rating.
pub fn sample_product(id: i64, price: f64) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        src_url: None,
        price,
        discount: None,
        rating: None,
    }
}

/// A book with the given title and price, 10 in stock.
pub fn sample_book(id: i64, title: &str, price: f64) -> Book {
    Book {
        product: Product {
            title: title.to_string(),
            ..sample_product(id, price)
        },
        author: "Test Author".to_string(),
        stock: 10,
    }
}

/// The two books the admin panel starts with (ids 1 and 2).
pub fn book_store() -> EntityStore<Book> {
    EntityStore::new(vec![
        Book {
            author: "F. Scott Fitzgerald".to_string(),
            stock: 45,
            ..sample_book(1, "The Great Gatsby", 12.99)
        },
        Book {
            author: "Harper Lee".to_string(),
            stock: 32,
            ..sample_book(2, "To Kill a Mockingbird", 10.99)
        },
    ])
    .expect("fixture ids are unique")
}

/// A customer account named `name`.
pub fn sample_user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("user{id}@example.com"),
        role: Role::User,
        avatar: None,
    }
}

/// The two users the admin panel starts with: John Doe (admin, id 1) and Jane Smith (id 2).
pub fn user_store() -> EntityStore<User> {
    EntityStore::new(vec![
        User {
            email: "john@example.com".to_string(),
            role: Role::Admin,
            ..sample_user(1, "John Doe")
        },
        User {
            email: "jane@example.com".to_string(),
            ..sample_user(2, "Jane Smith")
        },
    ])
    .expect("fixture ids are unique")
}

/// Valid book form values with the given title.
pub fn book_form(title: &str) -> BookForm {
    BookForm {
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        price: 9.99,
        stock: 3,
    }
}

/// Valid user form values with the given name.
pub fn user_form(name: &str) -> UserForm {
    UserForm {
        name: name.to_string(),
        email: "someone@example.com".to_string(),
        role: Role::User,
    }
}

/// Book controller over [`book_store`].
pub fn book_controller(reader: Arc<dyn FileReader>) -> FormController<Book> {
    init_test_tracing();
    FormController::new(book_store(), PreviewPipeline::new(reader))
}

/// User controller over [`user_store`].
pub fn user_controller(reader: Arc<dyn FileReader>) -> FormController<User> {
    init_test_tracing();
    FormController::new(user_store(), PreviewPipeline::new(reader))
}

fn order(id: &str, customer: &str, total: f64, status: OrderStatus, day: u32) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        total,
        status,
        date: NaiveDate::from_ymd_opt(2023, 6, day).unwrap_or_default(),
    }
}

/// Three orders on different days, not sorted by date.
pub fn sample_orders() -> Vec<Order> {
    vec![
        order("ORD-001", "John Doe", 149.0, OrderStatus::Fulfilled, 12),
        order("ORD-002", "Jane Smith", 89.0, OrderStatus::Pending, 11),
        order("ORD-003", "Robert Johnson", 239.0, OrderStatus::Processing, 13),
    ]
}

/// Monthly sales for the first quarter.
pub fn sample_sales() -> Vec<SalesPoint> {
    [("Jan", 4000.0), ("Feb", 3000.0), ("Mar", 5000.0)]
        .into_iter()
        .map(|(month, total)| SalesPoint {
            month: month.to_string(),
            total,
        })
        .collect()
}

/// Reply a test sends through a gate
pub type GateReply = io::Result<Vec<u8>>;

/// File reader whose reads block until the test opens the matching gate.
///
/// Reading a path without a gate fails with `NotFound`.
#[derive(Default)]
pub struct GatedReader {
    gates: Mutex<HashMap<PathBuf, oneshot::Receiver<GateReply>>>,
}

impl GatedReader {
    /// Registers a gate for `path`; the read of `path` completes with what is sent.
    pub fn gate(&self, path: impl Into<PathBuf>) -> oneshot::Sender<GateReply> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), rx);
        tx
    }
}

#[async_trait]
impl FileReader for GatedReader {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let gate = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(io::Error::other("gate dropped"))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no gate for {}", path.display()),
            )),
        }
    }
}
