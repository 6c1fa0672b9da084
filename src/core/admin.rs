//! Admin state - The single state container behind the back-office screens.
//!
//! `AdminState` owns the book and user controllers together with the dashboard data.
//! Rendering code reads from it (or subscribes to the controllers) and feeds user
//! actions back through its methods; it never keeps record state of its own.

use super::{
    dashboard::{self, DashboardStats},
    edit::FormController,
    forms::{BookForm, FormRecord, UserForm},
    pagination::Pager,
    preview::{FileReader, PreviewPipeline},
    search,
    store::EntityStore,
};
use crate::{
    config::catalog::{BookConfig, CatalogConfig, UserConfig},
    entities::{Book, Order, SalesPoint, User},
    errors::Result,
};
use std::sync::Arc;
use tracing::info;

/// Back-office state for one admin session
pub struct AdminState {
    books: FormController<Book>,
    users: FormController<User>,
    book_pager: Pager,
    user_pager: Pager,
    orders: Vec<Order>,
    sales: Vec<SalesPoint>,
    recent_limit: usize,
}

fn seed_book(id: i64, seed: &BookConfig) -> Result<Book> {
    let form = BookForm {
        title: seed.title.clone(),
        author: seed.author.clone(),
        price: seed.price,
        stock: seed.stock,
    };
    let mut book = Book::create(id, form, seed.src_url.clone())?;
    book.product.discount = seed.discount;
    book.product.rating = seed.rating;
    Ok(book)
}

fn seed_user(id: i64, seed: &UserConfig) -> Result<User> {
    let form = UserForm {
        name: seed.name.clone(),
        email: seed.email.clone(),
        role: seed.role,
    };
    User::create(id, form, seed.avatar.clone())
}

impl AdminState {
    /// Builds the admin state from `config`, seeding books and users in file order.
    /// Both image forms read selected files through `reader`.
    ///
    /// # Errors
    /// Returns a validation error if a seeded book or user is invalid.
    pub fn from_config(config: &CatalogConfig, reader: Arc<dyn FileReader>) -> Result<Self> {
        let mut books = FormController::new(
            EntityStore::default(),
            PreviewPipeline::new(Arc::clone(&reader)),
        );
        for seed in &config.books {
            let book = seed_book(books.store().next_id(), seed)?;
            books.insert(book)?;
        }

        let mut users = FormController::new(EntityStore::default(), PreviewPipeline::new(reader));
        for seed in &config.users {
            let user = seed_user(users.store().next_id(), seed)?;
            users.insert(user)?;
        }

        info!(
            books = books.store().len(),
            users = users.store().len(),
            orders = config.orders.len(),
            "Seeded admin state from configuration"
        );

        let per_page = config.admin.items_per_page;
        Ok(Self {
            books,
            users,
            book_pager: Pager::new(per_page),
            user_pager: Pager::new(per_page),
            orders: config.orders.clone(),
            sales: config.sales.clone(),
            recent_limit: config.admin.recent_orders,
        })
    }

    /// Book create/edit controller
    #[must_use]
    pub const fn books(&self) -> &FormController<Book> {
        &self.books
    }

    /// Mutable book controller, for form actions
    pub const fn books_mut(&mut self) -> &mut FormController<Book> {
        &mut self.books
    }

    /// User create/edit controller
    #[must_use]
    pub const fn users(&self) -> &FormController<User> {
        &self.users
    }

    /// Mutable user controller, for form actions
    pub const fn users_mut(&mut self) -> &mut FormController<User> {
        &mut self.users
    }

    /// Pager of the books table
    pub const fn book_pager_mut(&mut self) -> &mut Pager {
        &mut self.book_pager
    }

    /// Pager of the users table
    pub const fn user_pager_mut(&mut self) -> &mut Pager {
        &mut self.user_pager
    }

    /// Books on the current page after applying the search box `query`.
    /// The page is clamped to the number of matches, so a narrow search never lands
    /// past its last page.
    #[must_use]
    pub fn visible_books(&self, query: &str) -> Vec<&Book> {
        let matches = search::filter(self.books.store().records(), query);
        let mut pager = self.book_pager;
        pager.clamp(matches.len());
        pager.page_slice(&matches).to_vec()
    }

    /// Users on the current page after applying the search box `query`.
    #[must_use]
    pub fn visible_users(&self, query: &str) -> Vec<&User> {
        let matches = search::filter(self.users.store().records(), query);
        let mut pager = self.user_pager;
        pager.clamp(matches.len());
        pager.page_slice(&matches).to_vec()
    }

    /// Deletes a book and keeps the books table on a valid page.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::RecordNotFound`] for an unknown id.
    pub fn delete_book(&mut self, id: i64) -> Result<()> {
        self.books.delete(id)?;
        self.book_pager.clamp(self.books.store().len());
        Ok(())
    }

    /// Deletes a user and keeps the users table on a valid page.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::RecordNotFound`] for an unknown id.
    pub fn delete_user(&mut self, id: i64) -> Result<()> {
        self.users.delete(id)?;
        self.user_pager.clamp(self.users.store().len());
        Ok(())
    }

    /// Dashboard cards
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(
            &self.orders,
            self.books.store().records(),
            self.users.store().records(),
        )
    }

    /// Rows of the recent orders table
    #[must_use]
    pub fn recent_orders(&self) -> Vec<&Order> {
        dashboard::recent_orders(&self.orders, self.recent_limit)
    }

    /// Sales chart data
    #[must_use]
    pub fn sales(&self) -> &[SalesPoint] {
        &self.sales
    }
}
