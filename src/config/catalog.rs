//! Catalog configuration loading from config.toml
//!
//! The admin panel starts from the books, users, orders and sales figures listed in
//! `config.toml`. Books and users are seeded into their stores in file order and get
//! identifiers the same way records created from the admin forms do.

use crate::{
    core::pagination::DEFAULT_ITEMS_PER_PAGE,
    entities::{Discount, Order, Role, SalesPoint},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Admin panel settings
    #[serde(default)]
    pub admin: AdminSettings,
    /// Books to seed
    #[serde(default)]
    pub books: Vec<BookConfig>,
    /// Users to seed
    #[serde(default)]
    pub users: Vec<UserConfig>,
    /// Orders shown on the dashboard
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Sales chart data
    #[serde(default)]
    pub sales: Vec<SalesPoint>,
}

/// `[admin]` table
#[derive(Debug, Deserialize)]
pub struct AdminSettings {
    /// Rows per page in the admin tables
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Rows in the dashboard's recent orders table
    #[serde(default = "default_recent_orders")]
    pub recent_orders: usize,
}

const fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

const fn default_recent_orders() -> usize {
    5
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            recent_orders: default_recent_orders(),
        }
    }
}

/// A book to seed
#[derive(Debug, Deserialize, Clone)]
pub struct BookConfig {
    /// Title
    pub title: String,
    /// Author
    pub author: String,
    /// Base price in dollars
    pub price: f64,
    /// Units in stock
    #[serde(default)]
    pub stock: u32,
    /// Cover image reference
    #[serde(default)]
    pub src_url: Option<String>,
    /// Optional discount
    #[serde(default)]
    pub discount: Option<Discount>,
    /// Optional rating out of 5
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A user to seed
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Role, `user` when omitted
    #[serde(default)]
    pub role: Role,
    /// Profile picture reference
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Parses catalog configuration from TOML text.
///
/// # Errors
/// Returns an error if the TOML is invalid or `items_per_page` is zero.
pub fn parse_config(contents: &str) -> Result<CatalogConfig> {
    let config: CatalogConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if config.admin.items_per_page == 0 {
        return Err(Error::Config {
            message: "admin.items_per_page must be at least 1".to_string(),
        });
    }

    Ok(config)
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path = path.as_ref();
    tracing::debug!("Attempting to load catalog configuration from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}
