/// Catalog seed data and admin settings from config.toml
pub mod catalog;

/// Environment settings (API URL, config path, login credentials)
pub mod settings;
