//! Environment settings for the admin binary.
//!
//! Values come from the process environment, optionally populated from a `.env`
//! file. Every setting has a default except the login credentials.

use crate::api::LoginRequest;
use std::path::PathBuf;

/// Storefront backend used when `STOREFRONT_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Catalog file used when `CATALOG_CONFIG` is not set
pub const DEFAULT_CATALOG_CONFIG: &str = "config.toml";

/// Base URL of the storefront API, without a trailing slash.
#[must_use]
pub fn api_url() -> String {
    api_url_from(std::env::var("STOREFRONT_API_URL").ok())
}

/// Path of the catalog configuration file.
#[must_use]
pub fn catalog_config_path() -> PathBuf {
    catalog_config_path_from(std::env::var("CATALOG_CONFIG").ok())
}

/// Credentials for checking the login endpoint at startup.
///
/// Returns `None` unless both `STOREFRONT_EMAIL` and `STOREFRONT_PASSWORD` are set.
#[must_use]
pub fn login_credentials() -> Option<LoginRequest> {
    credentials_from(
        std::env::var("STOREFRONT_EMAIL").ok(),
        std::env::var("STOREFRONT_PASSWORD").ok(),
    )
}

fn api_url_from(raw: Option<String>) -> String {
    raw.map_or_else(
        || DEFAULT_API_URL.to_string(),
        |url| url.trim_end_matches('/').to_string(),
    )
}

fn catalog_config_path_from(raw: Option<String>) -> PathBuf {
    raw.map_or_else(|| PathBuf::from(DEFAULT_CATALOG_CONFIG), PathBuf::from)
}

fn credentials_from(email: Option<String>, password: Option<String>) -> Option<LoginRequest> {
    Some(LoginRequest {
        email: email?,
        password: password?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_defaults_and_trims_trailing_slash() {
        assert_eq!(api_url_from(None), DEFAULT_API_URL);
        assert_eq!(
            api_url_from(Some("https://shop.example.com/api/".to_string())),
            "https://shop.example.com/api"
        );
        assert_eq!(
            api_url_from(Some("https://shop.example.com/api".to_string())),
            "https://shop.example.com/api"
        );
    }

    #[test]
    fn test_catalog_config_path_defaults() {
        assert_eq!(catalog_config_path_from(None), PathBuf::from("config.toml"));
        assert_eq!(
            catalog_config_path_from(Some("/etc/shop/catalog.toml".to_string())),
            PathBuf::from("/etc/shop/catalog.toml")
        );
    }

    #[test]
    fn test_credentials_need_both_values() {
        let email = || Some("admin@example.com".to_string());
        let password = || Some("hunter2".to_string());

        assert_eq!(
            credentials_from(email(), password()),
            Some(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "hunter2".to_string(),
            })
        );
        assert!(credentials_from(email(), None).is_none());
        assert!(credentials_from(None, password()).is_none());
        assert!(credentials_from(None, None).is_none());
    }
}
