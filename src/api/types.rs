//! Request and response bodies of the storefront API.
//!
//! Every response is wrapped in a `{ message, data }` envelope. The auth bodies
//! mirror the backend's register and login endpoints; the catalog bodies carry
//! [`Product`] values.

use crate::entities::{Discount, Product, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `{ message, data }` wrapper around every response
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Human readable status message
    pub message: String,
    /// Payload
    pub data: T,
}

/// Body of `POST login`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST register`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Account email
    pub email: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
    /// Display name
    pub name: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// User as returned by the login endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Role name; the backend may send roles this client does not know
    pub role: String,
    /// Whether the email address was confirmed
    pub is_email_verified: bool,
}

/// Bearer token issued on login
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    /// Opaque token value
    pub token: String,
    /// Expiry instant
    pub expires: DateTime<Utc>,
}

/// `data` of a login response
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// The signed-in user
    pub user: AuthUser,
    /// Token for authenticated calls
    pub access_token: AccessToken,
}

/// Response of `POST login`
pub type LoginResponse = ApiEnvelope<LoginData>;

/// User as returned by the register endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Assigned role
    pub role: Role,
    /// Postal address, if given
    #[serde(default)]
    pub address: Option<String>,
    /// Phone number, if given
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the email address was confirmed
    pub is_email_verified: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// `data` of a register response
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterData {
    /// The new account
    pub user: RegisteredUser,
}

/// Response of `POST register`
pub type RegisterResponse = ApiEnvelope<RegisterData>;

/// Body of `POST getProducts`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProductQuery {
    /// Free-text filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

/// Body of `POST addProduct`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display title
    pub title: String,
    /// Base price
    pub price: f64,
    /// Image reference, e.g. a data URL from the preview pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_url: Option<String>,
    /// Optional discount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl From<&Product> for NewProduct {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            src_url: product.src_url.clone(),
            discount: product.discount,
        }
    }
}

/// Signed-in state kept after a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    /// Who is signed in
    pub user: AuthUser,
    /// Bearer token
    pub token: String,
    /// When the token stops working
    pub expires: DateTime<Utc>,
}

impl From<LoginData> for AuthSession {
    fn from(data: LoginData) -> Self {
        Self {
            user: data.user,
            token: data.access_token.token,
            expires: data.access_token.expires,
        }
    }
}

impl AuthSession {
    /// Whether the token has expired at `now`
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires
    }
}
