//! Storefront API - Wire types and the HTTP client for the auth and catalog endpoints.

/// `StorefrontApi` trait and its reqwest implementation
pub mod client;
/// Request/response bodies
pub mod types;

pub use client::{HttpStorefrontApi, StorefrontApi, sign_in};
pub use types::{
    ApiEnvelope, AuthSession, LoginRequest, LoginResponse, NewProduct, ProductQuery,
    RegisterRequest, RegisterResponse,
};
