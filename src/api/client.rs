//! HTTP client for the storefront backend (register, login, catalog).

use super::types::{
    ApiEnvelope, AuthSession, LoginRequest, LoginResponse, NewProduct, ProductQuery,
    RegisterRequest, RegisterResponse,
};
use crate::{
    entities::Product,
    errors::{Error, Result},
};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

/// Operations the admin layer needs from the storefront backend.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `POST register`
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;

    /// `POST login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// `POST addProduct`
    async fn add_product(&self, product: &NewProduct) -> Result<ApiEnvelope<Product>>;

    /// `POST getProducts`
    async fn get_products(&self, query: &ProductQuery) -> Result<ApiEnvelope<Vec<Product>>>;

    /// `GET getProduct/{id}`
    async fn get_product(&self, id: i64) -> Result<ApiEnvelope<Product>>;
}

/// Logs in and keeps the issued token.
///
/// # Errors
/// Returns whatever the login call returns.
pub async fn sign_in(api: &dyn StorefrontApi, request: &LoginRequest) -> Result<AuthSession> {
    let response = api.login(request).await?;
    let session = AuthSession::from(response.data);
    info!(
        user = %session.user.email,
        role = %session.user.role,
        expires = %session.expires,
        "Signed in to storefront API"
    );
    Ok(session)
}

/// [`StorefrontApi`] over HTTP with JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpStorefrontApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStorefrontApi {
    /// Creates a client for the API rooted at `base_url`, e.g. `http://localhost:8000/api`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Full URL of `path`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        decode(response).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(Into::into);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.post("register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post("login", request).await
    }

    async fn add_product(&self, product: &NewProduct) -> Result<ApiEnvelope<Product>> {
        self.post("addProduct", product).await
    }

    async fn get_products(&self, query: &ProductQuery) -> Result<ApiEnvelope<Vec<Product>>> {
        self.post("getProducts", query).await
    }

    async fn get_product(&self, id: i64) -> Result<ApiEnvelope<Product>> {
        self.get(&format!("getProduct/{id}")).await
    }
}
