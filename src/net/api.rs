//! REST API client for the blog/shop backend.
//!
//! Client-side (hydrate): real credentialed HTTP calls via `gloo-net`, so the
//! browser attaches the session cookie to every request.
//! Server-side (SSR) and native tests: calls fail with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; a non-2xx answer carries the
//! body's `message`/`error` field so views can show the server's wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    CheckoutRequest, CheckoutSession, LoginRequest, OfflinePayment, OfflinePaymentRequest, RegisterRequest,
    StatusUpdate, Transaction, TransactionList, TransactionStatus, UserEnvelope, UserPayload,
};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Backend calls that change or reveal session state.
///
/// Implemented by [`HttpApi`] in the browser and by fakes in tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /api/user`: the authoritative identity behind the session cookie.
    async fn fetch_user(&self) -> Result<UserPayload, ApiError>;

    /// `POST /api/login`.
    async fn login(&self, request: &LoginRequest) -> Result<UserPayload, ApiError>;

    /// `POST /api/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<UserPayload, ApiError>;

    /// `POST /api/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Third-party identity providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }
}

fn oauth_login_path(provider: OAuthProvider) -> String {
    format!("/api/login/{}", provider.slug())
}

fn admin_transaction_path(transaction_id: i64) -> String {
    format!("/api/admin/transactions/{transaction_id}")
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

/// Credentialed HTTP client bound to the configured backend origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ClientConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full-page redirect target that starts the provider's OAuth flow.
    #[must_use]
    pub fn oauth_login_url(&self, provider: OAuthProvider) -> String {
        self.config.endpoint(&oauth_login_path(provider))
    }

    /// `GET /api/transactions`: the current user's orders.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let list: TransactionList = self.call_json(Method::Get, "/api/transactions", None).await?;
        Ok(list.transactions)
    }

    /// `GET /api/admin/transactions`: every order, with buyer details.
    pub async fn fetch_admin_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let list: TransactionList = self.call_json(Method::Get, "/api/admin/transactions", None).await?;
        Ok(list.transactions)
    }

    /// `PUT /api/admin/transactions/:id` with the new status.
    pub async fn update_transaction_status(&self, transaction_id: i64, status: TransactionStatus) -> Result<(), ApiError> {
        let body = encode_body(&StatusUpdate { status })?;
        self.call(Method::Put, &admin_transaction_path(transaction_id), Some(body)).await
    }

    /// `POST /api/create-checkout-session`: returns the hosted payment page URL.
    pub async fn create_checkout_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, ApiError> {
        self.call_json(Method::Post, "/api/create-checkout-session", Some(encode_body(request)?)).await
    }

    /// `POST /api/create-offline-payment`: registers a bank-transfer order.
    pub async fn create_offline_payment(&self, request: &OfflinePaymentRequest) -> Result<OfflinePayment, ApiError> {
        self.call_json(Method::Post, "/api/create-offline-payment", Some(encode_body(request)?)).await
    }

    async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(method, path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn call(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send(method, path, body).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        use super::types::ErrorBody;

        let url = self.config.endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        }
        .credentials(RequestCredentials::Include);
        let sent = match body {
            Some(body) => builder.json(&body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
            None => builder.header("Content-Type", "application/json").send().await,
        };
        let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let message = resp.json::<ErrorBody>().await.ok().and_then(ErrorBody::into_message);
            return Err(ApiError::Status { status: resp.status(), message });
        }
        Ok(resp)
    }
}

impl AuthApi for HttpApi {
    async fn fetch_user(&self) -> Result<UserPayload, ApiError> {
        let probe = self.call_json::<UserEnvelope>(Method::Get, "/api/user", None);
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let millis = u32::try_from(self.config.probe_timeout.as_millis()).unwrap_or(u32::MAX);
            let probe = std::pin::pin!(probe);
            let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(millis));
            match select(probe, timer).await {
                Either::Left((result, _)) => result.map(|envelope| envelope.user),
                Either::Right(_) => Err(ApiError::Timeout),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            probe.await.map(|envelope| envelope.user)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<UserPayload, ApiError> {
        let envelope: UserEnvelope = self.call_json(Method::Post, "/api/login", Some(encode_body(request)?)).await?;
        Ok(envelope.user)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<UserPayload, ApiError> {
        let envelope: UserEnvelope = self.call_json(Method::Post, "/api/register", Some(encode_body(request)?)).await?;
        Ok(envelope.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.call(Method::Post, "/api/logout", None).await
    }
}
