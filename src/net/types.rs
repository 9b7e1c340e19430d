//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly (snake_case for most bodies,
//! camelCase for the checkout payloads the payment endpoints expect).
//! Optional fields default so partial bodies still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::{AuthMethod, Identity};

/// `user` object returned by `/api/user`, `/api/login`, `/api/register`,
/// and embedded in the session token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
    #[serde(default)]
    pub auth_method: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl UserPayload {
    /// Convert to an [`Identity`]; a missing `auth_method` means `fallback`.
    #[must_use]
    pub fn into_identity(self, fallback: AuthMethod) -> Identity {
        let auth_method = match self.auth_method.as_deref() {
            Some(raw) if !raw.trim().is_empty() => AuthMethod::parse(Some(raw)),
            _ => fallback,
        };
        Identity { username: self.username, auth_method, is_admin: self.is_admin.unwrap_or(false) }
    }
}

/// `{ "user": { ... } }`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserEnvelope {
    pub user: UserPayload,
}

/// Decoded middle segment of the session token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserPayload,
}

/// Error body: login/register use `message`, payment endpoints use `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Review state of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment through the hosted checkout page.
    #[default]
    Stripe,
    /// Manual bank transfer approved by an administrator.
    Offline,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: i64,
    pub product_name: String,
    pub product_price: f64,
    pub quantity: u32,
}

/// One order. `username`/`email` are only present in the admin listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: TransactionStatus,
    pub created_at: String,
    #[serde(default)]
    pub transfer_title: Option<String>,
    #[serde(default)]
    pub items: Vec<TransactionItem>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransactionList {
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: TransactionStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceData {
    pub currency: String,
    pub product_data: ProductData,
    /// Price in grosze.
    pub unit_amount: u64,
}

/// Payment-processor line item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub price_data: PriceData,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub line_items: Vec<LineItem>,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflinePaymentRequest {
    pub line_items: Vec<LineItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BankDetails {
    pub account_number: String,
    pub bank_name: String,
    pub recipient: String,
    pub transfer_title: String,
}

/// Response of `/api/create-offline-payment`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OfflinePayment {
    #[serde(default)]
    pub transaction_id: Option<i64>,
    pub amount: f64,
    pub bank_details: BankDetails,
}
