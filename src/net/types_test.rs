use super::*;

// =============================================================
// UserPayload
// =============================================================

#[test]
fn user_envelope_decodes_probe_body() {
    let body = r#"{"user":{"username":"bob","auth_method":"github","is_admin":true}}"#;
    let envelope: UserEnvelope = serde_json::from_str(body).unwrap();
    let identity = envelope.user.into_identity(AuthMethod::Local);
    assert_eq!(identity.username, "bob");
    assert_eq!(identity.auth_method, AuthMethod::Github);
    assert!(identity.is_admin);
}

#[test]
fn register_body_without_method_uses_fallback() {
    let envelope: UserEnvelope = serde_json::from_str(r#"{"user":{"username":"carol"}}"#).unwrap();
    let identity = envelope.user.into_identity(AuthMethod::Local);
    assert_eq!(identity.auth_method, AuthMethod::Local);
    assert!(!identity.is_admin);
}

#[test]
fn session_claims_token_optional() {
    let claims: SessionClaims = serde_json::from_str(r#"{"user":{"username":"dave","auth_method":"google"}}"#).unwrap();
    assert!(claims.token.is_none());
    assert_eq!(claims.user.username, "dave");
}

#[test]
fn error_body_prefers_message_over_error() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"m","error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), Some("m".to_owned()));
    let body: ErrorBody = serde_json::from_str(r#"{"error":"e"}"#).unwrap();
    assert_eq!(body.into_message(), Some("e".to_owned()));
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn transaction_list_decodes_user_listing() {
    let body = r#"{"transactions":[{
        "id": 7, "amount": 55.0, "payment_method": "offline", "status": "pending",
        "created_at": "2025-05-01 12:00:00", "transfer_title": "PAYMENT-AB12CD34",
        "items": [{"id": 1, "product_name": "Gamingowy Kubek", "product_price": 15.0, "quantity": 1}]
    }]}"#;
    let list: TransactionList = serde_json::from_str(body).unwrap();
    let tx = &list.transactions[0];
    assert_eq!(tx.payment_method, PaymentMethod::Offline);
    assert_eq!(tx.status, TransactionStatus::Pending);
    assert_eq!(tx.items.len(), 1);
    assert!(tx.username.is_none());
}

#[test]
fn unknown_status_is_preserved_as_unknown() {
    let status: TransactionStatus = serde_json::from_str("\"refunded\"").unwrap();
    assert_eq!(status, TransactionStatus::Unknown);
}

#[test]
fn status_update_serializes_lowercase() {
    let body = serde_json::to_value(StatusUpdate { status: TransactionStatus::Approved }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "approved" }));
}

// =============================================================
// Checkout payloads
// =============================================================

#[test]
fn checkout_request_uses_camel_case_keys() {
    let body = serde_json::to_value(CheckoutRequest {
        line_items: Vec::new(),
        success_url: "s".to_owned(),
        cancel_url: "c".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "lineItems": [], "successUrl": "s", "cancelUrl": "c" }));
}

#[test]
fn offline_payment_decodes_bank_details() {
    let body = r#"{
        "message": "ok", "transaction_id": 3, "transfer_title": "PAYMENT-1", "amount": 35.0,
        "bank_details": {"account_number": "PL 12", "bank_name": "Example Bank",
                         "recipient": "Gamer Shop Sp. z o.o.", "transfer_title": "PAYMENT-1"}
    }"#;
    let payment: OfflinePayment = serde_json::from_str(body).unwrap();
    assert_eq!(payment.transaction_id, Some(3));
    assert_eq!(payment.bank_details.transfer_title, "PAYMENT-1");
}
