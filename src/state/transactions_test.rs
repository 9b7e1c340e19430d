use super::*;

fn transaction(id: i64, method: PaymentMethod, status: TransactionStatus) -> Transaction {
    Transaction {
        id,
        amount: 35.0,
        payment_method: method,
        status,
        created_at: "2024-05-01 12:00:00".to_owned(),
        transfer_title: Some(format!("ZAM-{id}")),
        items: Vec::new(),
        user_id: None,
        username: None,
        email: None,
    }
}

// =============================================================
// Labels
// =============================================================

#[test]
fn status_labels_are_polish() {
    assert_eq!(status_label(TransactionStatus::Pending), "Oczekująca");
    assert_eq!(status_label(TransactionStatus::Approved), "Zatwierdzona");
    assert_eq!(status_label(TransactionStatus::Cancelled), "Anulowana");
}

#[test]
fn unknown_status_gets_plain_badge() {
    assert_eq!(status_badge_class(TransactionStatus::Unknown), "status-badge");
    assert_eq!(status_badge_class(TransactionStatus::Approved), "status-badge approved");
}

#[test]
fn payment_method_labels() {
    assert_eq!(payment_method_label(PaymentMethod::Offline), "Przelew bankowy");
    assert_eq!(payment_method_label(PaymentMethod::Stripe), "Karta płatnicza (Stripe)");
    assert_eq!(admin_payment_method_label(PaymentMethod::Stripe), "Stripe");
}

#[test]
fn format_amount_drops_trailing_zero() {
    assert_eq!(format_amount(35.0), "35 zł");
    assert_eq!(format_amount(35.5), "35.5 zł");
}

// =============================================================
// Admin actions
// =============================================================

#[test]
fn pending_offers_approve_and_cancel() {
    let actions = available_actions(TransactionStatus::Pending);
    assert_eq!(actions, &[StatusAction::Approve, StatusAction::Cancel]);
    assert_eq!(actions[0].target(), TransactionStatus::Approved);
    assert_eq!(actions[1].target(), TransactionStatus::Cancelled);
}

#[test]
fn settled_rows_offer_reset() {
    for status in [TransactionStatus::Approved, TransactionStatus::Cancelled] {
        assert_eq!(available_actions(status), &[StatusAction::Reset]);
    }
    assert_eq!(StatusAction::Reset.target(), TransactionStatus::Pending);
    assert!(available_actions(TransactionStatus::Unknown).is_empty());
}

#[test]
fn transfer_instructions_only_for_pending_offline() {
    assert!(needs_transfer_instructions(&transaction(1, PaymentMethod::Offline, TransactionStatus::Pending)));
    assert!(!needs_transfer_instructions(&transaction(2, PaymentMethod::Offline, TransactionStatus::Approved)));
    assert!(!needs_transfer_instructions(&transaction(3, PaymentMethod::Stripe, TransactionStatus::Pending)));
}

#[test]
fn shop_bank_details_carry_title() {
    assert_eq!(shop_bank_details("ZAM-7").transfer_title, "ZAM-7");
}

// =============================================================
// TransactionsState
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = TransactionsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn loaded_ok_stores_items() {
    let mut state = TransactionsState::default();
    state.loaded(Ok(vec![transaction(1, PaymentMethod::Stripe, TransactionStatus::Approved)]), HISTORY_LOAD_FAILED);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn loaded_err_uses_fallback() {
    let mut state = TransactionsState::default();
    state.loaded(Err(ApiError::Status { status: 500, message: None }), ADMIN_LOAD_FAILED);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(ADMIN_LOAD_FAILED));
}

#[test]
fn apply_status_updates_only_matching_row() {
    let mut state = TransactionsState::default();
    state.loaded(
        Ok(vec![
            transaction(1, PaymentMethod::Offline, TransactionStatus::Pending),
            transaction(2, PaymentMethod::Offline, TransactionStatus::Pending),
        ]),
        ADMIN_LOAD_FAILED,
    );

    assert!(state.apply_status(2, TransactionStatus::Approved));

    assert_eq!(state.items[0].status, TransactionStatus::Pending);
    assert_eq!(state.items[1].status, TransactionStatus::Approved);
    assert!(!state.apply_status(99, TransactionStatus::Cancelled));
}
