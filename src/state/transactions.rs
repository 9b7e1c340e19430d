//! Transaction history and admin review state.
//!
//! DESIGN
//! ======
//! Both the history page and the admin panel render the same `Transaction`
//! rows; labels, badge classes, and the admin action set live here so the
//! two views stay consistent.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::error::ApiError;
use crate::net::types::{BankDetails, PaymentMethod, Transaction, TransactionStatus};

pub const HISTORY_LOAD_FAILED: &str = "Nie udało się pobrać historii transakcji";
pub const ADMIN_LOAD_FAILED: &str = "Nie udało się pobrać transakcji";
pub const STATUS_UPDATE_FAILED: &str = "Nie udało się zaktualizować statusu transakcji";

#[must_use]
pub fn status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "Oczekująca",
        TransactionStatus::Approved => "Zatwierdzona",
        TransactionStatus::Cancelled => "Anulowana",
        TransactionStatus::Unknown => "Nieznany",
    }
}

#[must_use]
pub fn status_badge_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "status-badge pending",
        TransactionStatus::Approved => "status-badge approved",
        TransactionStatus::Cancelled => "status-badge cancelled",
        TransactionStatus::Unknown => "status-badge",
    }
}

/// Label used on the customer's history page.
#[must_use]
pub fn payment_method_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Offline => "Przelew bankowy",
        PaymentMethod::Stripe => "Karta płatnicza (Stripe)",
        PaymentMethod::Unknown => "Inna",
    }
}

/// Shorter label for the admin table.
#[must_use]
pub fn admin_payment_method_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Offline => "Przelew bankowy",
        PaymentMethod::Stripe | PaymentMethod::Unknown => "Stripe",
    }
}

/// `35` -> `"35 zł"`, `35.5` -> `"35.5 zł"`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount} zł")
}

/// Pending bank transfers still need the payment instructions.
#[must_use]
pub fn needs_transfer_instructions(transaction: &Transaction) -> bool {
    transaction.payment_method == PaymentMethod::Offline && transaction.status == TransactionStatus::Pending
}

/// Shop bank account shown next to pending bank transfers.
#[must_use]
pub fn shop_bank_details(transfer_title: &str) -> BankDetails {
    BankDetails {
        account_number: "PL 12 3456 7890 1234 5678 9012 3456".to_owned(),
        bank_name: "Example Bank".to_owned(),
        recipient: "Gamer Shop Sp. z o.o.".to_owned(),
        transfer_title: transfer_title.to_owned(),
    }
}

/// Admin review action on one transaction row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusAction {
    Approve,
    Cancel,
    Reset,
}

impl StatusAction {
    #[must_use]
    pub fn target(self) -> TransactionStatus {
        match self {
            Self::Approve => TransactionStatus::Approved,
            Self::Cancel => TransactionStatus::Cancelled,
            Self::Reset => TransactionStatus::Pending,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Zatwierdź",
            Self::Cancel => "Anuluj",
            Self::Reset => "Resetuj",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Approve => "approve-btn",
            Self::Cancel => "cancel-btn",
            Self::Reset => "reset-btn",
        }
    }
}

/// Pending rows can be approved or cancelled; settled rows can be reset.
#[must_use]
pub fn available_actions(status: TransactionStatus) -> &'static [StatusAction] {
    match status {
        TransactionStatus::Pending => &[StatusAction::Approve, StatusAction::Cancel],
        TransactionStatus::Approved | TransactionStatus::Cancelled => &[StatusAction::Reset],
        TransactionStatus::Unknown => &[],
    }
}

/// Listing state for either transactions page.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionsState {
    pub items: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl TransactionsState {
    /// Apply a fetch result; failures become `fallback` (or the server's message).
    pub fn loaded(&mut self, result: Result<Vec<Transaction>, ApiError>, fallback: &str) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("transaction fetch failed: {e}");
                self.error = Some(e.user_message(fallback));
            }
        }
    }

    /// Reflect a successful status update in the matching row.
    pub fn apply_status(&mut self, transaction_id: i64, status: TransactionStatus) -> bool {
        let Some(row) = self.items.iter_mut().find(|t| t.id == transaction_id) else {
            return false;
        };
        row.status = status;
        true
    }
}
