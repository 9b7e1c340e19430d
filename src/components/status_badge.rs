//! Colored badge for a transaction's review status.

use leptos::prelude::*;

use crate::net::types::TransactionStatus;
use crate::state::transactions::{status_badge_class, status_label};

#[component]
pub fn StatusBadge(status: TransactionStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status_label(status)}</span> }
}
