//! Admin panel: every order with approve/cancel/reset controls.
//!
//! Mounted behind `AdminRoute`, so by the time this renders the session is
//! confirmed by `/api/user` and carries the admin flag. A status change is
//! applied locally only after the backend accepts it.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::api::HttpApi;
use crate::net::types::{PaymentMethod, Transaction};
use crate::state::transactions::{
    StatusAction, TransactionsState, admin_payment_method_label, available_actions, format_amount,
};
use crate::util::lifetime::Liveness;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let state = RwSignal::new(TransactionsState::default());
    let alive = Liveness::for_current_owner();

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_admin_transactions().await;
            if alive.is_alive() {
                state.update(|s| s.loaded(result, crate::state::transactions::ADMIN_LOAD_FAILED));
            }
        });
    }

    let on_action = Callback::new(move |(transaction_id, action): (i64, StatusAction)| {
        let target = action.target();
        log::info!("setting transaction {transaction_id} to {target:?}");
        state.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = api.update_transaction_status(transaction_id, target).await;
                if !alive.is_alive() {
                    return;
                }
                state.update(|s| {
                    s.loading = false;
                    match result {
                        Ok(()) => {
                            s.apply_status(transaction_id, target);
                        }
                        Err(e) => {
                            log::warn!("status update for transaction {transaction_id} failed: {e}");
                            s.error = Some(e.user_message(crate::state::transactions::STATUS_UPDATE_FAILED));
                        }
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &alive);
            state.update(|s| s.loading = false);
        }
    });

    move || {
        let current = state.get();
        if current.loading {
            return view! {
                <div class="admin-panel">
                    <div class="loading">"Ładowanie danych..."</div>
                </div>
            }
            .into_any();
        }
        if let Some(error) = current.error {
            return view! {
                <div class="admin-panel">
                    <div class="error-message">{error}</div>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="admin-panel">
                <h1>"Panel Administratora"</h1>
                <h2>"Zarządzanie Płatnościami"</h2>
                {if current.items.is_empty() {
                    view! { <p>"Brak transakcji do wyświetlenia"</p> }.into_any()
                } else {
                    view! {
                        <div class="transactions-container">
                            <h3>"Wszystkie Transakcje"</h3>
                            <table class="transactions-table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Użytkownik"</th>
                                        <th>"Email"</th>
                                        <th>"Kwota"</th>
                                        <th>"Metoda Płatności"</th>
                                        <th>"Tytuł Przelewu"</th>
                                        <th>"Status"</th>
                                        <th>"Data"</th>
                                        <th>"Akcje"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {current.items.iter().map(|t| admin_row(t, on_action)).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        }
        .into_any()
    }
}

fn admin_row(transaction: &Transaction, on_action: Callback<(i64, StatusAction)>) -> impl IntoView {
    let id = transaction.id;
    let row_class = if transaction.payment_method == PaymentMethod::Offline { "offline-payment" } else { "" };
    let actions = available_actions(transaction.status);

    view! {
        <tr class=row_class>
            <td>{id}</td>
            <td>{transaction.username.clone().unwrap_or_default()}</td>
            <td>{transaction.email.clone().unwrap_or_default()}</td>
            <td>{format_amount(transaction.amount)}</td>
            <td>{admin_payment_method_label(transaction.payment_method)}</td>
            <td>{transaction.transfer_title.clone().unwrap_or_else(|| "-".to_owned())}</td>
            <td><StatusBadge status=transaction.status/></td>
            <td>{transaction.created_at.clone()}</td>
            <td>
                <div class="action-buttons">
                    {actions
                        .iter()
                        .map(|&action| {
                            view! {
                                <button class=action.class() on:click=move |_| on_action.run((id, action))>
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </td>
        </tr>
    }
}
