//! Transaction history for the signed-in user.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::api::HttpApi;
use crate::net::types::{PaymentMethod, Transaction};
use crate::state::transactions::{TransactionsState, format_amount, needs_transfer_instructions, payment_method_label, shop_bank_details};
use crate::util::lifetime::Liveness;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let state = RwSignal::new(TransactionsState::default());
    let alive = Liveness::for_current_owner();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.fetch_transactions().await;
        if alive.is_alive() {
            state.update(|s| s.loaded(result, crate::state::transactions::HISTORY_LOAD_FAILED));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, alive);

    move || {
        let current = state.get();
        if current.loading {
            return view! { <div class="loading">"Ładowanie historii transakcji..."</div> }.into_any();
        }
        if let Some(error) = current.error {
            return view! { <div class="error-message">{error}</div> }.into_any();
        }
        view! {
            <div class="transaction-history">
                <h2>"Historia Transakcji"</h2>
                {if current.items.is_empty() {
                    view! { <p class="no-transactions">"Nie masz jeszcze żadnych transakcji"</p> }.into_any()
                } else {
                    view! {
                        <div class="transactions-list">
                            {current.items.iter().map(transaction_card).collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        }
        .into_any()
    }
}

fn transaction_card(transaction: &Transaction) -> impl IntoView {
    let transfer_title = transaction.transfer_title.clone().unwrap_or_default();
    let is_offline = transaction.payment_method == PaymentMethod::Offline;
    let instructions = needs_transfer_instructions(transaction).then(|| {
        let bank = shop_bank_details(&transfer_title);
        view! {
            <div class="transaction-instructions">
                <h4>"Instrukcje płatności:"</h4>
                <p>"Aby dokończyć zamówienie, wykonaj przelew na poniższe dane:"</p>
                <div class="bank-details">
                    <p><strong>"Numer konta: "</strong>{bank.account_number}</p>
                    <p><strong>"Bank: "</strong>{bank.bank_name}</p>
                    <p><strong>"Odbiorca: "</strong>{bank.recipient}</p>
                    <p><strong>"Kwota: "</strong>{format_amount(transaction.amount)}</p>
                    <p><strong>"Tytuł przelewu: "</strong>{bank.transfer_title}</p>
                </div>
            </div>
        }
    });

    view! {
        <div class="transaction-card">
            <div class="transaction-header">
                <div class="transaction-id">{format!("Zamówienie #{}", transaction.id)}</div>
                <StatusBadge status=transaction.status/>
            </div>
            <div class="transaction-details">
                <div class="transaction-info">
                    <p><strong>"Data: "</strong>{transaction.created_at.clone()}</p>
                    <p><strong>"Metoda płatności: "</strong>{payment_method_label(transaction.payment_method)}</p>
                    <p><strong>"Kwota: "</strong>{format_amount(transaction.amount)}</p>
                    {is_offline.then(|| view! { <p><strong>"Tytuł przelewu: "</strong>{transfer_title.clone()}</p> })}
                </div>
                <div class="transaction-items">
                    <h4>"Produkty:"</h4>
                    <ul>
                        {transaction
                            .items
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        {format!(
                                            "{} - {} x {}",
                                            item.product_name,
                                            format_amount(item.product_price),
                                            item.quantity,
                                        )}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            {instructions}
        </div>
    }
}
