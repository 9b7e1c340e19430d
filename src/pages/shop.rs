//! Shop page: catalogue, cart, and checkout by card or bank transfer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Card payments leave the app for the hosted checkout page, which sends the
//! browser back to `/sklep?success=true` or `/sklep?canceled=true`. The page
//! turns that flag into a notice and strips it with a replace navigation so
//! a reload does not repeat it.
//!
//! ERROR HANDLING
//! ==============
//! Any checkout failure is logged and shown as one generic message; the
//! cart is kept so the user can retry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::HttpApi;
use crate::net::types::{OfflinePayment, PaymentMethod};
use crate::state::cart::{Cart, CheckoutReturn, PRODUCTS, SHOP_PATH, checkout_return};

#[derive(Clone, Debug, PartialEq)]
enum Stage {
    Browsing,
    Checkout,
    /// Order placed; bank details are present for bank transfers.
    Complete(Option<OfflinePayment>),
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let location = use_location();
    let navigate = use_navigate();

    let cart = RwSignal::new(Cart::default());
    let stage = RwSignal::new(Stage::Browsing);
    let method = RwSignal::new(PaymentMethod::Stripe);
    let processing = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    Effect::new(move || {
        let search = location.search.get();
        let Some(outcome) = checkout_return(&search) else {
            return;
        };
        log::info!("returned from hosted checkout: {outcome:?}");
        notice.set(Some(outcome.notice().to_owned()));
        match outcome {
            CheckoutReturn::Succeeded => {
                cart.update(Cart::clear);
                stage.set(Stage::Complete(None));
            }
            CheckoutReturn::Canceled => stage.set(Stage::Browsing),
        }
        navigate(SHOP_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    let on_pay = move |_| {
        if processing.get() || cart.with(Cart::is_empty) {
            return;
        }
        processing.set(true);
        notice.set(None);
        let snapshot = cart.get();
        let chosen = method.get();

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match pay(&api, &snapshot, chosen).await {
                    Ok(Some(payment)) => {
                        cart.update(Cart::clear);
                        stage.set(Stage::Complete(Some(payment)));
                        processing.set(false);
                    }
                    // Browser is leaving for the hosted checkout page.
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("checkout failed: {e}");
                        notice.set(Some(crate::state::cart::PAYMENT_ERROR_MESSAGE.to_owned()));
                        processing.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, snapshot, chosen);
            processing.set(false);
        }
    };

    view! {
        <div class="shop-container">
            {move || match stage.get() {
                Stage::Complete(payment) => {
                    view! {
                        <div class="order-complete">
                            <h2>"Zamówienie zakończone"</h2>
                            {match payment {
                                Some(payment) => bank_transfer_summary(&payment),
                                None => view! {
                                    <p>"Dziękujemy za zakupy w naszym sklepie!"</p>
                                    <p>"Twoje zamówienie zostało przyjęte do realizacji."</p>
                                }
                                .into_any(),
                            }}
                            <div class="order-complete-buttons">
                                <button on:click=move |_| {
                                    stage.set(Stage::Browsing);
                                    notice.set(None);
                                }>"Wróć do sklepu"</button>
                                <a href="/transakcje" class="button">"Zobacz historię zamówień"</a>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                Stage::Checkout => view! {
                    <h1>"Sklep"</h1>
                    <NoticeBanner notice=notice/>
                    <div class="checkout-section">
                        <h2>"Podsumowanie zamówienia"</h2>
                        <ul class="cart-items">
                            {move || cart.get().lines().iter().map(|line| view! {
                                <li class="cart-item">
                                    <span>{format!("{} × {}", line.product.name, line.quantity)}</span>
                                    <span>{format!("{} zł", line.subtotal())}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                        <p class="cart-total">{move || format!("Razem: {} zł", cart.with(Cart::total))}</p>
                        <div class="payment-methods">
                            <label>
                                <input
                                    type="radio"
                                    name="payment"
                                    prop:checked=move || method.get() == PaymentMethod::Stripe
                                    on:change=move |_| method.set(PaymentMethod::Stripe)
                                />
                                "Karta płatnicza"
                            </label>
                            <label>
                                <input
                                    type="radio"
                                    name="payment"
                                    prop:checked=move || method.get() == PaymentMethod::Offline
                                    on:change=move |_| method.set(PaymentMethod::Offline)
                                />
                                "Przelew bankowy"
                            </label>
                        </div>
                        <div class="checkout-buttons">
                            <button on:click=move |_| stage.set(Stage::Browsing)>"Wróć"</button>
                            <button on:click=on_pay.clone() disabled=move || processing.get()>
                                {move || if processing.get() { "Przetwarzanie..." } else { "Zapłać" }}
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
                Stage::Browsing => view! {
                    <h1>"Sklep"</h1>
                    <NoticeBanner notice=notice/>
                    <div class="products-grid">
                        {PRODUCTS.iter().map(|product| view! {
                            <div class="product-card">
                                <img src=product.image alt=product.name/>
                                <h3>{product.name}</h3>
                                <p class="product-description">{product.description}</p>
                                <p class="product-price">{format!("{} zł", product.price)}</p>
                                <button on:click=move |_| cart.update(|c| c.add(product))>"Dodaj do koszyka"</button>
                            </div>
                        }).collect_view()}
                    </div>
                    <Show when=move || !cart.with(Cart::is_empty)>
                        <div class="cart-section">
                            <h2>"Koszyk"</h2>
                            <ul class="cart-items">
                                {move || cart.get().lines().iter().map(|line| {
                                    let id = line.product.id;
                                    view! {
                                        <li class="cart-item">
                                            <span>{format!("{} × {}", line.product.name, line.quantity)}</span>
                                            <span>{format!("{} zł", line.subtotal())}</span>
                                            <div class="cart-item-controls">
                                                <button on:click=move |_| cart.update(|c| c.remove(id))>"−"</button>
                                                <span class="item-quantity">{line.quantity}</span>
                                                <button on:click=move |_| {
                                                    if let Some(product) = crate::state::cart::find_product(id) {
                                                        cart.update(|c| c.add(product));
                                                    }
                                                }>"+"</button>
                                            </div>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                            <p class="cart-total">{move || format!("Razem: {} zł", cart.with(Cart::total))}</p>
                            <button class="checkout-button" on:click=move |_| stage.set(Stage::Checkout)>
                                "Przejdź do kasy"
                            </button>
                        </div>
                    </Show>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Dismissible payment status banner.
#[component]
fn NoticeBanner(notice: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="payment-notification">
                <div class="notification-content">
                    <h3>"Status płatności"</h3>
                    <p>{move || notice.get().unwrap_or_default()}</p>
                    <button on:click=move |_| notice.set(None)>"Zamknij"</button>
                </div>
            </div>
        </Show>
    }
}

fn bank_transfer_summary(payment: &OfflinePayment) -> AnyView {
    let details = payment.bank_details.clone();
    view! {
        <p>"Dziękujemy za zakupy! Aby dokończyć zamówienie, wykonaj przelew na poniższe dane:"</p>
        <div class="bank-details">
            <h3>"Dane do przelewu:"</h3>
            <p><strong>"Numer konta: "</strong>{details.account_number}</p>
            <p><strong>"Bank: "</strong>{details.bank_name}</p>
            <p><strong>"Odbiorca: "</strong>{details.recipient}</p>
            <p><strong>"Kwota: "</strong>{crate::state::transactions::format_amount(payment.amount)}</p>
            <p><strong>"Tytuł przelewu: "</strong>{details.transfer_title}</p>
        </div>
        <p class="important-note">
            <strong>"Ważne: "</strong>
            "Zapamiętaj lub zapisz tytuł przelewu. Jest on potrzebny do identyfikacji Twojej płatności."
        </p>
        <p>"Zamówienie zostanie zrealizowane po zaksięgowaniu wpłaty i potwierdzeniu przez administratora."</p>
    }
    .into_any()
}

/// Place the order. `Ok(None)` means the browser is being sent to the hosted
/// checkout page.
#[cfg(feature = "hydrate")]
async fn pay(
    api: &HttpApi,
    cart: &Cart,
    method: PaymentMethod,
) -> Result<Option<OfflinePayment>, crate::error::ApiError> {
    use crate::state::cart::{checkout_request, offline_payment_request};

    if method == PaymentMethod::Offline {
        return api.create_offline_payment(&offline_payment_request(cart)).await.map(Some);
    }
    let window = web_sys::window().ok_or(crate::error::ApiError::Unavailable)?;
    let origin = window.location().origin().map_err(|e| crate::error::ApiError::Transport(format!("{e:?}")))?;
    let session = api.create_checkout_session(&checkout_request(cart, &origin)).await?;
    window
        .location()
        .set_href(&session.url)
        .map_err(|e| crate::error::ApiError::Transport(format!("{e:?}")))?;
    Ok(None)
}
