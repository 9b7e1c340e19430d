//! Shop catalogue, cart, and checkout payload construction.
//!
//! DESIGN
//! ======
//! Prices are whole złoty in the catalogue and converted to grosze only when
//! building payment-processor line items. The cart is page-local: it lives
//! in the shop view's signal and is cleared after a completed order.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::{CheckoutRequest, LineItem, OfflinePaymentRequest, PriceData, ProductData};
use crate::util::query::{encode_component, query_value};

/// Currency sent with every line item.
pub const CURRENCY: &str = "pln";

/// Path of the shop view; also the return target of hosted checkout.
pub const SHOP_PATH: &str = "/sklep";

/// Shown for any checkout failure.
pub const PAYMENT_ERROR_MESSAGE: &str = "Wystąpił błąd podczas płatności. Spróbuj ponownie.";

/// A catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    /// Whole złoty.
    pub price: u32,
    pub description: &'static str,
    pub image: &'static str,
}

pub static PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        name: "Podkładka pod myszkę",
        price: 20,
        description: "Gamingowa podkładka pod myszkę",
        image: "/img/podkladka.jpg",
    },
    Product {
        id: 2,
        name: "Gamingowy Kubek",
        price: 15,
        description: "Idealny na kawkę przy ulubionej grze",
        image: "/img/kubek.jpg",
    },
    Product {
        id: 3,
        name: "Plakat Wiedźmin 3 - Dziki Gon",
        price: 40,
        description: "Panorama Novigrad",
        image: "/img/plakat.jpg",
    },
];

#[must_use]
pub fn find_product(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// One product in the cart with its quantity (always >= 1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> u32 {
        self.product.price * self.quantity
    }
}

/// Ordered cart lines, one per product.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit; a product already in the cart gets its quantity bumped.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { product: *product, quantity: 1 }),
        }
    }

    /// Remove one unit; the line disappears when its quantity reaches zero.
    pub fn remove(&mut self, product_id: u32) {
        let Some(index) = self.lines.iter().position(|line| line.product.id == product_id) else {
            return;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity in złoty.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Payment-processor line items, one per cart line.
    #[must_use]
    pub fn line_items(&self) -> Vec<LineItem> {
        self.lines
            .iter()
            .map(|line| LineItem {
                price_data: PriceData {
                    currency: CURRENCY.to_owned(),
                    product_data: ProductData {
                        name: line.product.name.to_owned(),
                        description: line.product.description.to_owned(),
                        images: vec![placeholder_image(line.product.name)],
                    },
                    unit_amount: u64::from(line.product.price) * 100,
                },
                quantity: line.quantity,
            })
            .collect()
    }
}

/// Publicly reachable image for the hosted checkout page.
#[must_use]
pub fn placeholder_image(name: &str) -> String {
    format!("https://via.placeholder.com/300x200?text={}", encode_component(name))
}

/// Hosted-checkout request returning to the shop with a status flag.
#[must_use]
pub fn checkout_request(cart: &Cart, origin: &str) -> CheckoutRequest {
    let origin = origin.trim_end_matches('/');
    CheckoutRequest {
        line_items: cart.line_items(),
        success_url: format!("{origin}{SHOP_PATH}?success=true"),
        cancel_url: format!("{origin}{SHOP_PATH}?canceled=true"),
    }
}

#[must_use]
pub fn offline_payment_request(cart: &Cart) -> OfflinePaymentRequest {
    OfflinePaymentRequest { line_items: cart.line_items() }
}

/// Outcome signalled by the hosted checkout redirecting back to the shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutReturn {
    Succeeded,
    Canceled,
}

impl CheckoutReturn {
    #[must_use]
    pub fn notice(self) -> &'static str {
        match self {
            Self::Succeeded => "Płatność zakończona pomyślnie.",
            Self::Canceled => "Płatność została anulowana.",
        }
    }
}

/// `?success=true` or `?canceled=true`; success wins if both are present.
#[must_use]
pub fn checkout_return(search: &str) -> Option<CheckoutReturn> {
    if query_value(search, "success").is_some_and(|v| v == "true") {
        Some(CheckoutReturn::Succeeded)
    } else if query_value(search, "canceled").is_some_and(|v| v == "true") {
        Some(CheckoutReturn::Canceled)
    } else {
        None
    }
}
