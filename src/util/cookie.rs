//! Session cookie codec and browser cookie access.
//!
//! The session cookie holds a three-segment `header.payload.signature` token.
//! Decoding the payload is an optimistic read for first paint only: the
//! signature and expiry are never checked here, and every trust decision is
//! confirmed by `/api/user`.
//!
//! ERROR HANDLING
//! ==============
//! Any malformed input (missing cookie, wrong segment count, bad base64, bad
//! JSON) is "no session". Failures are logged at debug level and never
//! surface to callers.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use base64ct::{Base64, Encoding};

use crate::net::types::{SessionClaims, UserPayload};
use crate::state::auth::{AuthMethod, Identity};

/// Read and clear cookies. The browser implementation wraps
/// `document.cookie`; tests use an in-memory jar.
pub trait CookieStore {
    /// Raw `name=value; name2=value2` cookie string.
    fn raw(&self) -> String;

    /// Expire the named cookie on path `/`.
    fn clear(&self, name: &str);
}

/// Value of the cookie named exactly `name`, if present and non-empty.
#[must_use]
pub fn read_cookie<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name && !value.is_empty()).then_some(value)
    })
}

/// Decode the `user` claim of a session token's middle segment.
#[must_use]
pub fn decode_session_token(token: &str) -> Option<UserPayload> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        log::debug!("session token has {} segments, expected 3", segments.len());
        return None;
    };
    let bytes = match Base64::decode_vec(&to_padded_standard_alphabet(payload)) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("session token payload is not base64: {e}");
            return None;
        }
    };
    match serde_json::from_slice::<SessionClaims>(&bytes) {
        Ok(claims) => Some(claims.user),
        Err(e) => {
            log::debug!("session token payload is not a session object: {e}");
            None
        }
    }
}

/// Find the session cookie in `raw` and decode its identity.
#[must_use]
pub fn decode_session_cookie(raw: &str, name: &str) -> Option<Identity> {
    let token = read_cookie(raw, name)?;
    decode_session_token(token).map(|user| user.into_identity(AuthMethod::Local))
}

/// `Set-Cookie`-style directive that expires `name` on path `/`.
#[must_use]
pub fn expire_directive(name: &str) -> String {
    format!("{name}=; Max-Age=0; path=/")
}

/// Translate the URL-safe alphabet to the standard one and pad to a
/// multiple of four.
fn to_padded_standard_alphabet(segment: &str) -> String {
    let mut standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let remainder = standard.len() % 4;
    if remainder != 0 {
        standard.extend(std::iter::repeat_n('=', 4 - remainder));
    }
    standard
}

/// `document.cookie` on the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CookieStore for BrowserCookies {
    fn raw(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn clear(&self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(doc) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
            else {
                return;
            };
            if let Err(e) = doc.set_cookie(&expire_directive(name)) {
                log::warn!("failed to clear cookie {name}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }
}
