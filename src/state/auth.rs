//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the root `App` as a single `RwSignal<AuthState>`. Route guards and
//! views only read it; the resolver and session mutators change it through
//! the transition methods below and nothing else.
//!
//! DESIGN
//! ======
//! The identity is a single-slot cell ranked by [`Authority`]. A decoded
//! cookie is an optimistic, unverified guess; the `/api/user` answer is
//! canonical. Offers from a lower authority never replace a higher one, so
//! the network result wins whatever order the two writers finish in.
//! Login and logout start a new session epoch; probe results issued in an
//! older epoch are dropped.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the user authenticated with the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Local,
    Google,
    Github,
}

impl AuthMethod {
    /// Lenient parse of the backend's `auth_method` string; unknown or
    /// missing values mean a local account.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("google") => Self::Google,
            Some("github") => Self::Github,
            _ => Self::Local,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
            Self::Github => "github",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved user as seen by views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub auth_method: AuthMethod,
    pub is_admin: bool,
}

impl Identity {
    #[must_use]
    pub fn new(username: impl Into<String>, auth_method: AuthMethod) -> Self {
        Self { username: username.into(), auth_method, is_admin: false }
    }

    /// Navbar greeting: `Zalogowano, alice (github)`; local accounts omit the suffix.
    #[must_use]
    pub fn greeting(&self) -> String {
        match self.auth_method {
            AuthMethod::Local => format!("Zalogowano, {}", self.username),
            method => format!("Zalogowano, {} ({method})", self.username),
        }
    }
}

/// Resolution lifecycle: `Unchecked -> Checking -> {Authenticated, Anonymous}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unchecked,
    Checking,
    Authenticated,
    Anonymous,
}

/// Source ranking for the identity slot, weakest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Authority {
    #[default]
    None,
    /// Decoded from the session cookie; signature and expiry unchecked.
    Cookie,
    /// Asserted by a login/register response or OAuth callback parameters;
    /// carries no admin flag.
    Session,
    /// Confirmed by `/api/user`.
    Network,
}

/// Handle for one identity probe, tied to the session epoch it started in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeTicket {
    epoch: u64,
}

/// Authentication state tracking the current identity and resolution phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub identity: Option<Identity>,
    pub authority: Authority,
    pub probe_in_flight: bool,
    /// The user logged out during this page load. Guards still mounted at
    /// that moment must not remember their page for the next login.
    pub signed_out: bool,
    epoch: u64,
}

impl AuthState {
    /// True until the first resolution leaves `checking`.
    #[must_use]
    pub fn is_checking(&self) -> bool {
        matches!(self.phase, AuthPhase::Unchecked | AuthPhase::Checking)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated && self.identity.is_some()
    }

    /// Authenticated by something stronger than the unverified cookie.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.is_authenticated() && self.authority >= Authority::Session
    }

    /// Authenticated and confirmed by `/api/user`, the only source of `is_admin`.
    #[must_use]
    pub fn is_network_confirmed(&self) -> bool {
        self.is_authenticated() && self.authority == Authority::Network
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|identity| identity.is_admin)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.username.as_str())
    }

    /// Start an identity probe. Returns `None` while another probe is
    /// outstanding, in which case the caller must not issue a request.
    pub fn begin_probe(&mut self) -> Option<ProbeTicket> {
        if self.probe_in_flight {
            return None;
        }
        self.probe_in_flight = true;
        if self.phase == AuthPhase::Unchecked {
            self.phase = AuthPhase::Checking;
        }
        Some(ProbeTicket { epoch: self.epoch })
    }

    /// Offer an identity from `authority`. Lower-ranked offers never replace
    /// a higher-ranked value. Returns whether the slot changed.
    pub fn offer(&mut self, identity: Option<Identity>, authority: Authority) -> bool {
        if authority < self.authority {
            return false;
        }
        self.phase = if identity.is_some() { AuthPhase::Authenticated } else { AuthPhase::Anonymous };
        self.identity = identity;
        self.authority = authority;
        true
    }

    /// Optimistically adopt the identity decoded from the session cookie.
    pub fn adopt_provisional(&mut self, identity: Identity) -> bool {
        self.offer(Some(identity), Authority::Cookie)
    }

    /// Apply the probe result (`None` = anonymous). Results from an older
    /// session epoch only release the in-flight flag.
    pub fn resolved(&mut self, ticket: ProbeTicket, identity: Option<Identity>) -> bool {
        self.probe_in_flight = false;
        if ticket.epoch != self.epoch {
            return false;
        }
        self.offer(identity, Authority::Network)
    }

    /// Release the in-flight flag without applying anything (driver torn down).
    pub fn abandon_probe(&mut self) {
        self.probe_in_flight = false;
    }

    /// A login, registration, or OAuth callback succeeded.
    pub fn login_succeeded(&mut self, identity: Identity, authority: Authority) {
        self.epoch += 1;
        self.phase = AuthPhase::Authenticated;
        self.identity = Some(identity);
        self.authority = authority;
        self.signed_out = false;
    }

    /// Reset to anonymous regardless of what the backend said about logout.
    pub fn logged_out(&mut self) {
        self.epoch += 1;
        self.phase = AuthPhase::Anonymous;
        self.identity = None;
        self.authority = Authority::None;
        self.signed_out = true;
    }
}
