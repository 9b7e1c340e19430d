//! Component-lifetime flags for async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Async tasks spawned by a component (identity probe, delayed redirect,
//! data fetches) check the flag after every await and drop their result once
//! the component has been cleaned up.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared "still mounted" flag. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Flag that flips when the current reactive owner is cleaned up.
    #[must_use]
    pub fn for_current_owner() -> Self {
        let alive = Self::new();
        let on_drop = alive.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        alive
    }
}

/// A navigation scheduled after a fixed delay, cancelled with its owner.
#[derive(Clone, Debug)]
pub struct DelayedRedirect {
    pub target: String,
    pub delay: Duration,
    alive: Liveness,
}

impl DelayedRedirect {
    #[must_use]
    pub fn new(target: impl Into<String>, delay: Duration, alive: Liveness) -> Self {
        Self { target: target.into(), delay, alive }
    }

    /// Whether the redirect should still happen once the delay elapses.
    #[must_use]
    pub fn should_fire(&self) -> bool {
        self.alive.is_alive()
    }

    pub fn cancel(&self) {
        self.alive.cancel();
    }

    /// Sleep for the delay, then call `navigate` unless cancelled meanwhile.
    pub fn schedule<F>(self, navigate: F)
    where
        F: Fn(&str) + 'static,
    {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let millis = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::future::TimeoutFuture::new(millis).await;
            if self.should_fire() {
                navigate(&self.target);
            } else {
                log::debug!("delayed redirect to {} cancelled", self.target);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = navigate;
        }
    }
}
