use super::*;

#[test]
fn liveness_starts_alive() {
    assert!(Liveness::new().is_alive());
}

#[test]
fn cancel_is_visible_through_clones() {
    let alive = Liveness::new();
    let observer = alive.clone();
    alive.cancel();
    assert!(!observer.is_alive());
}

#[test]
fn delayed_redirect_fires_while_alive() {
    let redirect = DelayedRedirect::new("/", Duration::from_secs(3), Liveness::new());
    assert!(redirect.should_fire());
    assert_eq!(redirect.delay, Duration::from_secs(3));
}

#[test]
fn delayed_redirect_cancelled_by_owner_never_fires() {
    let owner = Liveness::new();
    let redirect = DelayedRedirect::new("/", Duration::from_secs(3), owner.clone());
    owner.cancel();
    assert!(!redirect.should_fire());
}

#[test]
fn delayed_redirect_cancel_stops_it() {
    let redirect = DelayedRedirect::new("/", Duration::from_secs(3), Liveness::new());
    redirect.cancel();
    assert!(!redirect.should_fire());
}
