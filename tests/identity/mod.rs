use core::error::Error;
use core::fmt;
use std::sync::Arc;

use error_origin::{is, unwrap_layer, wrap, Cause, OriginError, StackError};

#[derive(Debug)]
struct Timeout {
    secs: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}s", self.secs)
    }
}

impl Error for Timeout {}

static TIMEOUT: Timeout = Timeout { secs: 30 };

#[test]
fn identity_is_reflexive() {
    let io = std::io::Error::other("x");
    let err = wrap("x");

    assert!(is(&io, &io));
    assert!(is(&err, &err));
}

#[test]
fn nested_wrappers_match_the_shared_base() {
    let base = Arc::new(std::io::Error::other("x"));
    let w1 = wrap(Cause::shared(base.clone()));
    let w2 = wrap(w1.clone());

    assert!(is(&w1, &*base));
    assert!(is(&w2, &*base));
    assert!(is(&w2, &w1));
}

#[test]
fn unwrapping_works_on_the_target_side_too() {
    let base = Arc::new(std::io::Error::other("x"));
    let err = OriginError::with_suffix(Cause::shared(base.clone()), "while reading");

    assert!(is(&*base, &err));
    assert!(is(err.cause(), &*base));
    assert!(is(&*base, err.cause()));
}

#[test]
fn mixed_wrapper_kinds_unwrap_transitively() {
    let base = Arc::new(std::io::Error::other("x"));
    let stack = StackError::wrap(wrap(Cause::shared(base.clone())), 1);
    let outer = OriginError::with_suffix(stack, "outer");

    assert!(is(&outer, &*base));
}

#[test]
fn distinct_causes_never_match() {
    assert!(!is(&wrap("a"), &wrap("b")));
    assert!(!is(&wrap("a"), &wrap("a")));
}

#[test]
fn equal_but_separate_values_do_not_match() {
    let a = std::io::Error::other("x");
    let b = std::io::Error::other("x");

    assert!(!is(&a, &b));
}

#[test]
fn static_errors_keep_their_address() {
    let err = OriginError::with_suffix(Cause::from_static(&TIMEOUT), "fetching index");

    assert_eq!(err.message(), "timed out after 30s: fetching index");
    assert!(is(&err, &TIMEOUT));
    assert!(!is(&err, &Timeout { secs: 30 }));
}

#[test]
fn unwrap_layer_peels_one_wrapper_at_a_time() {
    let err = OriginError::new("x");

    let first = unwrap_layer(&err).expect("origin errors have a cause");
    assert!(first.downcast_ref::<StackError>().is_some());

    let second = unwrap_layer(first).expect("stack errors have an inner error");
    assert_eq!(second.to_string(), "x");

    assert!(unwrap_layer(second).is_none());
}

#[test]
fn deeply_nested_chains_still_match() {
    let base = Arc::new(std::io::Error::other("x"));
    let mut err = wrap(Cause::shared(base.clone()));
    for depth in 0..300 {
        err = OriginError::with_suffix(err, format!("layer {depth}"));
    }

    assert!(is(&err, &err));
    assert!(is(&err, &*base));
    assert!(err.message().ends_with(": layer 299"));
}
