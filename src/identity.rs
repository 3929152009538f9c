//! Transitive identity comparison across wrapper layers.
//!
//! Two errors are the same when they are the same value. [`is`] peels
//! [`StackError`] and [`OriginError`] layers off either side until a pair of
//! layers is identical or both sides run out of layers.
//!
//! Cause chains only grow by wrapping immutable values, so they form a DAG
//! and every walk ends at a plain error. Chains of any depth are compared in
//! full.

use core::error::Error;

use smallvec::SmallVec;

use crate::types::{OriginError, StackError};

type Layers<'a> = SmallVec<[&'a (dyn Error + 'static); 8]>;

/// Returns `true` if `err` and `target` are the same error, directly or
/// through any number of wrapper layers on either side.
///
/// Two layers are the same when they start at the same address and have the
/// same size. A single-field struct and that field still compare equal.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use error_origin::{is, wrap, Cause};
///
/// let base = Arc::new(std::io::Error::other("x"));
/// let w1 = wrap(Cause::shared(base.clone()));
/// let w2 = wrap(w1.clone());
///
/// assert!(is(&w2, &*base));
/// assert!(is(&w2, &w1));
/// assert!(!is(&wrap("a"), &wrap("b")));
/// ```
pub fn is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let targets = layers(target);
    layers(err).iter().any(|layer| targets.iter().any(|other| same(*layer, *other)))
}

/// One layer down: the inner error of a [`StackError`], or the cause of an
/// [`OriginError`].
#[inline]
pub fn unwrap_layer<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    if let Some(stack) = err.downcast_ref::<StackError>() {
        return Some(stack.inner());
    }
    if let Some(origin) = err.downcast_ref::<OriginError>() {
        return Some(origin.cause() as &(dyn Error + 'static));
    }
    None
}

fn layers<'a>(err: &'a (dyn Error + 'static)) -> Layers<'a> {
    let mut out = Layers::new();
    let mut current = Some(err);
    while let Some(layer) = current {
        out.push(layer);
        current = unwrap_layer(layer);
    }
    out
}

/// Address identity. A value and its leading field share an address, so the
/// sizes must match too. Zero-sized errors share dangling addresses, so for
/// them the vtable has to match as well.
#[inline]
fn same(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    let size = core::mem::size_of_val(a);
    if size == 0 {
        return core::ptr::eq(a, b);
    }
    core::ptr::addr_eq(a, b) && size == core::mem::size_of_val(b)
}
