//! Values that are either present or absent.

use std::fmt;

/// A value that is either present or absent.
///
/// [`Scope::bind`](crate::Scope::bind) accepts any `Maybe`, not just `Option`.
/// Borrowing an `Option` binds to a reference, and a [`Deferred`] producer is
/// only called once a bind actually reaches it.
pub trait Maybe {
    type Value;

    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Maybe for Option<T> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        self
    }
}

impl<'a, T> Maybe for &'a Option<T> {
    type Value = &'a T;

    fn into_option(self) -> Option<&'a T> {
        self.as_ref()
    }
}

/// An optional value computed on demand.
///
/// Built with [`defer`]. When an earlier bind in the same
/// [`bind_all`](crate::Scope::bind_all) or
/// [`bind_each`](crate::Scope::bind_each) is absent, the producer never runs.
#[must_use]
pub struct Deferred<F>(F);

/// Wrap a producer so it is evaluated only when bound.
pub fn defer<T, F>(produce: F) -> Deferred<F>
where
    F: FnOnce() -> Option<T>,
{
    Deferred(produce)
}

impl<T, F> Maybe for Deferred<F>
where
    F: FnOnce() -> Option<T>,
{
    type Value = T;

    fn into_option(self) -> Option<T> {
        (self.0)()
    }
}

impl<F> fmt::Debug for Deferred<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}
