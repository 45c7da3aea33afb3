//! The scope runner, its binder, and the signal that connects them.
//!
//! # Control flow
//!
//! ```text
//! nullable(block) -> Scope::new() -> block(&scope)
//!                                       |
//!                     scope.bind(x)? ---+--- Some(v): continue with v
//!                                       |
//!                                       +--- None: Err(Escape) returns to the runner
//!                                                  |
//!                                                  v
//!                                             runner: None
//! ```
//!
//! Exit is an ordinary early return through `Result`, so there is no unwinding
//! and nothing to clean up. Every runner call is its own catch boundary.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::bind::BindAll;
use crate::maybe::Maybe;

/// Invariant in `'s`: a signal from one scope never type-checks as another's.
type Brand<'s> = PhantomData<fn(&'s ()) -> &'s ()>;

/// The result of a bind, and of every scope block.
pub type Bound<'s, T, E = Infallible> = Result<T, Escape<'s, E>>;

/// Capability handed to a [`nullable`] or [`try_nullable`] block.
///
/// A `Scope` can only be obtained from a runner, so binds are only possible
/// inside a running block. It holds no state; it is dropped when the runner
/// returns.
///
/// `E` is the foreign failure type the block may propagate. It is
/// `Infallible` for [`nullable`].
pub struct Scope<'s, E = Infallible> {
    brand: Brand<'s>,
    failure: PhantomData<fn() -> E>,
}

/// The early exit out of a scope block.
///
/// An `Escape` is either the absence signal raised by a bind, or a foreign
/// failure converted with `?` inside [`try_nullable`]. It has no public
/// constructor and is tied to the scope that raised it, so it can neither be
/// forged nor smuggled out of the block.
///
/// `Escape` does not implement [`std::error::Error`]. `?` will not turn it into
/// `Box<dyn Error>` or any other catch-all error:
///
/// ```compile_fail
/// use nullscope_types::Scope;
///
/// fn lookup(scope: &Scope<'_>) -> Result<u8, Box<dyn std::error::Error>> {
///     Ok(scope.bind(Some(1u8))?)
/// }
/// ```
///
/// A signal cannot outlive its scope:
///
/// ```compile_fail
/// use nullscope_types::nullable;
///
/// let mut leaked = None;
/// let _ = nullable(|scope| {
///     leaked = scope.bind(None::<u8>).err();
///     Ok(())
/// });
/// ```
pub struct Escape<'s, E = Infallible> {
    exit: Exit<E>,
    brand: Brand<'s>,
}

enum Exit<E> {
    Absent,
    Failed(E),
}

impl<'s, E> Scope<'s, E> {
    fn new() -> Self {
        Self {
            brand: PhantomData,
            failure: PhantomData,
        }
    }

    /// Unwrap `value`, or escape the block if it is absent.
    ///
    /// Use with `?`; the statements after an absent bind never run.
    pub fn bind<M: Maybe>(&self, value: M) -> Bound<'s, M::Value, E> {
        match value.into_option() {
            Some(value) => Ok(value),
            None => Err(Escape::absent()),
        }
    }

    /// Unwrap a tuple of values left to right, stopping at the first absent one.
    ///
    /// Inputs after the first absent one are never looked at, so a
    /// [`Deferred`](crate::Deferred) input there never runs. On success the
    /// unwrapped tuple comes back, ready to shadow the optional bindings:
    ///
    /// ```
    /// use nullscope_types::nullable;
    ///
    /// let (host, port) = (Some("localhost"), Some(8080));
    /// let addr = nullable(|scope| {
    ///     let (host, port) = scope.bind_all((host, port))?;
    ///     Ok(format!("{host}:{port}"))
    /// });
    /// assert_eq!(addr.as_deref(), Some("localhost:8080"));
    /// ```
    pub fn bind_all<B: BindAll>(&self, values: B) -> Bound<'s, B::Output, E> {
        values.bind_in(self)
    }

    /// Unwrap every item of `values` in order.
    ///
    /// Stops pulling from the iterator at the first absent item.
    pub fn bind_each<I>(&self, values: I) -> Bound<'s, Vec<<I::Item as Maybe>::Value>, E>
    where
        I: IntoIterator,
        I::Item: Maybe,
    {
        values.into_iter().map(|value| self.bind(value)).collect()
    }
}

impl<E> fmt::Debug for Scope<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scope")
    }
}

impl<E> Escape<'_, E> {
    fn absent() -> Self {
        Self {
            exit: Exit::Absent,
            brand: PhantomData,
        }
    }

    fn failed(error: E) -> Self {
        Self {
            exit: Exit::Failed(error),
            brand: PhantomData,
        }
    }
}

impl<E> From<E> for Escape<'_, E> {
    fn from(error: E) -> Self {
        Self::failed(error)
    }
}

impl<E: fmt::Debug> fmt::Debug for Escape<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exit {
            Exit::Absent => f.write_str("Escape::Absent"),
            Exit::Failed(error) => f.debug_tuple("Escape::Failed").field(error).finish(),
        }
    }
}

/// Run `block` with a fresh [`Scope`].
///
/// Returns `Some` with the block's value if every bind it reached was present,
/// and `None` as soon as one was absent. Panics inside the block are not
/// caught; they unwind to the caller as usual.
///
/// Scopes nest. An inner runner catches its own absences, and its `None` can
/// be bound again in the outer block to continue the chain.
#[must_use]
pub fn nullable<T, F>(block: F) -> Option<T>
where
    F: for<'s> FnOnce(&Scope<'s>) -> Bound<'s, T>,
{
    match settle(block(&Scope::new())) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Like [`nullable`], but the block may also fail with `E`.
///
/// `?` on a `Result<_, E>` inside the block leaves the scope with that error,
/// which comes back unchanged as `Err`. Absence is still `Ok(None)`; the two
/// are never confused.
///
/// ```
/// use std::num::ParseIntError;
/// use nullscope_types::try_nullable;
///
/// fn port(raw: Option<&str>) -> Result<Option<u16>, ParseIntError> {
///     try_nullable(|scope| {
///         let raw = scope.bind(raw)?;
///         Ok(raw.parse()?)
///     })
/// }
///
/// assert_eq!(port(Some("8080")), Ok(Some(8080)));
/// assert_eq!(port(None), Ok(None));
/// assert!(port(Some("http")).is_err());
/// ```
pub fn try_nullable<T, E, F>(block: F) -> Result<Option<T>, E>
where
    F: for<'s> FnOnce(&Scope<'s, E>) -> Bound<'s, T, E>,
{
    settle(block(&Scope::new()))
}

fn settle<T, E>(outcome: Bound<'_, T, E>) -> Result<Option<T>, E> {
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(Escape {
            exit: Exit::Absent,
            ..
        }) => {
            tracing::trace!("scope short-circuited on an absent value");
            Ok(None)
        }
        Err(Escape {
            exit: Exit::Failed(error),
            ..
        }) => Err(error),
    }
}
