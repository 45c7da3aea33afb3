//! Fixed-arity binds over tuples.

use crate::maybe::Maybe;
use crate::scope::{Bound, Scope};

/// A tuple of [`Maybe`] values that can be bound in one call.
///
/// Implemented for tuples of two to six elements. Elements are bound left to
/// right and binding stops at the first absent one.
pub trait BindAll {
    type Output;

    fn bind_in<'s, E>(self, scope: &Scope<'s, E>) -> Bound<'s, Self::Output, E>;
}

macro_rules! impl_bind_all {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: Maybe),+> BindAll for ($($ty,)+) {
            type Output = ($(<$ty as Maybe>::Value,)+);

            fn bind_in<'s, E>(self, scope: &Scope<'s, E>) -> Bound<'s, Self::Output, E> {
                let ($($var,)+) = self;
                $(let $var = scope.bind($var)?;)+
                Ok(($($var,)+))
            }
        }
    };
}

impl_bind_all!(A a, B b);
impl_bind_all!(A a, B b, C c);
impl_bind_all!(A a, B b, C c, D d);
impl_bind_all!(A a, B b, C c, D d, F f);
impl_bind_all!(A a, B b, C c, D d, F f, G g);
