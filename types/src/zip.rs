use crate::maybe::Maybe;
use crate::scope::nullable;

/// Pair two optional values, present only when both are.
///
/// `first` is bound before `second`; a [`Deferred`](crate::Deferred) second
/// argument is not evaluated when the first is absent.
///
/// ```
/// use nullscope_types::zip;
///
/// assert_eq!(zip(Some("Hi"), Some(3)), Some(("Hi", 3)));
/// assert_eq!(zip(Some("Hi"), None::<i32>), None);
/// ```
#[must_use]
pub fn zip<A, B>(first: A, second: B) -> Option<(A::Value, B::Value)>
where
    A: Maybe,
    B: Maybe,
{
    nullable(|scope| Ok((scope.bind(first)?, scope.bind(second)?)))
}
