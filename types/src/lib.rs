//! Scoped short-circuiting over optional values.
//!
//! A [`nullable`] block receives a fresh [`Scope`]. Every [`Scope::bind`] either
//! hands back the contained value or yields an [`Escape`], and `?` carries that
//! escape straight back to the runner, which turns it into `None`. The rest of
//! the block never runs.
//!
//! ```
//! use nullscope_types::nullable;
//!
//! let name: Option<&str> = Some("Jon");
//! let age: Option<u32> = Some(34);
//!
//! let greeting = nullable(|scope| {
//!     let name = scope.bind(name)?;
//!     let age = scope.bind(age)?;
//!     Ok(format!("{name} is {age}"))
//! });
//! assert_eq!(greeting.as_deref(), Some("Jon is 34"));
//! ```
//!
//! This crate contains no IO and no async. It only depends on `tracing`.

mod bind;
mod maybe;
mod scope;
mod zip;

pub use bind::BindAll;
pub use maybe::{Deferred, Maybe, defer};
pub use scope::{Bound, Escape, Scope, nullable, try_nullable};
pub use zip::zip;
