//! Person assembly for nullscope.
//!
//! A person is only assembled when its source has every field. The routines
//! here are small clients of `nullscope-types`: [`assemble_person`] runs one
//! fallible scope over the source, [`contact_line`] zips two fields.

mod assemble;
mod person;
mod source;

pub use assemble::{assemble_person, contact_line, missing_fields};
pub use person::Person;
pub use source::{AGE_VAR, EMAIL_VAR, EnvSource, NAME_VAR, PersonSource, ProfileSource, SourceError};
