//! Building a [`Person`] out of fields that may be missing.

use nullscope_types::{try_nullable, zip};

use crate::person::Person;
use crate::source::{PersonSource, SourceError};

/// Assemble a person if the source has every field.
///
/// Fields are queried in order (name, age, email) and querying stops at the
/// first missing one. A broken source is reported as `Err`, never as `None`.
pub fn assemble_person<S>(source: &S) -> Result<Option<Person>, SourceError>
where
    S: PersonSource + ?Sized,
{
    let person = try_nullable::<_, SourceError, _>(|scope| {
        let name = scope.bind(source.name()?)?;
        let age = scope.bind(source.age()?)?;
        let email = scope.bind(source.email()?)?;
        Ok(Person::new(name, age, email))
    })?;

    match &person {
        Some(person) => tracing::debug!(name = %person.name, age = person.age, "Assembled person"),
        None => tracing::debug!("Source is missing a person field"),
    }
    Ok(person)
}

/// `Name <email>` when both are available, regardless of age.
pub fn contact_line<S>(source: &S) -> Result<Option<String>, SourceError>
where
    S: PersonSource + ?Sized,
{
    let name = source.name()?;
    let email = source.email()?;
    Ok(zip(name, email).map(|(name, email)| format!("{name} <{email}>")))
}

/// Names of the fields the source does not have, in query order.
pub fn missing_fields<S>(source: &S) -> Result<Vec<&'static str>, SourceError>
where
    S: PersonSource + ?Sized,
{
    let mut missing = Vec::new();
    if source.name()?.is_none() {
        missing.push("name");
    }
    if source.age()?.is_none() {
        missing.push("age");
    }
    if source.email()?.is_none() {
        missing.push("email");
    }
    Ok(missing)
}
