//! Where person fields come from.
//!
//! A [`PersonSource`] answers each field with `Ok(None)` when the field is
//! simply not there, and with `Err` only when the source itself is broken
//! (an age that does not parse, a variable that is not unicode).

use std::env;
use std::ffi::OsString;
use std::num::ParseIntError;

use nullscope_config::{NullscopeConfig, ProfileConfig};
use nullscope_types::try_nullable;
use thiserror::Error;

pub const NAME_VAR: &str = "NULLSCOPE_NAME";
pub const AGE_VAR: &str = "NULLSCOPE_AGE";
pub const EMAIL_VAR: &str = "NULLSCOPE_EMAIL";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{var} is not a valid age: {value:?}")]
    InvalidAge {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

pub trait PersonSource {
    fn name(&self) -> Result<Option<String>, SourceError>;
    fn age(&self) -> Result<Option<u32>, SourceError>;
    fn email(&self) -> Result<Option<String>, SourceError>;
}

/// Fields from the `[profile]` table of the config file.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSource<'a> {
    profile: Option<&'a ProfileConfig>,
}

impl<'a> ProfileSource<'a> {
    #[must_use]
    pub fn new(config: &'a NullscopeConfig) -> Self {
        Self {
            profile: config.profile.as_ref(),
        }
    }
}

impl PersonSource for ProfileSource<'_> {
    fn name(&self) -> Result<Option<String>, SourceError> {
        Ok(self.profile.and_then(ProfileConfig::name))
    }

    fn age(&self) -> Result<Option<u32>, SourceError> {
        Ok(self.profile.and_then(ProfileConfig::age))
    }

    fn email(&self) -> Result<Option<String>, SourceError> {
        Ok(self.profile.and_then(ProfileConfig::email))
    }
}

/// Fields from `NULLSCOPE_NAME`, `NULLSCOPE_AGE` and `NULLSCOPE_EMAIL`.
///
/// Blank values count as unset.
pub struct EnvSource<F> {
    lookup: F,
}

impl EnvSource<fn(&str) -> Option<OsString>> {
    /// Read from the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            lookup: |var: &str| env::var_os(var),
        }
    }
}

impl<F> EnvSource<F>
where
    F: Fn(&str) -> Option<OsString>,
{
    #[must_use]
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn text(&self, var: &'static str) -> Result<Option<String>, SourceError> {
        try_nullable(|scope| {
            let raw = scope.bind((self.lookup)(var))?;
            let value = raw
                .into_string()
                .map_err(|_| SourceError::NotUnicode { var })?;
            let value = value.trim();
            scope.bind((!value.is_empty()).then(|| value.to_string()))
        })
    }
}

impl<F> PersonSource for EnvSource<F>
where
    F: Fn(&str) -> Option<OsString>,
{
    fn name(&self) -> Result<Option<String>, SourceError> {
        self.text(NAME_VAR)
    }

    fn age(&self) -> Result<Option<u32>, SourceError> {
        try_nullable(|scope| {
            let raw = scope.bind(self.text(AGE_VAR)?)?;
            let age = raw
                .parse::<u32>()
                .map_err(|source| SourceError::InvalidAge {
                    var: AGE_VAR,
                    value: raw,
                    source,
                })?;
            Ok(age)
        })
    }

    fn email(&self) -> Result<Option<String>, SourceError> {
        self.text(EMAIL_VAR)
    }
}
