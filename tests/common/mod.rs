//! Shared test fixtures
//!
//! A person service whose answers are fixed up front, so every combination of
//! present and absent fields can be exercised deterministically.

#![allow(dead_code)]

use nullscope_core::{Person, PersonSource, SourceError};

pub trait PersonService {
    fn get_name(&self) -> Option<String>;
    fn get_age(&self) -> Option<u32>;
    fn get_email(&self) -> Option<String>;

    fn create_person(&self, name: String, age: u32, email: String) -> Person {
        Person::new(name, age, email)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixedService {
    pub name: Option<&'static str>,
    pub age: Option<u32>,
    pub email: Option<&'static str>,
}

impl FixedService {
    pub fn jon() -> Self {
        Self {
            name: Some("Jon"),
            age: Some(34),
            email: Some("jon@doe.com"),
        }
    }

    /// Every service with each field either present or absent.
    pub fn all_combinations() -> Vec<Self> {
        let mut services = Vec::new();
        for mask in 0..8u8 {
            services.push(Self {
                name: (mask & 1 != 0).then_some("Jon"),
                age: (mask & 2 != 0).then_some(34),
                email: (mask & 4 != 0).then_some("jon@doe.com"),
            });
        }
        services
    }

    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.age.is_some() && self.email.is_some()
    }
}

impl PersonService for FixedService {
    fn get_name(&self) -> Option<String> {
        self.name.map(str::to_string)
    }

    fn get_age(&self) -> Option<u32> {
        self.age
    }

    fn get_email(&self) -> Option<String> {
        self.email.map(str::to_string)
    }
}

impl PersonSource for FixedService {
    fn name(&self) -> Result<Option<String>, SourceError> {
        Ok(self.get_name())
    }

    fn age(&self) -> Result<Option<u32>, SourceError> {
        Ok(self.get_age())
    }

    fn email(&self) -> Result<Option<String>, SourceError> {
        Ok(self.get_email())
    }
}
