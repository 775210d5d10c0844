//! A small demo model with validated setters. Not used by the calculator.

use std::fmt;
use thiserror::Error;

/// Validation failures when constructing or mutating a [`Person`].
#[derive(Debug, Error, PartialEq)]
pub enum PersonError {
    #[error("name must not be blank")]
    BlankName,
    #[error("age must not be negative, got {0}")]
    NegativeAge(f32),
}

/// A person with a validated name and age.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    name: String,
    age: f32,
}

impl Person {
    /// Create a person. Fails on a blank name or a negative age.
    pub fn new(name: impl Into<String>, age: f32) -> Result<Self, PersonError> {
        let mut person = Self {
            name: String::new(),
            age: 0.0,
        };
        person.set_name(name)?;
        person.set_age(age)?;
        Ok(person)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    /// Update the name. Blank names (empty or whitespace-only) are rejected.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), PersonError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PersonError::BlankName);
        }
        self.name = name;
        Ok(())
    }

    /// Update the age. Negative ages are rejected.
    pub fn set_age(&mut self, age: f32) -> Result<(), PersonError> {
        if age < 0.0 {
            return Err(PersonError::NegativeAge(age));
        }
        self.age = age;
        Ok(())
    }

    /// Log a greeting under the `person` target.
    pub fn greet(&self) {
        tracing::info!(target: "person", "{} says Hello", self.name);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person(name='{}', age={})", self.name, self.age)
    }
}
