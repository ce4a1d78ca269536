use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::validation::is_form_whitespace;
use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 5;

/// Normalized market symbol/ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Trim and upper-case `input`, then require 1-5 ASCII letters.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(input);
        if normalized.is_empty() {
            return Err(ValidationError::SymbolRequired);
        }

        let len = normalized.chars().count();
        let letters_only = normalized.chars().all(|ch| ch.is_ascii_uppercase());
        if len > MAX_SYMBOL_LEN || !letters_only {
            return Err(ValidationError::SymbolFormat { value: normalized });
        }

        Ok(Self(normalized))
    }

    /// The form-field normalization applied before validation.
    pub fn normalize(input: &str) -> String {
        input.trim_matches(is_form_whitespace).to_uppercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
