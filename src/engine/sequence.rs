// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validated numeric input for a processing run.

use serde_json::Value;

use crate::errors::ProcessError;
use crate::observability::messages::{sequence::InputRejected, StructuredLog};

pub const NOT_AN_ARRAY: &str = "Input must be an array.";
pub const NOT_ALL_NUMBERS: &str = "All items in the array must be numbers.";

/// An ordered, immutable list of numbers.
///
/// Typed callers build one straight from a `Vec<f64>`. Untyped input (a JSON
/// document from the command line or a config file) goes through
/// [`Sequence::from_json`], which is where shape validation happens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence(Vec<f64>);

impl Sequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Validate an untyped JSON value.
    ///
    /// Fails with [`ProcessError::InvalidInput`] when the value is not an array
    /// or when any element is not a number.
    pub fn from_json(value: &Value) -> Result<Self, ProcessError> {
        let Some(items) = value.as_array() else {
            return Err(rejected(NOT_AN_ARRAY.to_string()));
        };

        items
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .map(Self)
            .ok_or_else(|| rejected(NOT_ALL_NUMBERS.to_string()))
    }

    /// Parse JSON text and validate it. Malformed JSON is also invalid input.
    pub fn parse(text: &str) -> Result<Self, ProcessError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| rejected(format!("Input is not valid JSON: {}", e)))?;
        Self::from_json(&value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn rejected(reason: String) -> ProcessError {
    InputRejected { reason: &reason }.log();
    ProcessError::InvalidInput { reason }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}
