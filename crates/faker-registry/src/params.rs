//! Bound parameter map handed to generator functions.
//!
//! Every bound value is textual: scalars arrive as a single string and
//! arrays as one string per element. Generators read typed values back out
//! through the accessors here, which report unparsable literals as
//! [`GenerateError::InvalidParameter`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;

/// Name to value(s) map produced for a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundParams {
    values: BTreeMap<String, Vec<String>>,
}

impl BoundParams {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `values` under `name`, replacing any earlier binding.
    pub fn insert(&mut self, name: &str, values: Vec<String>) {
        self.values.insert(name.to_owned(), values);
    }

    /// Returns the raw values bound under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Unwraps the map a parameterised generator was invoked with.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingParameter`] naming `parameter` when the
    /// generator was invoked without a map.
    pub fn required<'p>(
        params: Option<&'p Self>,
        parameter: &str,
    ) -> Result<&'p Self, GenerateError> {
        params.ok_or_else(|| GenerateError::MissingParameter {
            parameter: parameter.to_owned(),
        })
    }

    /// Returns the first value bound under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingParameter`] if `name` is unbound or
    /// bound to an empty list.
    pub fn string(&self, name: &str) -> Result<&str, GenerateError> {
        self.opt_string(name)
            .ok_or_else(|| GenerateError::MissingParameter {
                parameter: name.to_owned(),
            })
    }

    /// Returns the first value bound under `name`, if bound.
    #[must_use]
    pub fn opt_string(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value bound under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingParameter`] if `name` is unbound.
    pub fn strings(&self, name: &str) -> Result<&[String], GenerateError> {
        self.get(name).ok_or_else(|| GenerateError::MissingParameter {
            parameter: name.to_owned(),
        })
    }

    /// Parses the value under `name` as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if `name` is unbound or not an integer.
    pub fn int(&self, name: &str) -> Result<i64, GenerateError> {
        parse_value(name, self.string(name)?)
    }

    /// Parses the value under `name` as an integer, if bound.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidParameter`] if the value is not an
    /// integer.
    pub fn opt_int(&self, name: &str) -> Result<Option<i64>, GenerateError> {
        self.opt_string(name)
            .map(|raw| parse_value(name, raw))
            .transpose()
    }

    /// Parses the value under `name` as a floating point number.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if `name` is unbound, not a number, or not
    /// finite.
    pub fn float(&self, name: &str) -> Result<f64, GenerateError> {
        let raw = self.string(name)?;
        let value: f64 = parse_value(name, raw)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GenerateError::InvalidParameter {
                parameter: name.to_owned(),
                value: raw.to_owned(),
                message: "value must be finite".to_owned(),
            })
        }
    }

    /// Parses the value under `name` as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if `name` is unbound or not `true`/`false`.
    pub fn boolean(&self, name: &str) -> Result<bool, GenerateError> {
        parse_value(name, self.string(name)?)
    }

    /// Parses every value under `name` as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if `name` is unbound or any element is not
    /// an integer.
    pub fn ints(&self, name: &str) -> Result<Vec<i64>, GenerateError> {
        self.strings(name)?
            .iter()
            .map(|raw| parse_value(name, raw))
            .collect()
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, GenerateError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|err| GenerateError::InvalidParameter {
            parameter: name.to_owned(),
            value: raw.to_owned(),
            message: err.to_string(),
        })
}
