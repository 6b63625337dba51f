//! Canonical descriptor types for registered generator functions.
//!
//! A [`Descriptor`] is produced once during ingestion and shared, behind an
//! `Arc`, by every index that lists it. The serialized form of a descriptor
//! is the catalog export consumed by documentation tooling, so its field
//! names are part of the public contract.

use std::fmt;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::Value;

use crate::error::GenerateError;
use crate::params::BoundParams;

/// Random source driving every generator function.
pub type FakerRng = ChaCha8Rng;

/// Signature shared by all generator functions.
///
/// Receives `None` when the descriptor declares no parameters.
pub type GenerateFn = fn(&mut FakerRng, Option<&BoundParams>) -> Result<Value, GenerateError>;

/// Declared type of a generator parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParamKind {
    /// Free text.
    #[serde(rename = "string")]
    String,
    /// Signed integer.
    #[serde(rename = "int")]
    Int,
    /// Floating point number.
    #[serde(rename = "float")]
    Float,
    /// `true` or `false`.
    #[serde(rename = "bool")]
    Bool,
    /// List of text values.
    #[serde(rename = "[]string")]
    StringArray,
    /// List of integers.
    #[serde(rename = "[]int")]
    IntArray,
}

impl ParamKind {
    /// Returns `true` for list-shaped parameter kinds.
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::StringArray | Self::IntArray)
    }
}

/// Declared shape of a generator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputKind {
    /// A string.
    #[serde(rename = "string")]
    String,
    /// An integer.
    #[serde(rename = "int")]
    Int,
    /// A floating point number.
    #[serde(rename = "float")]
    Float,
    /// A boolean.
    #[serde(rename = "bool")]
    Bool,
    /// A list of strings.
    #[serde(rename = "[]string")]
    StringArray,
    /// A list of integers.
    #[serde(rename = "[]int")]
    IntArray,
}

/// One declared parameter of a generator function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    kind: ParamKind,
    default: Option<String>,
    optional: bool,
    description: String,
}

impl Parameter {
    /// Creates a parameter declaration.
    ///
    /// An empty `default` is treated as "no default".
    ///
    /// # Example
    ///
    /// ```
    /// use faker_registry::{ParamKind, Parameter};
    ///
    /// let param = Parameter::new("count", ParamKind::Int, "", false, "Number of words");
    /// assert!(param.is_mandatory());
    /// assert_eq!(param.default_literal(), None);
    /// ```
    #[must_use]
    pub fn new(
        name: &str,
        kind: ParamKind,
        default: &str,
        optional: bool,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            default: (!default.is_empty()).then(|| default.to_owned()),
            optional,
            description: description.to_owned(),
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Returns the default literal, if one is declared.
    #[must_use]
    pub fn default_literal(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns `true` if the parameter may be omitted without a default.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns the human description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when omitting the parameter is an error.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        self.default.is_none() && !self.optional
    }
}

/// Immutable metadata and generator function for one registered name.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    name: String,
    category: String,
    description: String,
    example: String,
    output: OutputKind,
    params: Vec<Parameter>,
    #[serde(skip)]
    generate: GenerateFn,
}

impl Descriptor {
    pub(crate) const fn new(
        name: String,
        category: String,
        description: String,
        example: String,
        output: OutputKind,
        params: Vec<Parameter>,
        generate: GenerateFn,
    ) -> Self {
        Self {
            name,
            category,
            description,
            example,
            output,
            params,
            generate,
        }
    }

    /// Returns the canonical function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the public category the function belongs to.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the human description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns an example output, for documentation only.
    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Returns the declared output shape.
    #[must_use]
    pub const fn output(&self) -> OutputKind {
        self.output
    }

    /// Returns the ordered parameter declarations.
    #[must_use]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Runs the generator function against `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the generator rejects its parameters.
    pub fn generate(
        &self,
        rng: &mut FakerRng,
        params: Option<&BoundParams>,
    ) -> Result<Value, GenerateError> {
        (self.generate)(rng, params)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("output", &self.output)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::no_default_required("", false, true)]
    #[case::default_present("3", false, false)]
    #[case::optional_without_default("", true, false)]
    #[case::optional_with_default("3", true, false)]
    fn mandatory_when_neither_default_nor_optional(
        #[case] default: &str,
        #[case] optional: bool,
        #[case] expected: bool,
    ) {
        let param = Parameter::new("count", ParamKind::Int, default, optional, "");
        assert_eq!(param.is_mandatory(), expected);
    }

    #[test]
    fn param_kind_serializes_with_list_prefixed_tags() {
        let json = serde_json::to_string(&[ParamKind::StringArray, ParamKind::Float])
            .expect("serialize");
        assert_eq!(json, r#"["[]string","float"]"#);
    }

    #[test]
    fn parameter_serializes_type_field() {
        let param = Parameter::new("max", ParamKind::Int, "100", false, "Upper bound");
        let json = serde_json::to_value(&param).expect("serialize");
        assert_eq!(json["type"], "int");
        assert_eq!(json["default"], "100");
        assert_eq!(json["optional"], false);
    }
}
