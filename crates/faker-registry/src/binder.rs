//! Positional to named parameter binding.
//!
//! Call sites pass an ordered list of dynamically typed values; generators
//! consume a name to text-values map. The binder walks the declared
//! parameters in order and, for each position:
//!
//! 1. binds the supplied value (arrays element-wise, scalars as one string);
//! 2. otherwise binds the declared default as a single value;
//! 3. otherwise omits an optional parameter;
//! 4. otherwise fails with [`FakerError::MissingParameter`].
//!
//! Scalars are always stringified, so a numeric argument reaches the
//! generator as its decimal text.

use serde_json::Value;

use crate::descriptor::Parameter;
use crate::error::FakerError;
use crate::params::BoundParams;

/// Binds positional call-site arguments against declared parameters.
///
/// Returns `Ok(None)` when `params` is empty. Arguments beyond the declared
/// list are ignored, and a `null` argument counts as absent.
///
/// # Errors
///
/// Returns [`FakerError::MissingParameter`] naming the first mandatory
/// parameter with no argument.
///
/// # Example
///
/// ```
/// use faker_registry::{ParamKind, Parameter, bind_arguments};
/// use serde_json::json;
///
/// let params = vec![
///     Parameter::new("min", ParamKind::Int, "0", false, ""),
///     Parameter::new("max", ParamKind::Int, "100", false, ""),
/// ];
/// let bound = bind_arguments("number", &params, &[json!(5)])
///     .expect("bind")
///     .expect("map");
///
/// assert_eq!(bound.string("min").expect("min"), "5");
/// assert_eq!(bound.string("max").expect("max"), "100");
/// ```
pub fn bind_arguments(
    function: &str,
    params: &[Parameter],
    args: &[Value],
) -> Result<Option<BoundParams>, FakerError> {
    if params.is_empty() {
        return Ok(None);
    }

    let mut bound = BoundParams::new();
    for (index, param) in params.iter().enumerate() {
        match args.get(index).filter(|arg| !arg.is_null()) {
            Some(arg) => bound.insert(param.name(), bind_value(arg)),
            None => {
                if let Some(default) = param.default_literal() {
                    bound.insert(param.name(), vec![default.to_owned()]);
                } else if !param.is_optional() {
                    return Err(FakerError::MissingParameter {
                        function: function.to_owned(),
                        parameter: param.name().to_owned(),
                    });
                }
            }
        }
    }

    Ok(Some(bound))
}

fn bind_value(arg: &Value) -> Vec<String> {
    match arg {
        Value::Array(items) => items.iter().map(stringify).collect(),
        scalar => vec![stringify(scalar)],
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::descriptor::ParamKind;

    #[fixture]
    fn two_params() -> Vec<Parameter> {
        vec![
            Parameter::new("strs", ParamKind::StringArray, "", false, ""),
            Parameter::new("sep", ParamKind::String, ",", false, ""),
        ]
    }

    #[test]
    fn short_circuits_without_parameters() {
        let bound = bind_arguments("uuid", &[], &[json!("ignored")]).expect("bind");
        assert_eq!(bound, None);
    }

    #[rstest]
    fn binds_array_argument_element_wise(two_params: Vec<Parameter>) {
        let bound = bind_arguments("join", &two_params, &[json!(["a", 2, true]), json!("|")])
            .expect("bind")
            .expect("map");

        assert_eq!(
            bound.get("strs"),
            Some(["a".to_owned(), "2".to_owned(), "true".to_owned()].as_slice())
        );
        assert_eq!(bound.get("sep"), Some(["|".to_owned()].as_slice()));
    }

    #[rstest]
    fn binds_scalar_argument_as_single_text_value(two_params: Vec<Parameter>) {
        let bound = bind_arguments("join", &two_params, &[json!(42), json!(1.5)])
            .expect("bind")
            .expect("map");

        assert_eq!(bound.get("strs"), Some(["42".to_owned()].as_slice()));
        assert_eq!(bound.get("sep"), Some(["1.5".to_owned()].as_slice()));
    }

    #[rstest]
    fn applies_default_for_missing_trailing_argument(two_params: Vec<Parameter>) {
        let bound = bind_arguments("join", &two_params, &[json!(["x"])])
            .expect("bind")
            .expect("map");

        assert_eq!(bound.get("sep"), Some([",".to_owned()].as_slice()));
    }

    #[rstest]
    fn fails_when_mandatory_parameter_missing(two_params: Vec<Parameter>) {
        let err = bind_arguments("join", &two_params, &[]).expect_err("missing strs");
        assert_eq!(
            err,
            FakerError::MissingParameter {
                function: "join".to_owned(),
                parameter: "strs".to_owned(),
            }
        );
    }

    #[test]
    fn omits_optional_parameter_without_default() {
        let params = vec![
            Parameter::new("count", ParamKind::Int, "3", false, ""),
            Parameter::new("prefix", ParamKind::String, "", true, ""),
        ];

        let bound = bind_arguments("words", &params, &[]).expect("bind").expect("map");

        assert_eq!(bound.len(), 1);
        assert!(!bound.contains("prefix"));
    }

    #[rstest]
    fn null_argument_falls_back_to_default(two_params: Vec<Parameter>) {
        let bound = bind_arguments("join", &two_params, &[json!("a"), Value::Null])
            .expect("bind")
            .expect("map");

        assert_eq!(bound.get("sep"), Some([",".to_owned()].as_slice()));
    }

    #[rstest]
    fn ignores_surplus_arguments(two_params: Vec<Parameter>) {
        let bound = bind_arguments("join", &two_params, &[json!("a"), json!("-"), json!("z")])
            .expect("bind")
            .expect("map");

        assert_eq!(bound.len(), 2);
    }
}
