//! Numeric generators.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde_json::Value;

use super::{count, digits, float_between, int_between, param, round_to};
use crate::descriptor::{FakerRng, OutputKind, ParamKind};
use crate::error::GenerateError;
use crate::ingest::RawEntry;
use crate::params::BoundParams;

pub(super) const ENTRIES: &[RawEntry] = &[
    RawEntry {
        native: "number",
        label: "Number",
        category: "number",
        description: "Integer between min and max inclusive",
        example: "14866",
        output: OutputKind::Int,
        params: &[
            param("min", ParamKind::Int, "-2147483648", "Minimum integer value"),
            param("max", ParamKind::Int, "2147483647", "Maximum integer value"),
        ],
        generate: number,
    },
    RawEntry {
        native: "float",
        label: "Float",
        category: "number",
        description: "Floating point number between min and max inclusive",
        example: "48.217",
        output: OutputKind::Float,
        params: &[
            param("min", ParamKind::Float, "0", "Minimum float value"),
            param("max", ParamKind::Float, "100", "Maximum float value"),
        ],
        generate: float,
    },
    RawEntry {
        native: "digit",
        label: "Digit",
        category: "number",
        description: "Single decimal digit",
        example: "7",
        output: OutputKind::String,
        params: &[],
        generate: digit,
    },
    RawEntry {
        native: "digitn",
        label: "Digit N",
        category: "number",
        description: "Run of decimal digits of the given length",
        example: "0136",
        output: OutputKind::String,
        params: &[param("count", ParamKind::Int, "4", "Number of digits")],
        generate: digit_n,
    },
    RawEntry {
        native: "shuffleints",
        label: "Shuffle Ints",
        category: "number",
        description: "The given integers in random order",
        example: "[3, 1, 2]",
        output: OutputKind::IntArray,
        params: &[param("ints", ParamKind::IntArray, "", "Integers to shuffle")],
        generate: shuffle_ints,
    },
    RawEntry {
        native: "randomint",
        label: "Random Int",
        category: "number",
        description: "One integer chosen from the given list",
        example: "2",
        output: OutputKind::Int,
        params: &[param("ints", ParamKind::IntArray, "", "Integers to choose from")],
        generate: random_int,
    },
    RawEntry {
        native: "boolean",
        label: "Boolean",
        category: "misc",
        description: "True or false",
        example: "true",
        output: OutputKind::Bool,
        params: &[],
        generate: boolean,
    },
];

const FLOAT_DECIMALS: i32 = 3;

fn number(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let params = BoundParams::required(params, "min")?;
    let value = int_between(rng, params.int("min")?, params.int("max")?)?;
    Ok(Value::from(value))
}

fn float(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let params = BoundParams::required(params, "min")?;
    let value = float_between(rng, params.float("min")?, params.float("max")?)?;
    Ok(Value::from(round_to(value, FLOAT_DECIMALS)))
}

fn digit(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::String(digits(rng, 1)))
}

fn digit_n(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let params = BoundParams::required(params, "count")?;
    let length = count(params, "count")?;
    Ok(Value::String(digits(rng, length)))
}

fn shuffle_ints(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let mut ints = BoundParams::required(params, "ints")?.ints("ints")?;
    ints.shuffle(rng);
    Ok(Value::from(ints))
}

fn random_int(rng: &mut FakerRng, params: Option<&BoundParams>) -> Result<Value, GenerateError> {
    let ints = BoundParams::required(params, "ints")?.ints("ints")?;
    ints.choose(rng)
        .copied()
        .map(Value::from)
        .ok_or_else(|| GenerateError::EmptyChoice {
            parameter: "ints".to_owned(),
        })
}

fn boolean(rng: &mut FakerRng, _: Option<&BoundParams>) -> Result<Value, GenerateError> {
    Ok(Value::Bool(rng.random()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    fn bound(pairs: &[(&str, &[&str])]) -> BoundParams {
        let mut params = BoundParams::new();
        for (name, values) in pairs {
            params.insert(name, values.iter().map(|v| (*v).to_owned()).collect());
        }
        params
    }

    #[rstest]
    #[case("1", "6")]
    #[case("-3", "-3")]
    #[case("-2147483648", "2147483647")]
    fn number_respects_bounds(#[case] min: &str, #[case] max: &str) {
        let mut rng = FakerRng::seed_from_u64(12);
        let params = bound(&[("min", &[min]), ("max", &[max])]);
        let lo: i64 = min.parse().expect("min");
        let hi: i64 = max.parse().expect("max");
        for _ in 0..20 {
            let value = number(&mut rng, Some(&params))
                .expect("generated")
                .as_i64()
                .expect("integer");
            assert!((lo..=hi).contains(&value));
        }
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = FakerRng::seed_from_u64(4);
        let params = bound(&[("ints", &["1", "2", "3", "4", "5"])]);
        let Value::Array(values) = shuffle_ints(&mut rng, Some(&params)).expect("shuffled") else {
            panic!("expected an array");
        };
        let mut sorted: Vec<i64> = values.iter().filter_map(Value::as_i64).collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn random_int_rejects_empty_list() {
        let mut rng = FakerRng::seed_from_u64(4);
        let params = bound(&[("ints", &[])]);
        assert_eq!(
            random_int(&mut rng, Some(&params)),
            Err(GenerateError::EmptyChoice {
                parameter: "ints".to_owned()
            })
        );
    }

    #[test]
    fn digit_n_honours_count() {
        let mut rng = FakerRng::seed_from_u64(4);
        let params = bound(&[("count", &["11"])]);
        let value = digit_n(&mut rng, Some(&params)).expect("digits");
        assert_eq!(value.as_str().map(str::len), Some(11));
    }
}
