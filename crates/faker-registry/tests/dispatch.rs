//! Integration tests for the dynamic-object surface.
//!
//! These tests drive the faker the way a scripting binding would: property
//! lookups, the reserved `call` key, and positional dynamic arguments.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use faker_registry::{
    CALL_KEY, DynamicObject, Faker, FakerError, GenerateError, Invoker, Property, ZEN_CATEGORY,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn faker() -> Faker {
    Faker::new(31)
}

fn invoker(faker: &Faker) -> Invoker<'_> {
    match DynamicObject::from(faker).get(CALL_KEY) {
        Property::Call(invoker) => invoker,
        other => panic!("expected the call capability, got {other:?}"),
    }
}

#[rstest]
fn unknown_function_through_call_is_an_error(faker: Faker) {
    assert_eq!(
        invoker(&faker).call(&[json!("no_such_function")]),
        Err(FakerError::UnknownFunction {
            name: "no_such_function".to_owned()
        })
    );
}

#[rstest]
fn unknown_properties_are_soft(faker: Faker) {
    let top = DynamicObject::from(&faker);
    assert!(top.get("no_such_function").is_undefined());
    assert!(top.get("firstName").is_undefined());
}

#[test]
fn adapter_and_direct_calls_share_one_sequence() {
    let direct = Faker::new(55);
    let dynamic = Faker::new(55);

    let expected = [
        direct.call("firstName", &[]).expect("first"),
        direct.call("number", &[json!(1), json!(100)]).expect("second"),
        direct.call("words", &[json!(2)]).expect("third"),
    ];

    let call = invoker(&dynamic);
    let top = DynamicObject::from(&dynamic);
    let Property::Category(person) = top.get("person") else {
        panic!("expected person category");
    };
    let Property::Function(first_name) = DynamicObject::from(person).get("firstName") else {
        panic!("expected firstName function");
    };
    let actual = [
        first_name.invoke(&[]).expect("first"),
        call.call(&[json!("number"), json!(1), json!(100)])
            .expect("second"),
        dynamic
            .category(ZEN_CATEGORY)
            .expect("zen category")
            .call("words", &[json!(2)])
            .expect("third"),
    ];

    assert_eq!(expected, actual);
}

#[rstest]
fn top_level_keys_are_category_names(faker: Faker) {
    let top = DynamicObject::from(&faker);
    let keys = top.keys();
    assert!(keys.iter().any(|key| key == "person"));
    assert!(keys.iter().any(|key| key == ZEN_CATEGORY));
    assert!(!keys.iter().any(|key| key == CALL_KEY));
    for key in keys {
        assert!(matches!(top.get(key), Property::Category(_)), "{key}");
    }
}

#[rstest]
fn array_arguments_bind_element_wise(faker: Faker) {
    let value = invoker(&faker)
        .call(&[json!("shuffleInts"), json!([3, 1, 2])])
        .expect("shuffled");
    let mut ints: Vec<i64> = value
        .as_array()
        .expect("array")
        .iter()
        .filter_map(Value::as_i64)
        .collect();
    ints.sort_unstable();
    assert_eq!(ints, vec![1, 2, 3]);
}

#[rstest]
fn scalar_arguments_bind_as_text(faker: Faker) {
    let value = invoker(&faker)
        .call(&[json!("numerify"), json!("id-###")])
        .expect("filled");
    let text = value.as_str().expect("string");
    assert!(text.starts_with("id-"));
    assert!(text.chars().skip(3).all(|c| c.is_ascii_digit()));
}

#[rstest]
#[case::inverted(
    "number",
    vec![json!(9), json!(1)],
    GenerateError::InvalidRange { min: "9".to_owned(), max: "1".to_owned() }
)]
#[case::not_a_number(
    "words",
    vec![json!("many")],
    GenerateError::InvalidParameter {
        parameter: "count".to_owned(),
        value: "many".to_owned(),
        message: "invalid digit found in string".to_owned(),
    }
)]
fn generator_errors_surface_as_generation_failures(
    faker: Faker,
    #[case] function: &str,
    #[case] args: Vec<Value>,
    #[case] expected: GenerateError,
) {
    assert_eq!(
        faker.call(function, &args),
        Err(FakerError::GenerationFailure {
            function: function.to_owned(),
            source: expected,
        })
    );
}

#[rstest]
fn view_probing_does_not_consume_randomness(faker: Faker) {
    let reference = Faker::new(31);
    let top = DynamicObject::from(&faker);
    let undefined =
        ["person", "spaceships", CALL_KEY, "zen"].map(|key| top.get(key).is_undefined());
    assert_eq!(undefined, [false, true, false, false]);
    assert!(!top.has("person"));
    assert!(!top.delete("person"));

    assert_eq!(
        faker.call("uuid", &[]).expect("uuid"),
        reference.call("uuid", &[]).expect("uuid")
    );
}
