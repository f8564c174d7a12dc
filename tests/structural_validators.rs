//! Tests for structural validators (object shapes, homogeneous arrays)

use pretty_assertions::assert_eq;
use serde_json::json;
use typeguard::{
    Validator, ValidatorExt, array, boolean, integer, nullable, number, object, string,
    undefinable, union,
};

#[test]
fn object_shape_checks_declared_fields_only() {
    let validator = object()
        .field("id", integer())
        .field("name", string());

    assert!(validator.test(&json!({"id": 1, "name": "a"})));
    assert!(validator.test(&json!({"id": 1, "name": "a", "role": "admin"})));
    assert!(!validator.test(&json!({"id": "1", "name": "a"})));
    assert!(!validator.test(&json!({"id": 1})));
}

#[test]
fn object_shape_rejects_non_objects() {
    let validator = object().field("id", integer());
    for value in [json!(null), json!(1), json!("{}"), json!([{"id": 1}])] {
        assert!(!validator.test(&value));
    }
}

#[test]
fn empty_shape_accepts_any_object() {
    let validator = object();
    assert!(validator.test(&json!({})));
    assert!(validator.test(&json!({"anything": [1, 2, 3]})));
    assert!(!validator.test(&json!([])));
}

#[test]
fn nullable_field_accepts_null_but_not_absence() {
    let validator = object().field("age", nullable(number()));
    assert!(validator.test(&json!({"age": null})));
    assert!(validator.test(&json!({"age": 30})));
    assert!(!validator.test(&json!({})));
}

#[test]
fn undefinable_field_accepts_absence_but_not_null() {
    let validator = object().field("age", undefinable(number()));
    assert!(validator.test(&json!({})));
    assert!(validator.test(&json!({"age": 30})));
    assert!(!validator.test(&json!({"age": null})));
}

#[test]
fn nested_shapes_walk_depth_first() {
    let validator = object().field(
        "profile",
        object()
            .field("email", string())
            .field("verified", boolean()),
    );

    assert!(validator.test(&json!({
        "profile": {"email": "a@b.c", "verified": true}
    })));
    assert!(!validator.test(&json!({
        "profile": {"email": "a@b.c", "verified": "yes"}
    })));
    assert!(!validator.test(&json!({"profile": null})));
}

#[test]
fn array_of_unions_accepts_mixed_elements() {
    let validator = array(union(vec![string().boxed(), number().boxed()]));
    assert!(validator.test(&json!(["a", 1, 2.5, "b"])));
    assert!(!validator.test(&json!(["a", true])));
}

#[test]
fn array_of_shapes() {
    let validator = array(object().field("id", integer()));
    assert!(validator.test(&json!([{"id": 1}, {"id": 2, "x": 0}])));
    assert!(!validator.test(&json!([{"id": 1}, {"id": "2"}])));
}

#[test]
fn structural_failure_messages_are_kind_level_only() {
    let shape = object().field("name", string());
    assert_eq!(
        shape.describe_failure(&json!({"name": 1})),
        "Expected object, got object"
    );

    let items = array(number());
    assert_eq!(
        items.describe_failure(&json!([1, "two"])),
        "Expected array, got array"
    );
    assert_eq!(items.describe_failure(&json!(true)), "Expected array, got boolean");
}

#[test]
fn object_macro_declares_fields_in_order() {
    let validator = typeguard::object! {
        "name" => string(),
        "age" => nullable(number()),
    };
    let declared: Vec<_> = validator.field_names().collect();
    assert_eq!(declared, vec!["name", "age"]);
    assert!(validator.test(&json!({"name": "a", "age": null})));
}
