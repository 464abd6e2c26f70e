#![allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]

use super::*;
use elx_value::TypeTag;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn bind(pattern: &Pattern, value: &Value) -> Option<Vec<Value>> {
    compile(pattern).bind(value).map(Bindings::into_vec)
}

fn ints(ns: &[i64]) -> Value {
    Value::list(ns.iter().copied().map(Value::int).collect())
}

// Leaf variants

#[test]
fn wildcard_matches_anything_and_binds_nothing() {
    let m = compile(&Pattern::wildcard());
    for value in [Value::Nil, Value::int(1), Value::string("x"), ints(&[1, 2])] {
        assert_eq!(m.bind(&value).map(Bindings::into_vec), Some(vec![]));
    }
}

#[test]
fn parameter_binds_the_value() {
    assert_eq!(bind(&Pattern::parameter(), &Value::int(4)), Some(vec![Value::int(4)]));
}

#[test]
fn bound_requires_deep_equality() {
    let pattern = Pattern::bound(ints(&[1, 2]));
    assert_eq!(bind(&pattern, &ints(&[1, 2])), Some(vec![ints(&[1, 2])]));
    assert_eq!(bind(&pattern, &ints(&[1, 3])), None);
    assert_eq!(bind(&pattern, &ints(&[1])), None);
}

#[test]
fn bound_keeps_int_and_float_apart() {
    assert_eq!(bind(&Pattern::bound(1), &Value::float(1.0)), None);
}

#[test]
fn literal_compares_numbers_numerically() {
    let m = compile(&Pattern::literal(1));
    assert!(m.bind(&Value::int(1)).unwrap().is_empty());
    assert!(m.bind(&Value::float(1.0)).is_some());
    assert!(m.bind(&Value::float(1.5)).is_none());
    assert!(m.bind(&Value::string("1")).is_none());
}

#[test]
fn nan_literal_matches_nan() {
    let m = compile(&Pattern::literal(f64::NAN));
    assert!(m.bind(&Value::float(f64::NAN)).is_some());
    assert!(m.bind(&Value::float(0.0)).is_none());
}

#[test]
fn symbol_matches_only_that_atom() {
    let m = compile(&Pattern::symbol("ok"));
    assert_eq!(m.bind(&Value::atom("ok")).map(Bindings::into_vec), Some(vec![]));
    assert!(m.bind(&Value::atom("error")).is_none());
    assert!(m.bind(&Value::string("ok")).is_none());
}

#[test]
fn function_tag_binds_matching_constructor() {
    let m = compile(&Pattern::function_tag(TypeTag::Str));
    assert_eq!(
        m.bind(&Value::string("a")).map(Bindings::into_vec),
        Some(vec![Value::string("a")])
    );
    assert!(m.bind(&Value::int(1)).is_none());

    let user = Atom::new("User");
    let m = compile(&Pattern::function_tag(TypeTag::Object(user)));
    assert!(m.bind(&Value::object(user, [])).is_some());
    assert!(m.bind(&Value::map([])).is_none());
}

#[test]
fn regex_tests_strings_only() {
    let m = compile(&Pattern::regex("^[a-z]+@").unwrap());
    assert_eq!(
        m.bind(&Value::string("jo@example.com")).map(Bindings::into_vec),
        Some(vec![])
    );
    assert!(m.bind(&Value::string("Jo@example.com")).is_none());
    assert!(m.bind(&Value::int(3)).is_none());
}

// List and string destructuring

#[test]
fn head_tail_binds_head_then_tail() {
    assert_eq!(
        bind(&Pattern::head_tail(), &ints(&[1, 2, 3])),
        Some(vec![Value::int(1), ints(&[2, 3])])
    );
    assert_eq!(
        bind(&Pattern::head_tail(), &ints(&[1, 2])),
        Some(vec![Value::int(1), ints(&[2])])
    );
}

#[test]
fn head_tail_needs_two_elements() {
    assert_eq!(bind(&Pattern::head_tail(), &ints(&[1])), None);
    assert_eq!(bind(&Pattern::head_tail(), &ints(&[])), None);
    assert_eq!(bind(&Pattern::head_tail(), &Value::tuple(vec![Value::int(1), Value::int(2)])), None);
}

#[test]
fn starts_with_binds_remainder() {
    let pattern = Pattern::starts_with("foo");
    assert_eq!(bind(&pattern, &Value::string("foobar")), Some(vec![Value::string("bar")]));
    assert_eq!(bind(&pattern, &Value::string("foo")), None);
    assert_eq!(bind(&pattern, &Value::string("barfoo")), None);
    assert_eq!(bind(&pattern, &Value::atom("foobar")), None);
}

#[test]
fn starts_with_handles_multibyte_prefix() {
    let pattern = Pattern::starts_with("é");
    assert_eq!(bind(&pattern, &Value::string("éa")), Some(vec![Value::string("a")]));
}

#[test]
fn capture_binds_inner_then_whole() {
    let pattern = Pattern::capture(Pattern::array([Pattern::parameter(), Pattern::wildcard()]));
    assert_eq!(
        bind(&pattern, &ints(&[1, 2])),
        Some(vec![Value::int(1), ints(&[1, 2])])
    );
    assert_eq!(bind(&pattern, &ints(&[1])), None);
}

// Containers

#[test]
fn array_requires_exact_length() {
    let pattern = Pattern::array([Pattern::parameter(), Pattern::parameter()]);
    assert_eq!(bind(&pattern, &ints(&[1, 2])), Some(vec![Value::int(1), Value::int(2)]));
    assert_eq!(bind(&pattern, &ints(&[1, 2, 3])), None);
    assert_eq!(bind(&pattern, &ints(&[1])), None);
}

#[test]
fn empty_array_matches_empty_list() {
    let pattern = Pattern::array(Vec::<Pattern>::new());
    assert_eq!(bind(&pattern, &ints(&[])), Some(vec![]));
    assert_eq!(bind(&pattern, &ints(&[1])), None);
}

#[test]
fn array_does_not_match_tuple() {
    let pattern = Pattern::array([Pattern::parameter()]);
    assert_eq!(bind(&pattern, &Value::tuple(vec![Value::int(1)])), None);
}

#[test]
fn tuple_matches_positionally() {
    let pattern = Pattern::tuple([Pattern::symbol("ok"), Pattern::parameter()]);
    assert_eq!(bind(&pattern, &Value::ok(Value::int(9))), Some(vec![Value::int(9)]));
    assert_eq!(bind(&pattern, &Value::error(Value::int(9))), None);
    assert_eq!(bind(&pattern, &ints(&[1, 2])), None);
}

#[test]
fn nested_bindings_follow_descent_order() {
    let pattern = Pattern::array([
        Pattern::parameter(),
        Pattern::array([Pattern::parameter(), Pattern::head_tail()]),
        Pattern::parameter(),
    ]);
    let value = Value::list(vec![Value::int(1), Value::list(vec![Value::int(2), ints(&[3, 4, 5])]), Value::int(6)]);
    assert_eq!(
        bind(&pattern, &value),
        Some(vec![Value::int(1), Value::int(2), Value::int(3), ints(&[4, 5]), Value::int(6)])
    );
}

#[test]
fn object_matches_listed_keys_in_pattern_order() {
    let (a, b, c) = (Atom::new("a"), Atom::new("b"), Atom::new("c"));
    let value = Value::map([(a, Value::int(1)), (b, Value::int(2)), (c, Value::int(3))]);
    let pattern = Pattern::map([(c, Pattern::parameter()), (a, Pattern::parameter())]);
    assert_eq!(bind(&pattern, &value), Some(vec![Value::int(3), Value::int(1)]));
}

#[test]
fn object_fails_on_missing_key() {
    let (a, b) = (Atom::new("a"), Atom::new("b"));
    let value = Value::map([(a, Value::int(1))]);
    let pattern = Pattern::map([(a, Pattern::parameter()), (b, Pattern::parameter())]);
    assert_eq!(bind(&pattern, &value), None);
}

#[test]
fn object_wildcard_field_binds_nothing() {
    let a = Atom::new("a");
    let b = Atom::new("b");
    let pattern = Pattern::map([(a, Pattern::wildcard())]);
    let value = Value::map([(a, Value::int(1)), (b, Value::int(2))]);
    assert_eq!(bind(&pattern, &value), Some(vec![]));
    assert_eq!(bind(&pattern, &Value::map([(b, Value::int(2))])), None);
}

#[test]
fn object_missing_key_is_checked_before_any_field() {
    let (a, b) = (Atom::new("a"), Atom::new("b"));
    let value = Value::map([(a, Value::int(1))]);
    let pattern = Pattern::map([(a, Pattern::parameter()), (b, Pattern::parameter())]);
    let mut bindings = Bindings::new();
    assert!(!compile(&pattern).matches(&value, &mut bindings));
    assert!(bindings.is_empty());
}

#[test]
fn object_requires_same_tag() {
    let user = Atom::new("User");
    let admin = Atom::new("Admin");
    let id = Atom::new("id");
    let value = Value::object(user, [(id, Value::int(7))]);

    let same = Pattern::object(user, [(id, Pattern::parameter())]);
    assert_eq!(bind(&same, &value), Some(vec![Value::int(7)]));

    let other = Pattern::object(admin, [(id, Pattern::parameter())]);
    assert_eq!(bind(&other, &value), None);

    let plain = Pattern::map([(id, Pattern::parameter())]);
    assert_eq!(bind(&plain, &value), None);
}

#[test]
fn empty_object_pattern_matches_any_object_with_tag() {
    let pattern = Pattern::map(Vec::<(Atom, Pattern)>::new());
    assert!(compile(&pattern).bind(&Value::map([(Atom::new("x"), Value::Nil)])).is_some());
    assert!(compile(&pattern).bind(&ints(&[])).is_none());
}

#[test]
fn converted_value_matches_itself() {
    let value = Value::tuple(vec![Value::atom("ok"), ints(&[1, 2]), Value::string("s")]);
    assert_eq!(bind(&Pattern::from(&value), &value), Some(vec![]));
}

#[test]
fn matcher_is_reusable() {
    let m = compile(&Pattern::head_tail());
    for _ in 0..3 {
        assert_eq!(m.bind(&ints(&[1, 2])).map(|b| b.len()), Some(2));
    }
    assert_eq!(format!("{m:?}"), "Matcher([$ | $])");
}

proptest! {
    #[test]
    fn array_of_parameters_binds_every_element(ns in prop::collection::vec(any::<i64>(), 0..16)) {
        let pattern = Pattern::array(ns.iter().map(|_| Pattern::parameter()).collect::<Vec<_>>());
        let value = ints(&ns);
        let bound = bind(&pattern, &value).unwrap();
        prop_assert_eq!(bound, ns.iter().copied().map(Value::int).collect::<Vec<_>>());
    }

    #[test]
    fn matching_is_deterministic(ns in prop::collection::vec(any::<i64>(), 0..8)) {
        let m = compile(&Pattern::capture(Pattern::head_tail()));
        let value = ints(&ns);
        prop_assert_eq!(m.bind(&value), m.bind(&value));
    }
}

#[test]
fn deeply_nested_patterns_compile_and_match() {
    let depth = 20_000;
    let mut pattern = Pattern::parameter();
    let mut value = Value::int(7);
    let mut other = Value::int(8);
    for _ in 0..depth {
        pattern = Pattern::array([pattern]);
        value = Value::list(vec![value]);
        other = Value::list(vec![other]);
    }

    let matcher = compile(&pattern);
    assert_eq!(matcher.bind(&value).map(Bindings::into_vec), Some(vec![Value::int(7)]));
    assert!(matcher.pattern().to_string().starts_with("[[[["));
    assert!(!value.equals(&other));

    // Tear-down recurses without growing the stack; leak the fixtures.
    std::mem::forget((pattern, value, other, matcher));
}
