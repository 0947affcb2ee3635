use std::any::type_name;
use std::convert::TryFrom;

use tuplet::*;

#[test]
fn natural_ordering_of_pairs() {
    let lesser = T2::new(1, 2);
    let greater = T2::new(2, 3);

    assert_eq!(lesser.compare(&greater), Comparison::Less);
    assert!(lesser.less_than(&greater));
    assert!(lesser.less_or_equal(&greater));
    assert!(!lesser.greater_than(&greater));
    assert!(!lesser.greater_or_equal(&greater));

    assert_eq!(greater.compare(&lesser), Comparison::Greater);
    assert!(greater.greater_or_equal(&lesser));
}

#[test]
fn later_fields_break_ties() {
    assert_eq!(T3::new(1, 2, 3).compare(&T3::new(1, 2, 4)), Comparison::Less);
    assert_eq!(T3::new(1, 3, 0).compare(&T3::new(1, 2, 9)), Comparison::Greater);
    assert_eq!(T3::new("a", "b", "c").compare(&T3::new("a", "b", "c")), Comparison::Equal);
}

#[test]
fn single_string_from_array() {
    let tuple = T1::<&str>::try_from_array(any_values!["1"]);
    assert_eq!(tuple, Ok(T1::new("1")));
    assert_eq!(T1::<&str>::from_array(any_values!["1"]), T1::new("1"));
}

#[test]
fn mismatch_at_first_position() {
    let error = T2::<&str, &str>::try_from_array(any_values![0, "1"]).unwrap_err();
    assert_eq!(
        error,
        TupleError::TypeMismatch {
            index: 0,
            expected: type_name::<&str>(),
            actual: type_name::<i32>(),
        }
    );
    assert_eq!(
        error.to_string(),
        "value at index 0 expected to have type &str but has type i32"
    );
}

#[test]
fn mismatch_at_second_position() {
    let error = T2::<&str, &str>::try_from_array(any_values!["0", 1]).unwrap_err();
    assert_eq!(
        error,
        TupleError::TypeMismatch {
            index: 1,
            expected: type_name::<&str>(),
            actual: type_name::<i32>(),
        }
    );
}

#[test]
fn lowest_mismatch_wins() {
    let error = T3::<u8, u8, u8>::try_from_vec(any_values![1u8, 'x', "y"].into()).unwrap_err();
    assert_eq!(
        error,
        TupleError::TypeMismatch {
            index: 1,
            expected: type_name::<u8>(),
            actual: type_name::<char>(),
        }
    );
}

#[test]
fn short_vec_is_a_length_mismatch() {
    let values = vec![AnyValue::new("1"), AnyValue::new("2")];
    let error = T3::<&str, &str, &str>::try_from_vec(values).unwrap_err();
    assert_eq!(error, TupleError::LengthMismatch { expected: 3, actual: 2 });
    assert_eq!(
        error.to_string(),
        "collection length 2 must match number of tuple values 3"
    );
}

#[test]
fn matching_prefix_does_not_hide_length_mismatch() {
    // Every value present would have been the right type.
    let values = vec![AnyValue::new(1), AnyValue::new(2), AnyValue::new(3)];
    assert_eq!(
        T2::<i32, i32>::try_from_vec(values),
        Err(TupleError::LengthMismatch { expected: 2, actual: 3 })
    );
}

#[test]
fn empty_vec() {
    assert_eq!(
        T1::<String>::try_from_vec(Vec::new()),
        Err(TupleError::LengthMismatch { expected: 1, actual: 0 })
    );
}

#[test]
#[should_panic(expected = "value at index 0 expected to have type &str but has type i32")]
fn from_array_panics() {
    T2::<&str, &str>::from_array(any_values![0, "1"]);
}

#[test]
#[should_panic(expected = "collection length 2 must match number of tuple values 3")]
fn from_vec_panics() {
    T3::<i32, i32, i32>::from_vec(vec![AnyValue::new(1), AnyValue::new(2)]);
}

#[test]
fn std_conversions() {
    let tuple = T2::<&str, i32>::try_from(any_values!["a", 1]).unwrap();
    assert_eq!(tuple, T2::new("a", 1));

    let tuple = T2::<&str, i32>::try_from(vec![AnyValue::new("a"), AnyValue::new(1)]).unwrap();
    assert_eq!(tuple, T2::new("a", 1));

    let native: (&str, i32) = tuple.into();
    assert_eq!(native, ("a", 1));
    assert_eq!(T2::from(native), tuple);
}

#[test]
fn erased_values_keep_their_types() {
    let values = T3::new(1u8, String::from("two"), 3.0f64).into_vec();
    assert!(values[0].is::<u8>());
    assert_eq!(values[1].downcast_ref::<String>().map(String::as_str), Some("two"));
    assert_eq!(values[2].type_name(), "f64");
}

#[test]
fn accessors() {
    let tuple = T3::new('a', "b", 3);
    assert_eq!(tuple.len(), 3);
    assert_eq!(*tuple.v1(), 'a');
    assert_eq!(*tuple.v2(), "b");
    assert_eq!(*tuple.v3(), 3);
    assert_eq!(tuple.values(), (&'a', &"b", &3));
}

#[test]
fn display_of_strings() {
    assert_eq!(T2::new("1", "2").to_string(), r#"["1" "2"]"#);
    assert_eq!(T1::new(7).to_string(), "[7]");
}

#[test]
fn debug_names_values_and_types() {
    assert_eq!(
        format!("{:?}", T2::new("1", "2")),
        r#"T2<&str, &str> { v1: "1", v2: "2" }"#
    );
    assert_eq!(
        format!("{:?}", T2::new(1u8, String::from("x"))),
        r#"T2<u8, String> { v1: 1, v2: "x" }"#
    );
}

#[test]
fn derived_traits_follow_fields() {
    assert_eq!(T2::<i32, String>::default(), T2::new(0, String::new()));
    assert!(T2::new(1, 2) < T2::new(1, 3));
    assert_eq!(T2::new(1, 2).cmp(&T2::new(1, 2)), std::cmp::Ordering::Equal);

    let mut set = std::collections::HashSet::new();
    set.insert(T2::new("a", 1));
    assert!(set.contains(&T2::new("a", 1)));
}
