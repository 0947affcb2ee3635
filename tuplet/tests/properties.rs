use quickcheck::{quickcheck, TestResult};

use tuplet::*;

type Triple = T3<i8, bool, String>;

fn triple((a, b, c): (i8, bool, String)) -> Triple {
    T3::new(a, b, c)
}

fn exactly_one_relation_holds(host: (i8, bool, String), guest: (i8, bool, String)) -> bool {
    let (host, guest) = (triple(host), triple(guest));
    let lt = host.less_than(&guest);
    let gt = host.greater_than(&guest);
    let eq = host.compare(&guest).is_eq();

    [lt, eq, gt].iter().filter(|&&holds| holds).count() == 1
        && host.less_or_equal(&guest) == (lt || eq)
        && host.greater_or_equal(&guest) == (gt || eq)
}

fn agrees_with_ord(host: (i8, bool, String), guest: (i8, bool, String)) -> bool {
    let expected = host.cmp(&guest);
    let (host, guest) = (triple(host), triple(guest));
    host.compare(&guest) == Comparison::from(expected)
        && host.cmp(&guest) == expected
        && host.compare(&guest).is_eq() == (host == guest)
}

fn antisymmetric(host: (i8, bool, String), guest: (i8, bool, String)) -> bool {
    let (host, guest) = (triple(host), triple(guest));
    host.compare(&guest) == guest.compare(&host).reverse()
}

fn vec_roundtrip(values: (i8, bool, String)) -> bool {
    let tuple = triple(values);
    Triple::try_from_vec(tuple.to_vec()) == Ok(tuple)
}

fn array_roundtrip(values: (u64, Option<char>, Vec<u8>)) -> bool {
    let tuple = T3::from(values);
    T3::<u64, Option<char>, Vec<u8>>::try_from_array(tuple.to_array()) == Ok(tuple)
}

fn wrong_length_is_always_rejected(lengths: Vec<u8>) -> TestResult {
    if lengths.len() == Triple::ARITY {
        return TestResult::discard();
    }
    let values = lengths.into_iter().map(AnyValue::new).collect::<Vec<_>>();
    let actual = values.len();
    TestResult::from_bool(
        Triple::try_from_vec(values)
            == Err(TupleError::LengthMismatch {
                expected: Triple::ARITY,
                actual,
            }),
    )
}

fn display_matches_debug_of_values(values: (i8, bool, String)) -> bool {
    let tuple = triple(values.clone());
    tuple.to_string() == format!("[{:?} {:?} {:?}]", values.0, values.1, values.2)
}

#[test]
fn ordering_predicates_are_consistent() {
    quickcheck(exactly_one_relation_holds as fn(_, _) -> bool);
}

#[test]
fn comparison_agrees_with_ord() {
    quickcheck(agrees_with_ord as fn(_, _) -> bool);
}

#[test]
fn comparison_is_antisymmetric() {
    quickcheck(antisymmetric as fn(_, _) -> bool);
}

#[test]
fn untyped_roundtrip() {
    quickcheck(vec_roundtrip as fn(_) -> bool);
    quickcheck(array_roundtrip as fn(_) -> bool);
}

#[test]
fn length_is_validated() {
    quickcheck(wrong_length_is_always_rejected as fn(_) -> TestResult);
}

#[test]
fn display_lists_values() {
    quickcheck(display_matches_debug_of_values as fn(_) -> bool);
}
