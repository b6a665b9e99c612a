use bst_set::recursive::Tree;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    crate::matches_model::<Tree>(&ops)
}

#[quickcheck]
fn contains(xs: Vec<i64>) -> bool {
    crate::contains_all::<Tree>(&xs)
}

#[quickcheck]
fn contains_not(xs: Vec<i64>, nots: Vec<i64>) -> bool {
    crate::contains_not::<Tree>(&xs, &nots)
}

#[quickcheck]
fn with_duplicates(xs: Vec<i8>, x: i8, copies: u8) -> bool {
    crate::remove_one_copy::<Tree>(&xs, x, copies)
}

#[quickcheck]
fn round_trip(xs: Vec<i64>, x: i64) -> TestResult {
    crate::round_trip::<Tree>(&xs, x)
}

#[quickcheck]
fn remove_absent_is_noop(xs: Vec<i64>, x: i64) -> TestResult {
    crate::remove_absent_is_noop::<Tree>(&xs, x)
}
