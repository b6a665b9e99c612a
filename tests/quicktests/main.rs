//! Property tests running each tree against a plain multiset model.

use std::collections::BTreeMap;
use std::fmt::Debug;

use bst_set::OrderedSet;
use quickcheck::{Arbitrary, Gen, TestResult};

mod recursive;

/// An enum for the various kinds of "things" to do to
/// the trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Add the key to the tree
    Add(i8),
    /// Remove the key from the tree
    Remove(i8),
    /// Look the key up
    Contains(i8),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Add(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            2 => Op::Contains(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// How many copies of each key have been added and not yet removed.
#[derive(Default)]
struct Model(BTreeMap<i64, usize>);

impl Model {
    fn add(&mut self, x: i64) {
        *self.0.entry(x).or_default() += 1;
    }

    fn remove(&mut self, x: i64) -> bool {
        match self.0.get_mut(&x) {
            Some(1) => {
                self.0.remove(&x);
                true
            }
            Some(count) => {
                *count -= 1;
                true
            }
            None => false,
        }
    }

    fn contains(&self, x: i64) -> bool {
        self.0.contains_key(&x)
    }

    fn len(&self) -> usize {
        self.0.values().sum()
    }
}

/// Applies a set of operations to a tree and a model, checking every answer as it goes and every
/// possible key at the end. This way we can ensure that after a random smattering of adds and
/// removes the tree holds exactly the same keys, duplicates included.
pub(crate) fn matches_model<S>(ops: &[Op]) -> bool
where
    S: OrderedSet + Default,
{
    let mut tree = S::default();
    let mut model = Model::default();

    for op in ops {
        let agrees = match *op {
            Op::Add(x) => {
                model.add(x.into());
                tree.add(x.into())
            }
            Op::Remove(x) => tree.remove(x.into()) == model.remove(x.into()),
            Op::Contains(x) => tree.contains(x.into()) == model.contains(x.into()),
        };
        if !agrees || tree.len() != model.len() {
            return false;
        }
    }

    (i8::MIN..=i8::MAX).all(|x| tree.contains(x.into()) == model.contains(x.into()))
}

pub(crate) fn contains_all<S>(xs: &[i64]) -> bool
where
    S: OrderedSet + Default,
{
    let mut tree = S::default();
    for &x in xs {
        tree.add(x);
    }

    tree.len() == xs.len() && xs.iter().all(|&x| tree.contains(x))
}

pub(crate) fn contains_not<S>(xs: &[i64], nots: &[i64]) -> bool
where
    S: OrderedSet + Default,
{
    let mut tree = S::default();
    for &x in xs {
        tree.add(x);
    }

    nots.iter()
        .filter(|x| !xs.contains(*x))
        .all(|&x| !tree.contains(x))
}

/// Removing once takes out exactly one copy of a key that was added several times.
pub(crate) fn remove_one_copy<S>(xs: &[i8], x: i8, copies: u8) -> bool
where
    S: OrderedSet + Default,
{
    let copies = usize::from(copies % 8) + 1;
    let mut tree = S::default();
    for &y in xs.iter().filter(|&&y| y != x) {
        tree.add(y.into());
    }
    for _ in 0..copies {
        tree.add(x.into());
    }

    (0..copies).all(|_| tree.contains(x.into()) && tree.remove(x.into()))
        && !tree.contains(x.into())
        && !tree.remove(x.into())
        && tree.len() == xs.iter().filter(|&&y| y != x).count()
}

pub(crate) fn round_trip<S>(xs: &[i64], x: i64) -> TestResult
where
    S: OrderedSet + Default,
{
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let mut tree = S::default();
    for &y in xs {
        tree.add(y);
    }

    tree.add(x);
    let found = tree.contains(x);
    let removed = tree.remove(x);
    TestResult::from_bool(found && removed && !tree.contains(x))
}

pub(crate) fn remove_absent_is_noop<S>(xs: &[i64], x: i64) -> TestResult
where
    S: OrderedSet + Default + Debug,
{
    if xs.contains(&x) {
        return TestResult::discard();
    }
    let mut tree = S::default();
    for &y in xs {
        tree.add(y);
    }

    let before = format!("{tree:?}");
    let removed = tree.remove(x);
    TestResult::from_bool(!removed && format!("{tree:?}") == before)
}
