// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Set of real numbers represented as a union of disjoint intervals.
//!
//! It stores intervals in a sorted vector. `(-5, 1] U [3, 10)` is stored as `{(-5, 1], [3, 10)}`. Intervals are kept as few as possible: two intervals whose union is an interval (they share a point, or they meet at a bound kept by one of them) are merged into one. Hence `[1, 2) U [2, 3]` is stored as `{[1, 3]}` whereas `[1, 2) U (2, 3]` stays in two pieces because `2` belongs to neither.
//!
//! The complement is taken relatively to the whole real line `[-inf, +inf]`.
//!
//! # Examples
//!
//! ```rust
//! use real_interval::IntervalSet;
//! use gcollections::ops::*;
//!
//! let a = IntervalSet::new(true, 3.0, 10.0, false).unwrap();
//! let b = IntervalSet::new(false, -5.0, 1.0, true).unwrap();
//! let c = a.union(&b);
//! assert_eq!(c.to_string(), "(-5, 1] [3, 10)");
//! assert!(c.contains(&6.0) && c.contains(&-4.9999) && !c.contains(&700.0));
//! assert_eq!(c.complement().to_string(), "[-inf, -5] (1, 3) [10, inf]");
//! ```
//!
//! # See also
//! [interval](../interval/index.html)

use crate::error::IntervalError;
use crate::interval::Interval;
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Complement, Contains, Difference, Disjoint, Empty, Intersection, IsEmpty, IsSingleton, Overlap, Subset, Union};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Display, Error, Formatter};
use std::iter::{FromIterator, Peekable};
use std::ops::{BitAnd, BitOr, Not, Sub};
use std::slice;
use std::vec;

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet<Bound>
{
  intervals: Vec<Interval<Bound>>
}

impl<Bound: Real> IntervalSet<Bound>
{
  /// Set made of the single interval from `lb` to `ub`. See `Interval::new`.
  pub fn new(lb_inclusive: bool, lb: Bound, ub: Bound, ub_inclusive: bool) -> Result<Self, IntervalError<Bound>> {
    Interval::new(lb_inclusive, lb, ub, ub_inclusive).map(IntervalSet::from)
  }

  /// Set made of already normalized intervals.
  ///
  /// Fails with `IntervalError::InvariantViolation` if an interval is empty, or if two neighbours are not in ascending order or could be merged into one interval.
  pub fn from_disjoint(intervals: Vec<Interval<Bound>>) -> Result<Self, IntervalError<Bound>> {
    let mut res = IntervalSet::empty();
    for x in intervals {
      res.check_push(&x)?;
      res.intervals.push(x);
    }
    Ok(res)
  }

  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  /// Intervals of the set, in ascending order.
  pub fn intervals(&self) -> &[Interval<Bound>] {
    &self.intervals
  }

  /// Copy of the intervals of the set, in ascending order.
  pub fn flatten(&self) -> Vec<Interval<Bound>> {
    self.intervals.clone()
  }

  pub fn iter(&self) -> slice::Iter<'_, Interval<Bound>> {
    self.intervals.iter()
  }

  /// Smallest interval covering the set, `None` if it is empty.
  pub fn span(&self) -> Option<Interval<Bound>> {
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) => Some(front.hull(back)),
      _ => None
    }
  }

  fn check_push(&self, x: &Interval<Bound>) -> Result<(), IntervalError<Bound>> {
    if x.is_empty() {
      return Err(IntervalError::InvariantViolation { previous: *x, next: *x });
    }
    match self.intervals.last() {
      Some(back) if !back.precedes(x) =>
        Err(IntervalError::InvariantViolation { previous: *back, next: *x }),
      _ => Ok(())
    }
  }

  fn push(&mut self, x: Interval<Bound>) {
    debug_assert!(self.check_push(&x).is_ok(),
      "The intervals array must be ordered and intervals must not be joinable. For a safe push, use the union operation.");
    self.intervals.push(x);
  }

  fn join_or_push(&mut self, x: Interval<Bound>) {
    if x.is_empty() {
      return;
    }
    let joint = match self.intervals.last() {
      Some(back) => {
        debug_assert!(cmp_lower(back.lower_bound(), x.lower_bound()) != Ordering::Greater,
          "This operation is only for pushing interval to the back of the array, possibly overlapping with the last element.");
        if back.joinable(&x) { Some(back.hull(&x)) } else { None }
      }
      None => None
    };
    match joint {
      Some(joint) => {
        self.intervals.pop();
        self.intervals.push(joint);
      }
      None => self.push(x)
    }
  }

  /// Appends the gap from `lb` to `ub` unless it holds no point.
  fn push_gap(&mut self, lb: (Bound, bool), ub: (Bound, bool)) {
    let gap = Interval::make(lb.1, lb.0, ub.0, ub.1);
    if !gap.is_empty() {
      self.push(gap);
    }
  }
}

impl<Bound> Collection for IntervalSet<Bound>
{
  type Item = Bound;
}

impl<Bound: Real> From<Interval<Bound>> for IntervalSet<Bound>
{
  fn from(i: Interval<Bound>) -> IntervalSet<Bound> {
    let mut res = IntervalSet::empty();
    res.join_or_push(i);
    res
  }
}

impl<Bound: Real> Extend<Interval<Bound>> for IntervalSet<Bound>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval<Bound>>
  {
    let mut pending: Vec<Interval<Bound>> = iterable.into_iter().collect();
    pending.sort_by(|a, b| cmp_lower(a.lower_bound(), b.lower_bound()));
    let mut added = IntervalSet::empty();
    for x in pending {
      added.join_or_push(x);
    }
    *self = self.union(&added);
  }
}

impl<Bound: Real> FromIterator<Interval<Bound>> for IntervalSet<Bound>
{
  fn from_iter<I>(iterable: I) -> IntervalSet<Bound> where
   I: IntoIterator<Item=Interval<Bound>>
  {
    let mut res = IntervalSet::empty();
    res.extend(iterable);
    res
  }
}

impl<Bound> IntoIterator for IntervalSet<Bound>
{
  type Item = Interval<Bound>;
  type IntoIter = vec::IntoIter<Interval<Bound>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.into_iter()
  }
}

impl<'a, Bound> IntoIterator for &'a IntervalSet<Bound>
{
  type Item = &'a Interval<Bound>;
  type IntoIter = slice::Iter<'a, Interval<Bound>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.iter()
  }
}

impl<Bound: Real> Empty for IntervalSet<Bound>
{
  fn empty() -> IntervalSet<Bound> {
    IntervalSet {
      intervals: vec![]
    }
  }
}

impl<Bound: Real> Whole for IntervalSet<Bound>
{
  fn whole() -> IntervalSet<Bound> {
    IntervalSet::from(Interval::whole())
  }
}

impl<Bound: Real> IsEmpty for IntervalSet<Bound>
{
  fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }
}

impl<Bound: Real> IsSingleton for IntervalSet<Bound>
{
  fn is_singleton(&self) -> bool {
    self.intervals.len() == 1 && self.intervals[0].is_singleton()
  }
}

impl<Bound: Real> Contains for IntervalSet<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    // First interval not lying entirely before `value`; only this one can hold it.
    let idx = self.intervals.partition_point(|i| i.ends_before(*value));
    self.intervals.get(idx).map_or(false, |i| i.contains(value))
  }
}

fn advance_one<I, F, Bound>(a: &mut Peekable<I>, b: &mut Peekable<I>, choose: F) -> Option<Interval<Bound>> where
 I: Iterator<Item=Interval<Bound>>,
 F: Fn(&Interval<Bound>, &Interval<Bound>) -> bool
{
  let who_advance = match (a.peek(), b.peek()) {
    (Some(i), Some(j)) => choose(i, j),
    (Some(_), None) => true,
    (None, _) => false
  };
  if who_advance { a.next() } else { b.next() }
}

fn advance_lower<I, Bound>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Interval<Bound>> where
 I: Iterator<Item=Interval<Bound>>,
 Bound: Real
{
  advance_one(a, b, |i, j| cmp_lower(i.lower_bound(), j.lower_bound()) != Ordering::Greater)
}

// Advance the one with the lower upper bound.
fn advance_lub<I, Bound>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Interval<Bound>> where
 I: Iterator<Item=Interval<Bound>>,
 Bound: Real
{
  advance_one(a, b, |i, j| cmp_upper(i.upper_bound(), j.upper_bound()) != Ordering::Greater)
}

impl<Bound: Real> Union for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn union(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    let mut res = IntervalSet::empty();
    while let Some(lower) = advance_lower(a, b) {
      res.join_or_push(lower);
    }
    res
  }
}

impl<Bound: Real> Intersection for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn intersection(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    let mut res = IntervalSet::empty();
    while let (Some(&i), Some(&j)) = (a.peek(), b.peek()) {
      if let Some(k) = i.intersection(&j) {
        res.push(k);
      }
      advance_lub(a, b);
    }
    res
  }
}

impl<Bound: Real> Complement for IntervalSet<Bound>
{
  fn complement(&self) -> IntervalSet<Bound> {
    let mut res = IntervalSet::empty();
    let mut gap_lb = (Bound::neg_infinity(), true);
    for x in &self.intervals {
      res.push_gap(gap_lb, (x.lower(), !x.is_lower_inclusive()));
      gap_lb = (x.upper(), !x.is_upper_inclusive());
    }
    res.push_gap(gap_lb, (Bound::infinity(), true));
    res
  }
}

impl<Bound: Real> Difference for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn difference(&self, rhs: &IntervalSet<Bound>) -> IntervalSet<Bound> {
    self.intersection(&rhs.complement())
  }
}

impl<Bound: Real> Disjoint for IntervalSet<Bound>
{
  fn is_disjoint(&self, rhs: &IntervalSet<Bound>) -> bool {
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    while let (Some(&i), Some(&j)) = (a.peek(), b.peek()) {
      if i.intersects(&j) {
        return false;
      }
      advance_lub(a, b);
    }
    true
  }
}

impl<Bound: Real> Subset for IntervalSet<Bound>
{
  fn is_subset(&self, rhs: &IntervalSet<Bound>) -> bool {
    self.difference(rhs).is_empty()
  }
}

forward_all_binop!(impl BitOr, bitor, union);
forward_all_binop!(impl BitAnd, bitand, intersection);
forward_all_binop!(impl Sub, sub, difference);

impl<Bound: Real> Not for IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn not(self) -> IntervalSet<Bound> {
    self.complement()
  }
}

impl<'a, Bound: Real> Not for &'a IntervalSet<Bound>
{
  type Output = IntervalSet<Bound>;

  fn not(self) -> IntervalSet<Bound> {
    self.complement()
  }
}

impl<Bound: Real> Display for IntervalSet<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.intervals.is_empty() {
      return formatter.write_str("{}");
    }
    for (idx, x) in self.intervals.iter().enumerate() {
      if idx > 0 {
        formatter.write_str(" ")?;
      }
      write!(formatter, "{}", x)?;
    }
    Ok(())
  }
}

impl<Bound: Real + Serialize> Serialize for IntervalSet<Bound>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(&self.intervals)
  }
}

impl<'de, Bound: Real + Deserialize<'de>> Deserialize<'de> for IntervalSet<Bound>
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let intervals = Vec::<Interval<Bound>>::deserialize(deserializer)?;
    IntervalSet::from_disjoint(intervals).map_err(de::Error::custom)
  }
}
