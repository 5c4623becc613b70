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

//! Bounded real interval where each bound is either open or closed.
//!
//! `[3, 10)` is written `Interval::new(true, 3.0, 10.0, false)`. Intervals are the atoms of an [interval set](../interval_set/index.html): a single `Interval` cannot have holes.
//!
//! A degenerate interval (`lb == ub`) is legal. `[p, p]` is the single point `p`, while `(p, p)`, `[p, p)` and `(p, p]` hold no point at all and are reported by `is_empty()`.
//!
//! # Examples
//!
//! ```rust
//! use real_interval::Interval;
//! use real_interval::ops::*;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(true, 3.0, 10.0, false).unwrap();
//! let b = Interval::new(true, 10.0, 12.0, true).unwrap();
//! assert!(a.contains(&3.0) && !a.contains(&10.0));
//! assert!(a.joinable(&b) && !a.overlap(&b));
//! assert_eq!(a.hull(&b).to_string(), "[3, 12]");
//! assert_eq!(a.intersection(&b), None);
//! ```

use crate::error::IntervalError;
use crate::interval_set::IntervalSet;
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Disjoint, Intersection, IsEmpty, IsSingleton, Overlap, Singleton, Union};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval<Bound>")]
#[serde(bound(deserialize = "Bound: Real + Deserialize<'de>"))]
pub struct Interval<Bound>
{
  lb: Bound,
  ub: Bound,
  lb_inclusive: bool,
  ub_inclusive: bool
}

// Unchecked fields, validated by `Interval::new` on the way in.
#[derive(Deserialize)]
#[serde(rename = "Interval")]
struct RawInterval<Bound>
{
  lb: Bound,
  ub: Bound,
  lb_inclusive: bool,
  ub_inclusive: bool
}

impl<Bound: Real> TryFrom<RawInterval<Bound>> for Interval<Bound>
{
  type Error = IntervalError<Bound>;

  fn try_from(raw: RawInterval<Bound>) -> Result<Self, Self::Error> {
    Interval::new(raw.lb_inclusive, raw.lb, raw.ub, raw.ub_inclusive)
  }
}

impl<Bound: Real> Interval<Bound>
{
  /// Builds the interval from `lb` to `ub`, each bound being closed when its flag is set.
  ///
  /// Fails with `IntervalError::InvalidRange` if `lb > ub` or if a bound is NaN.
  pub fn new(lb_inclusive: bool, lb: Bound, ub: Bound, ub_inclusive: bool) -> Result<Self, IntervalError<Bound>> {
    if lb <= ub {
      Ok(Interval::make(lb_inclusive, lb, ub, ub_inclusive))
    }
    else {
      Err(IntervalError::InvalidRange { lb, ub })
    }
  }

  // Precondition: `lb <= ub`.
  pub(crate) fn make(lb_inclusive: bool, lb: Bound, ub: Bound, ub_inclusive: bool) -> Self {
    debug_assert!(lb <= ub, "Interval bounds must be ordered (lb = {}, ub = {}).", lb, ub);
    Interval { lb, ub, lb_inclusive, ub_inclusive }
  }

  pub fn lower(&self) -> Bound {
    self.lb
  }

  pub fn upper(&self) -> Bound {
    self.ub
  }

  pub fn is_lower_inclusive(&self) -> bool {
    self.lb_inclusive
  }

  pub fn is_upper_inclusive(&self) -> bool {
    self.ub_inclusive
  }

  pub(crate) fn lower_bound(&self) -> (Bound, bool) {
    (self.lb, self.lb_inclusive)
  }

  pub(crate) fn upper_bound(&self) -> (Bound, bool) {
    (self.ub, self.ub_inclusive)
  }

  /// `true` if both intervals share at least one point.
  pub fn intersects(&self, other: &Interval<Bound>) -> bool {
    self.intersection(other).is_some()
  }

  /// `true` if the union of both intervals is itself an interval: they share a point or they touch at a bound kept by one of them. Empty intervals are joinable with nothing.
  pub fn joinable(&self, other: &Interval<Bound>) -> bool {
    if self.is_empty() || other.is_empty() {
      false
    }
    else {
      self.intersects(other) || self.touches(other) || other.touches(self)
    }
  }

  /// `true` if every point of `self` lies strictly before `x`.
  pub(crate) fn ends_before(&self, x: Bound) -> bool {
    self.ub < x || (self.ub == x && !self.ub_inclusive)
  }

  /// `true` if `self` ends exactly where `next` starts and the meeting point is kept by one of the two sides.
  fn touches(&self, next: &Interval<Bound>) -> bool {
    self.ub == next.lb && (self.ub_inclusive || next.lb_inclusive)
  }

  /// `true` if `self` lies entirely before `next` and their union is not an interval.
  pub(crate) fn precedes(&self, next: &Interval<Bound>) -> bool {
    self.ub < next.lb
      || (self.ub == next.lb && !self.ub_inclusive && !next.lb_inclusive)
  }
}

impl<Bound> Collection for Interval<Bound>
{
  type Item = Bound;
}

impl<Bound: Real> Singleton for Interval<Bound>
{
  fn singleton(x: Bound) -> Interval<Bound> {
    Interval::make(true, x, x, true)
  }
}

impl<Bound: Real> Whole for Interval<Bound>
{
  fn whole() -> Interval<Bound> {
    Interval::make(true, Bound::neg_infinity(), Bound::infinity(), true)
  }
}

impl<Bound: Real> IsEmpty for Interval<Bound>
{
  fn is_empty(&self) -> bool {
    !(self.lb < self.ub || (self.lb_inclusive && self.ub_inclusive))
  }
}

impl<Bound: Real> IsSingleton for Interval<Bound>
{
  fn is_singleton(&self) -> bool {
    self.lb == self.ub && self.lb_inclusive && self.ub_inclusive
  }
}

impl<Bound: Real> Contains for Interval<Bound>
{
  fn contains(&self, value: &Bound) -> bool {
    let x = *value;
    let above = if self.lb_inclusive { x >= self.lb } else { x > self.lb };
    let below = if self.ub_inclusive { x <= self.ub } else { x < self.ub };
    above && below
  }
}

impl<Bound: Real> Overlap for Interval<Bound>
{
  fn overlap(&self, other: &Interval<Bound>) -> bool {
    !self.is_disjoint(other)
  }
}

impl<Bound: Real> Disjoint for Interval<Bound>
{
  fn is_disjoint(&self, other: &Interval<Bound>) -> bool {
    !self.intersects(other)
  }
}

/// Envelope of two intervals. At equal bounds, the closed one wins.
impl<Bound: Real> Hull for Interval<Bound>
{
  type Output = Interval<Bound>;

  fn hull(&self, other: &Interval<Bound>) -> Interval<Bound> {
    if self.is_empty() { *other }
    else if other.is_empty() { *self }
    else {
      let (lb, lb_inclusive) = min_by(self.lower_bound(), other.lower_bound(), cmp_lower);
      let (ub, ub_inclusive) = max_by(self.upper_bound(), other.upper_bound(), cmp_upper);
      Interval::make(lb_inclusive, lb, ub, ub_inclusive)
    }
  }
}

/// Common part of two intervals, `None` if they share no point. At equal bounds, the open one wins.
impl<Bound: Real> Intersection for Interval<Bound>
{
  type Output = Option<Interval<Bound>>;

  fn intersection(&self, other: &Interval<Bound>) -> Option<Interval<Bound>> {
    let (lb, lb_inclusive) = max_by(self.lower_bound(), other.lower_bound(), cmp_lower);
    let (ub, ub_inclusive) = min_by(self.upper_bound(), other.upper_bound(), cmp_upper);
    if lb <= ub {
      Some(Interval::make(lb_inclusive, lb, ub, ub_inclusive))
        .filter(|i| !i.is_empty())
    }
    else {
      None
    }
  }
}

impl<Bound: Real> Union for Interval<Bound>
{
  type Output = IntervalSet<Bound>;

  fn union(&self, other: &Interval<Bound>) -> IntervalSet<Bound> {
    if self.joinable(other) {
      IntervalSet::from(self.hull(other))
    }
    else {
      IntervalSet::from(*self).union(&IntervalSet::from(*other))
    }
  }
}

fn min_by<T, F>(a: T, b: T, cmp: F) -> T where
 F: Fn(T, T) -> Ordering,
 T: Copy
{
  if cmp(a, b) == Ordering::Greater { b } else { a }
}

fn max_by<T, F>(a: T, b: T, cmp: F) -> T where
 F: Fn(T, T) -> Ordering,
 T: Copy
{
  if cmp(a, b) == Ordering::Less { b } else { a }
}

impl<Bound: Real> Display for Interval<Bound>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    let open = if self.lb_inclusive { '[' } else { '(' };
    let close = if self.ub_inclusive { ']' } else { ')' };
    write!(formatter, "{}{}, {}{}", open, self.lb, self.ub, close)
  }
}
