// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Smallest interval covering both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The whole real line, `[-inf, +inf]`.
pub trait Whole
{
  fn whole() -> Self;
}

/// Numbers usable as interval bounds.
///
/// The infinities of the floating type stand for the ends of the real line, so `complement` never needs a finite sentinel.
pub trait Real : Float + Debug + Display {}

impl<T> Real for T where T: Float + Debug + Display {}

/// Orders two lower bounds given as `(value, inclusive)`. At equal values a closed bound starts before an open one.
pub(crate) fn cmp_lower<Bound: Real>(a: (Bound, bool), b: (Bound, bool)) -> Ordering {
  cmp_bound(a.0, b.0).then_with(|| b.1.cmp(&a.1))
}

/// Orders two upper bounds given as `(value, inclusive)`. At equal values an open bound ends before a closed one.
pub(crate) fn cmp_upper<Bound: Real>(a: (Bound, bool), b: (Bound, bool)) -> Ordering {
  cmp_bound(a.0, b.0).then_with(|| a.1.cmp(&b.1))
}

// NaN never reaches a bound: construction rejects it.
fn cmp_bound<Bound: Real>(a: Bound, b: Bound) -> Ordering {
  a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
