// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when building intervals and interval sets.

use crate::interval::Interval;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntervalError<Bound>
{
  /// The lower bound is greater than the upper bound, or one of them is NaN.
  #[error("invalid range: bounds {lb} and {ub} are not ordered")]
  InvalidRange { lb: Bound, ub: Bound },

  /// Two neighbouring intervals of a supposedly canonical sequence are unordered, joinable, or one of them is empty.
  #[error("intervals {previous} and {next} are not in ascending disjoint order")]
  InvariantViolation { previous: Interval<Bound>, next: Interval<Bound> },
}
