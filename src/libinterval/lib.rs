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

//! This library represents sets of real numbers as unions of bounded intervals, each bound being independently open or closed, such as `(-5, 1] U [3, 10)`. It provides the usual set algebra over them (union, intersection, complement, difference, disjointness and membership), always keeping the intervals of a set ordered and merged as much as possible.
//!
//! Bounds are floating point numbers (any `num_traits::Float`, in practice `f64` or `f32`). The infinities of the floating type stand for the ends of the real line, so the complement of `[3, 10)` is `[-inf, 3) [10, inf]`.
//!
//! Set operations are provided through the traits of [gcollections](https://docs.rs/gcollections), which must be in scope.
//!
//! # Examples
//!
//! ```rust
//! use real_interval::IntervalSet;
//! use gcollections::ops::*;
//!
//! let l = IntervalSet::new(true, 2.0, 4.0, true).unwrap();
//! let m = IntervalSet::new(true, 8.0, 12.0, true).unwrap();
//! let n = l.union(&m);
//! assert_eq!(n.complement().to_string(), "[-inf, 2) (4, 8) (12, inf]");
//! assert!(IntervalSet::new(true, 10.0, 3.0, true).is_err());
//! ```
//!
//! For more examples see the [interval module](interval/index.html) or the [interval_set module](interval_set/index.html).
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

mod macros;
pub mod error;
pub mod interval;
pub mod interval_set;
pub mod ops;

pub use crate::error::IntervalError;
pub use crate::interval::Interval;
pub use crate::interval_set::IntervalSet;
