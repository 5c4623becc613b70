// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Operators on `IntervalSet` forwarding to the set operation `$op` for every combination of owned and borrowed operands.
// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
macro_rules! forward_ref_ref_binop {
  (impl $imp:ident, $method:ident, $op:ident) => {
    impl<'a, 'b, Bound: Real> $imp<&'b IntervalSet<Bound>> for &'a IntervalSet<Bound> {
      type Output = IntervalSet<Bound>;

      fn $method(self, other: &'b IntervalSet<Bound>) -> IntervalSet<Bound> {
        self.$op(other)
      }
    }
  }
}

macro_rules! forward_val_val_binop {
  (impl $imp:ident, $method:ident) => {
    impl<Bound: Real> $imp<IntervalSet<Bound>> for IntervalSet<Bound> {
      type Output = IntervalSet<Bound>;

      fn $method(self, other: IntervalSet<Bound>) -> IntervalSet<Bound> {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl $imp:ident, $method:ident) => {
    impl<'a, Bound: Real> $imp<IntervalSet<Bound>> for &'a IntervalSet<Bound> {
      type Output = IntervalSet<Bound>;

      fn $method(self, other: IntervalSet<Bound>) -> IntervalSet<Bound> {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl $imp:ident, $method:ident) => {
    impl<'b, Bound: Real> $imp<&'b IntervalSet<Bound>> for IntervalSet<Bound> {
      type Output = IntervalSet<Bound>;

      fn $method(self, other: &IntervalSet<Bound>) -> IntervalSet<Bound> {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_all_binop {
  (impl $imp:ident, $method:ident, $op:ident) => {
    forward_ref_ref_binop!(impl $imp, $method, $op);
    forward_val_val_binop!(impl $imp, $method);
    forward_ref_val_binop!(impl $imp, $method);
    forward_val_ref_binop!(impl $imp, $method);
  };
}
