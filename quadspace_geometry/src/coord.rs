// Copyright 2025 the Quadspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction shared by every primitive.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Numeric scalar abstraction for 2D primitives.
///
/// Coordinates need the four arithmetic operations, comparison, a
/// doubling/halving pair (the index grows and splits regions by powers
/// of two), and a square root (only `distance` and `normalized` use
/// it). Integer scalars are first-class: the index uses `i32` in
/// practice.
pub trait Coord:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// One value for the scalar type.
    fn one() -> Self;

    /// Two, the split-line divisor.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Doubles the value (left shift for integers).
    fn double(self) -> Self;

    /// Halves the value, rounding odd integers up.
    fn halve(self) -> Self;

    /// Square root. Integer scalars truncate the result.
    fn sqrt(self) -> Self;
}

impl Coord for i32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn double(self) -> Self {
        self << 1
    }

    #[inline]
    fn halve(self) -> Self {
        (self + 1) >> 1
    }

    #[inline]
    fn sqrt(self) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integer square roots truncate by contract"
        )]
        let root = libm::sqrt(f64::from(self)) as Self;
        root
    }
}

impl Coord for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn double(self) -> Self {
        self << 1
    }

    #[inline]
    fn halve(self) -> Self {
        (self + 1) >> 1
    }

    #[inline]
    fn sqrt(self) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integer square roots truncate by contract"
        )]
        #[allow(clippy::cast_precision_loss, reason = "sqrt inputs are small in practice")]
        let root = libm::sqrt(self as f64) as Self;
        root
    }
}

impl Coord for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn double(self) -> Self {
        self + self
    }

    #[inline]
    fn halve(self) -> Self {
        self / 2.0
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
}

impl Coord for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn double(self) -> Self {
        self + self
    }

    #[inline]
    fn halve(self) -> Self {
        self / 2.0
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}

pub(crate) fn min_c<C: PartialOrd>(a: C, b: C) -> C {
    if b < a { b } else { a }
}

pub(crate) fn max_c<C: PartialOrd>(a: C, b: C) -> C {
    if b > a { b } else { a }
}
