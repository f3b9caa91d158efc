//! Numeric domain for prices
//!
//! Prices can be expressed as:
//! - Integer minor units (cents) with `i32`, `i64`, `u32`, `u64`
//! - Floating point with `f32`, `f64`
//! - Fixed-point decimals with `rust_decimal::Decimal`
//!
//! Floating point subtraction of near-equal prices carries ordinary IEEE
//! rounding noise. Use integer cents or `Decimal` when exact results matter.

use num_traits::Zero;
use rust_decimal::Decimal;
use std::fmt::Debug;
use std::ops::Sub;

/// A value that can be used as a daily price.
///
/// Profit is only ever computed as `price - minimum` where `price >= minimum`,
/// so unsigned types are safe to use.
pub trait Price: Copy + PartialOrd + Sub<Output = Self> + Zero + Debug {}

macro_rules! impl_price {
    ($($t:ty),* $(,)?) => {
        $(impl Price for $t {})*
    };
}

impl_price!(i32, i64, u32, u64, f32, f64, Decimal);
