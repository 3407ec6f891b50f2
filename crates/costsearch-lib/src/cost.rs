//! Scalar cost type used to order frontier entries.

use std::fmt::Debug;
use std::hash::Hash;

/// A totally ordered, additive path cost.
///
/// Implemented for every primitive integer type. Additions saturate at the
/// type's maximum so an overflowing path compares as "worst" instead of
/// wrapping around to a small value.
pub trait Cost: Copy + Ord + Hash + Debug {
    /// Cost of the initial state.
    const ZERO: Self;

    /// Extend a path cost by one edge (or heuristic estimate).
    fn saturating_extend(self, delta: Self) -> Self;

    /// Whether this value is below zero. Always `false` for unsigned types.
    fn is_negative(self) -> bool;
}

macro_rules! unsigned_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;

                fn saturating_extend(self, delta: Self) -> Self {
                    self.saturating_add(delta)
                }

                fn is_negative(self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! signed_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;

                fn saturating_extend(self, delta: Self) -> Self {
                    self.saturating_add(delta)
                }

                fn is_negative(self) -> bool {
                    self < 0
                }
            }
        )*
    };
}

unsigned_cost!(u8, u16, u32, u64, u128, usize);
signed_cost!(i8, i16, i32, i64, i128, isize);
