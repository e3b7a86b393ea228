//! Numeric widening used by `sum`/`average` style aggregates.

/// Values that can be widened to `f64` for averaging.
///
/// Implemented for the primitive integer and float types. Widening of
/// 64-bit integers is lossy above 2^53, same as an `as` cast.
pub trait Numeric: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
