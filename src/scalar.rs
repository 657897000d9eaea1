use bytemuck::Pod;
use core::{fmt, ops};
use num_traits::AsPrimitive;

/// Arithmetic element type of a [`Vector`](crate::Vector).
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Pod
    + AsPrimitive<f64>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn abs(self) -> Self;
    fn round(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;

    /// Addition that wraps around on integer overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplication that wraps around on integer overflow.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Exact integer value, `None` for floating point types.
    fn to_i128(self) -> Option<i128>;

    /// Turns a scalar divisor into the value stored in a broadcast division.
    fn divisor(self) -> Self;

    /// Divides by a value previously prepared with [`Scalar::divisor`].
    fn divide(self, divisor: Self) -> Self;

    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_scalar_int {
    (signed $($t:ty),+) => {$(
        impl_scalar_int!(@impl $t, |v: $t| v.wrapping_abs());
    )+};
    (unsigned $($t:ty),+) => {$(
        impl_scalar_int!(@impl $t, |v: $t| v);
    )+};
    (@impl $t:ty, $abs:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn abs(self) -> Self {
                ($abs)(self)
            }

            #[inline]
            fn round(self) -> Self {
                self
            }

            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn ceil(self) -> Self {
                self
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn to_i128(self) -> Option<i128> {
                Some(self as i128)
            }

            #[inline]
            fn divisor(self) -> Self {
                self
            }

            #[inline]
            fn divide(self, divisor: Self) -> Self {
                self / divisor
            }
        }
    };
}

impl_scalar_int!(signed i8, i16, i32, i64, isize);
impl_scalar_int!(unsigned u8, u16, u32, u64, usize);

macro_rules! impl_scalar_float {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn round(self) -> Self {
                <$t>::round(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn to_i128(self) -> Option<i128> {
                None
            }

            // multiply by the reciprocal instead of dividing every element
            #[inline]
            fn divisor(self) -> Self {
                1.0 / self
            }

            #[inline]
            fn divide(self, divisor: Self) -> Self {
                self * divisor
            }
        }
    )+};
}

impl_scalar_float!(f32, f64);

/// Numeric equality across element types.
#[inline]
pub(crate) fn scalar_eq<A: Scalar, B: Scalar>(a: A, b: B) -> bool {
    match (a.to_i128(), b.to_i128()) {
        (Some(a), Some(b)) => a == b,
        _ => a.to_f64() == b.to_f64(),
    }
}
