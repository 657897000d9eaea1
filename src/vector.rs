use crate::{scalar::scalar_eq, Operand, Scalar, VectorExpr};
use core::{
    array::TryFromSliceError,
    convert::TryFrom,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};
use num_traits::AsPrimitive;

/// A fixed-size numeric vector with `N` elements of type `T`.
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T: Scalar, const N: usize> Vector<T, N> {
    const ARITY: () = assert!(N > 1, "a vector needs at least two components");

    pub const SIZE: usize = N;

    pub const ZERO: Self = Self::splat(T::ZERO);

    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY;
        Self(data)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// All elements set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(core::array::from_fn(f))
    }

    /// Evaluates every element of `src`, converting to `T` with `as` semantics.
    ///
    /// Accepts any expression or a vector of another element type.
    #[inline]
    pub fn from_expr<E>(src: E) -> Self
    where
        E: VectorExpr<N>,
        E::Elem: AsPrimitive<T>,
    {
        Self::from_fn(|i| src.at(i).as_())
    }

    /// Overwrites every element with the evaluated `src`.
    #[inline]
    pub fn assign<E>(&mut self, src: E)
    where
        E: VectorExpr<N>,
        E::Elem: AsPrimitive<T>,
    {
        for i in 0..N {
            self.0[i] = src.at(i).as_();
        }
    }

    #[inline]
    pub const fn get(&self, i: usize) -> T {
        self.0[i]
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// The raw element bytes, `N * size_of::<T>()` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0)
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> Operand for Vector<T, N> {
    type Elem = T;

    #[inline]
    fn at(&self, i: usize) -> T {
        self.0[i]
    }
}

impl<T: Scalar, const N: usize> VectorExpr<N> for Vector<T, N> {}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Scalar, R, const N: usize> PartialEq<R> for Vector<T, N>
where
    R: VectorExpr<N>,
    R::Elem: Scalar,
{
    fn eq(&self, other: &R) -> bool {
        for i in 0..N {
            if !scalar_eq(self.0[i], other.at(i)) {
                return false;
            }
        }
        true
    }
}

impl<T: Scalar + Eq, const N: usize> Eq for Vector<T, N> {}

// only bit-identical vectors of the same element type hash alike
impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<'a, T: Scalar, const N: usize> TryFrom<&'a [T]> for Vector<T, N> {
    type Error = TryFromSliceError;

    #[inline]
    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Ok(Self::from_array(<[T; N]>::try_from(slice)?))
    }
}

impl<T: Scalar, Op, Args, const N: usize> From<crate::Expr<Op, Args, N>> for Vector<T, N>
where
    crate::Expr<Op, Args, N>: Operand,
    <crate::Expr<Op, Args, N> as Operand>::Elem: AsPrimitive<T>,
{
    #[inline]
    fn from(expr: crate::Expr<Op, Args, N>) -> Self {
        Self::from_expr(expr)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
