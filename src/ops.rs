//! Operator overloads that build [`Expr`] nodes instead of computing eagerly.
//!
//! Both operands of a binary operator may be vectors (owned or borrowed) or
//! expressions of the same arity. One of them may instead be a scalar of the
//! element type, which is broadcast to every index:
//!
//! ```
//! use math_vector::{vec2, VectorExpr};
//!
//! let a = vec2(1.0f32, 2.0);
//! let b = vec2(3.0f32, 4.0);
//! let c = (&a + &b * 2.0 - 1.0).eval();
//! assert_eq!(c, vec2(6.0f32, 9.0));
//! assert_eq!((2.0f32 * a).eval(), vec2(2.0f32, 4.0));
//! ```
//!
//! `%`, `<<`, `>>` and `/` only accept the scalar on the right:
//!
//! ```
//! use math_vector::{vec2, VectorExpr};
//!
//! let v = vec2(12u32, 7);
//! assert_eq!((v % 5).eval(), vec2(2u32, 2));
//! assert_eq!((v >> 1).eval(), vec2(6u32, 3));
//! assert_eq!((v << 1).eval(), vec2(24u32, 14));
//! assert_eq!((v / 2).eval(), vec2(6u32, 3));
//! ```
//!
//! ```compile_fail
//! use math_vector::vec2;
//!
//! let v = vec2(12u32, 7);
//! let _ = 5u32 % v;
//! ```
//!
//! ```compile_fail
//! use math_vector::vec2;
//!
//! let v = vec2(12u32, 7);
//! let _ = 1u32 >> v;
//! ```
//!
//! ```compile_fail
//! use math_vector::vec2;
//!
//! let _ = 1.0f32 / vec2(1.0f32, 2.0);
//! ```
//!
//! Operands of different arity are rejected as well:
//!
//! ```compile_fail
//! use math_vector::{vec2, vec3};
//!
//! let _ = vec2(1, 2) + vec3(1, 2, 3);
//! ```

use crate::{
    expr::Splat,
    op::{self, Operation},
    Expr, Operand, Scalar, Vector, VectorExpr,
};
use core::ops;
use num_traits::AsPrimitive;

macro_rules! impl_vector_rhs {
    ($Trait:ident, $method:ident, $Op:ident, [$($g:tt)*] $Lhs:ty, $Rhs:ty) => {
        impl<$($g)*, const N: usize> ops::$Trait<$Rhs> for $Lhs
        where
            $Lhs: VectorExpr<N>,
            $Rhs: VectorExpr<N>,
            op::$Op: Operation<(<$Lhs as Operand>::Elem, <$Rhs as Operand>::Elem)>,
        {
            type Output = Expr<op::$Op, ($Lhs, $Rhs), N>;

            #[inline]
            fn $method(self, rhs: $Rhs) -> Self::Output {
                Expr::new(op::$Op, (self, rhs))
            }
        }
    };
}

macro_rules! impl_scalar_rhs {
    ($Trait:ident, $method:ident, $Op:ident, [$($g:tt)*] $Lhs:ty, $S:ident) => {
        impl<$($g)*, const N: usize> ops::$Trait<$S> for $Lhs
        where
            $Lhs: VectorExpr<N> + Operand<Elem = $S>,
            $S: Scalar,
            op::$Op: Operation<($S, $S)>,
        {
            type Output = Expr<op::$Op, ($Lhs, Splat<$S>), N>;

            #[inline]
            fn $method(self, rhs: $S) -> Self::Output {
                Expr::new(op::$Op, (self, Splat(rhs)))
            }
        }
    };
}

macro_rules! impl_binary_operator {
    ($Trait:ident, $method:ident, $Op:ident) => {
        impl_binary_operator!(@vector_rhs $Trait, $method, $Op);
        impl_scalar_rhs!($Trait, $method, $Op, [T: Scalar] Vector<T, N>, T);
        impl_scalar_rhs!($Trait, $method, $Op, ['l, T: Scalar] &'l Vector<T, N>, T);
        impl_scalar_rhs!($Trait, $method, $Op, [LOp, LArgs, S] Expr<LOp, LArgs, N>, S);
    };
    (@vector_rhs $Trait:ident, $method:ident, $Op:ident) => {
        impl_vector_rhs!($Trait, $method, $Op, [T: Scalar, U: Scalar] Vector<T, N>, Vector<U, N>);
        impl_vector_rhs!($Trait, $method, $Op, ['r, T: Scalar, U: Scalar] Vector<T, N>, &'r Vector<U, N>);
        impl_vector_rhs!($Trait, $method, $Op, [T: Scalar, ROp, RArgs] Vector<T, N>, Expr<ROp, RArgs, N>);
        impl_vector_rhs!($Trait, $method, $Op, ['l, T: Scalar, U: Scalar] &'l Vector<T, N>, Vector<U, N>);
        impl_vector_rhs!($Trait, $method, $Op, ['l, 'r, T: Scalar, U: Scalar] &'l Vector<T, N>, &'r Vector<U, N>);
        impl_vector_rhs!($Trait, $method, $Op, ['l, T: Scalar, ROp, RArgs] &'l Vector<T, N>, Expr<ROp, RArgs, N>);
        impl_vector_rhs!($Trait, $method, $Op, [LOp, LArgs, U: Scalar] Expr<LOp, LArgs, N>, Vector<U, N>);
        impl_vector_rhs!($Trait, $method, $Op, ['r, LOp, LArgs, U: Scalar] Expr<LOp, LArgs, N>, &'r Vector<U, N>);
        impl_vector_rhs!($Trait, $method, $Op, [LOp, LArgs, ROp, RArgs] Expr<LOp, LArgs, N>, Expr<ROp, RArgs, N>);
    };
}

impl_binary_operator!(Add, add, Add);
impl_binary_operator!(Sub, sub, Sub);
impl_binary_operator!(Mul, mul, Mul);
impl_binary_operator!(Rem, rem, Rem);
impl_binary_operator!(BitAnd, bitand, BitAnd);
impl_binary_operator!(BitOr, bitor, BitOr);
impl_binary_operator!(BitXor, bitxor, BitXor);
impl_binary_operator!(Shl, shl, Shl);
impl_binary_operator!(Shr, shr, Shr);

// the divisor is prepared once per expression, see `Scalar::divisor`
macro_rules! impl_scalar_div {
    ([$($g:tt)*] $Lhs:ty, $S:ident) => {
        impl<$($g)*, const N: usize> ops::Div<$S> for $Lhs
        where
            $Lhs: VectorExpr<N> + Operand<Elem = $S>,
            $S: Scalar,
        {
            type Output = Expr<op::DivScalar, ($Lhs, Splat<$S>), N>;

            #[inline]
            fn div(self, rhs: $S) -> Self::Output {
                Expr::new(op::DivScalar, (self, Splat(rhs.divisor())))
            }
        }
    };
}

impl_binary_operator!(@vector_rhs Div, div, Div);
impl_scalar_div!([T: Scalar] Vector<T, N>, T);
impl_scalar_div!(['l, T: Scalar] &'l Vector<T, N>, T);
impl_scalar_div!([LOp, LArgs, S] Expr<LOp, LArgs, N>, S);

macro_rules! impl_scalar_lhs {
    ($Trait:ident, $method:ident, $Op:ident; $($S:ty),+) => {$(
        impl<const N: usize> ops::$Trait<Vector<$S, N>> for $S {
            type Output = Expr<op::$Op, (Splat<$S>, Vector<$S, N>), N>;

            #[inline]
            fn $method(self, rhs: Vector<$S, N>) -> Self::Output {
                Expr::new(op::$Op, (Splat(self), rhs))
            }
        }

        impl<'r, const N: usize> ops::$Trait<&'r Vector<$S, N>> for $S {
            type Output = Expr<op::$Op, (Splat<$S>, &'r Vector<$S, N>), N>;

            #[inline]
            fn $method(self, rhs: &'r Vector<$S, N>) -> Self::Output {
                Expr::new(op::$Op, (Splat(self), rhs))
            }
        }

        impl<Op, Args, const N: usize> ops::$Trait<Expr<Op, Args, N>> for $S
        where
            Expr<Op, Args, N>: VectorExpr<N> + Operand<Elem = $S>,
        {
            type Output = Expr<op::$Op, (Splat<$S>, Expr<Op, Args, N>), N>;

            #[inline]
            fn $method(self, rhs: Expr<Op, Args, N>) -> Self::Output {
                Expr::new(op::$Op, (Splat(self), rhs))
            }
        }
    )+};
}

impl_scalar_lhs!(Add, add, Add; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_scalar_lhs!(Sub, sub, Sub; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_scalar_lhs!(Mul, mul, Mul; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_scalar_lhs!(BitAnd, bitand, BitAnd; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs!(BitOr, bitor, BitOr; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar_lhs!(BitXor, bitxor, BitXor; i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_unary_operator {
    ($Trait:ident, $method:ident, $Op:ident) => {
        impl_unary_operator!(@lhs $Trait, $method, $Op, [T: Scalar] Vector<T, N>);
        impl_unary_operator!(@lhs $Trait, $method, $Op, ['l, T: Scalar] &'l Vector<T, N>);
        impl_unary_operator!(@lhs $Trait, $method, $Op, [LOp, LArgs] Expr<LOp, LArgs, N>);
    };
    (@lhs $Trait:ident, $method:ident, $Op:ident, [$($g:tt)*] $Lhs:ty) => {
        impl<$($g)*, const N: usize> ops::$Trait for $Lhs
        where
            $Lhs: VectorExpr<N>,
            op::$Op: Operation<(<$Lhs as Operand>::Elem,)>,
        {
            type Output = Expr<op::$Op, ($Lhs,), N>;

            #[inline]
            fn $method(self) -> Self::Output {
                Expr::new(op::$Op, (self,))
            }
        }
    };
}

impl_unary_operator!(Neg, neg, Neg);
impl_unary_operator!(Not, not, Not);

// `lhs = lhs OP rhs`, cast back to the element type
macro_rules! impl_assign_operator {
    ($($AssignTrait:ident, $assign:ident => $Trait:ident, $method:ident);+ $(;)?) => {$(
        impl<T: Scalar, R, const N: usize> ops::$AssignTrait<R> for Vector<T, N>
        where
            Vector<T, N>: ops::$Trait<R>,
            <Vector<T, N> as ops::$Trait<R>>::Output: VectorExpr<N>,
            <<Vector<T, N> as ops::$Trait<R>>::Output as Operand>::Elem: AsPrimitive<T>,
        {
            #[inline]
            fn $assign(&mut self, rhs: R) {
                *self = Vector::from_expr(ops::$Trait::$method(*self, rhs));
            }
        }
    )+};
}

impl_assign_operator!(
    AddAssign, add_assign => Add, add;
    SubAssign, sub_assign => Sub, sub;
    MulAssign, mul_assign => Mul, mul;
    DivAssign, div_assign => Div, div;
    RemAssign, rem_assign => Rem, rem;
    BitAndAssign, bitand_assign => BitAnd, bitand;
    BitOrAssign, bitor_assign => BitOr, bitor;
    BitXorAssign, bitxor_assign => BitXor, bitxor;
    ShlAssign, shl_assign => Shl, shl;
    ShrAssign, shr_assign => Shr, shr;
);

#[cfg(test)]
mod test {
    use crate::{vec2, vec3, vec4, Operand, Vector, VectorExpr};

    #[test]
    fn test_mixed_operand_kinds() {
        let a = vec3(1i32, 2, 3);
        let b = vec3(4i32, 5, 6);

        assert_eq!(a + b, vec3(5, 7, 9));
        assert_eq!(&a + &b, vec3(5, 7, 9));
        assert_eq!(a + &b, vec3(5, 7, 9));
        assert_eq!(&a - b, vec3(-3, -3, -3));
        assert_eq!((a + b) * (b - a), vec3(15, 21, 27));
        assert_eq!((a * 2) - &b, vec3(-2, -1, 0));
        assert_eq!(&a * 3, vec3(3, 6, 9));
        assert_eq!(10i32 - a, vec3(9, 8, 7));
        assert_eq!(2i32 * &b, vec3(8, 10, 12));
        assert_eq!(1i32 + (a * b), vec3(5, 11, 19));
    }

    #[test]
    fn test_chained_expression() {
        let a = vec2(1.0f32, 2.0);
        let b = vec2(3.0f32, 4.0);
        let c = vec2(5.0f32, 6.0);

        let d = (&a + &b * &c).eval();
        for i in 0..2 {
            assert_eq!(d[i], a[i] + b[i] * c[i]);
        }
    }

    #[test]
    fn test_integer_operators() {
        let v = vec4(0b1100u8, 0b1010, 0b0110, 0b0001);

        assert_eq!(v & 0b0100, vec4(0b0100u8, 0, 0b0100, 0));
        assert_eq!(v | 0b0001, vec4(0b1101u8, 0b1011, 0b0111, 0b0001));
        assert_eq!(v ^ v, Vector::<u8, 4>::zero());
        assert_eq!(0xf0u8 ^ v, vec4(0xfcu8, 0xfa, 0xf6, 0xf1));
        assert_eq!(!v, vec4(0b1111_0011u8, 0b1111_0101, 0b1111_1001, 0b1111_1110));
        assert_eq!(v >> 1, vec4(0b0110u8, 0b0101, 0b0011, 0));
        assert_eq!(v << 1, vec4(0b11000u8, 0b10100, 0b01100, 0b00010));
        assert_eq!(v % 3, vec4(0u8, 1, 0, 1));
        assert_eq!(v << vec4(0u8, 1, 2, 3), vec4(12u8, 20, 24, 8));
    }

    #[test]
    fn test_unary_operators() {
        let v = vec3(1.5f64, -2.0, 0.0);
        assert_eq!(-v, vec3(-1.5f64, 2.0, 0.0));
        assert_eq!(-(-&v), v);
        assert_eq!(-(v * 2.0), vec3(-3.0f64, 4.0, 0.0));
    }

    #[test]
    fn test_scalar_division() {
        let v = vec3(1.0f64, 10.0, -3.0);
        let s = 3.0;

        // floating point division multiplies by the reciprocal
        let q = v / s;
        for i in 0..3 {
            assert_eq!(q.at(i), v[i] * (1.0 / s));
        }
        assert!(q.abs_diff_eq(vec3(1.0 / 3.0, 10.0 / 3.0, -1.0), 1e-12));
        assert!((vec2(6.0f64, 9.0) / 3.0).abs_diff_eq(vec2(2.0, 3.0), 1e-12));

        let a = vec2(1.0f32, 5.0);
        let b = vec2(3.0f32, 7.0);
        assert_eq!(((a + b) / 2.0).eval(), vec2(2.0f32, 6.0));
        assert_eq!((&b / 0.5).eval(), vec2(6.0f32, 14.0));
        assert_eq!((a / 4.0).eval(), vec2(0.25f32, 1.25));

        // integers divide
        assert_eq!(vec2(7, -7) / 2, vec2(3, -3));
        assert_eq!(vec2(7, 9) / vec2(2, 3), vec2(3, 3));
        assert_eq!(vec2(1.0f32, 1.0) / vec2(2.0f32, 4.0), vec2(0.5f32, 0.25));
    }

    #[test]
    fn test_compound_assignment() {
        let w = vec2(2i32, 3);
        let mut v = vec2(1i32, 2);

        v += vec2(3, 4);
        assert_eq!(v, vec2(4, 6));
        v -= 1;
        assert_eq!(v, vec2(3, 5));
        v *= &w;
        assert_eq!(v, vec2(6, 15));
        v /= 2;
        assert_eq!(v, vec2(3, 7));
        v %= 4;
        assert_eq!(v, vec2(3, 3));
        v <<= 2;
        assert_eq!(v, vec2(12, 12));
        v >>= w;
        assert_eq!(v, vec2(3, 1));
        v |= 4;
        assert_eq!(v, vec2(7, 5));
        v &= vec2(1, 4);
        assert_eq!(v, vec2(1, 4));
        v ^= w + 1;
        assert_eq!(v, vec2(2, 0));

        let mut f = vec3(1.0f32, 2.0, 4.0);
        f /= 4.0;
        assert_eq!(f, vec3(0.25f32, 0.5, 1.0));
        f *= f.abs() + 1.0;
        assert_eq!(f, vec3(0.3125f32, 0.75, 2.0));
    }
}
