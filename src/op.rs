//! Elementwise operations captured by an [`Expr`](crate::Expr).

use crate::Scalar;
use core::{fmt, marker::PhantomData, ops};
use num_traits::AsPrimitive;

/// A pure function from operand elements to one result element.
///
/// `Args` is `(A,)` for unary and `(A, B)` for binary operations.
pub trait Operation<Args> {
    type Output: Copy;

    fn apply(&self, args: Args) -> Self::Output;
}

macro_rules! binary_operation {
    ($($(#[$meta:meta])* $Name:ident => $Trait:ident::$method:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $Name;

        impl<L, R> Operation<(L, R)> for $Name
        where
            L: ops::$Trait<R>,
            L::Output: Copy,
        {
            type Output = L::Output;

            #[inline]
            fn apply(&self, (l, r): (L, R)) -> Self::Output {
                ops::$Trait::$method(l, r)
            }
        }
    )+};
}

binary_operation!(
    Add => Add::add,
    Sub => Sub::sub,
    Mul => Mul::mul,
    Div => Div::div,
    Rem => Rem::rem,
    BitAnd => BitAnd::bitand,
    BitOr => BitOr::bitor,
    BitXor => BitXor::bitxor,
    Shl => Shl::shl,
    Shr => Shr::shr,
);

/// Division by a broadcast divisor prepared with [`Scalar::divisor`].
///
/// For floating point elements the divisor is the reciprocal, so each element
/// costs a multiplication and carries the rounding error of that reciprocal.
#[derive(Copy, Clone, Debug, Default)]
pub struct DivScalar;

impl<T: Scalar> Operation<(T, T)> for DivScalar {
    type Output = T;

    #[inline]
    fn apply(&self, (l, d): (T, T)) -> T {
        l.divide(d)
    }
}

macro_rules! unary_operation {
    ($($Name:ident => $Trait:ident::$method:ident),+ $(,)?) => {$(
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $Name;

        impl<A> Operation<(A,)> for $Name
        where
            A: ops::$Trait,
            A::Output: Copy,
        {
            type Output = A::Output;

            #[inline]
            fn apply(&self, (a,): (A,)) -> Self::Output {
                ops::$Trait::$method(a)
            }
        }
    )+};
}

unary_operation!(Neg => Neg::neg, Not => Not::not);

/// Unary plus.
#[derive(Copy, Clone, Debug, Default)]
pub struct Pos;

impl<A: Copy> Operation<(A,)> for Pos {
    type Output = A;

    #[inline]
    fn apply(&self, (a,): (A,)) -> A {
        a
    }
}

macro_rules! scalar_operation {
    ($($Name:ident => $method:ident),+ $(,)?) => {$(
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $Name;

        impl<A: Scalar> Operation<(A,)> for $Name {
            type Output = A;

            #[inline]
            fn apply(&self, (a,): (A,)) -> A {
                a.$method()
            }
        }
    )+};
}

scalar_operation!(Abs => abs, Round => round, Floor => floor, Ceil => ceil);

/// Numeric conversion with `as` semantics.
pub struct Cast<U>(PhantomData<fn() -> U>);

impl<U> Cast<U> {
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U> Default for Cast<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for Cast<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Cast<U> {}

impl<U> fmt::Debug for Cast<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cast<{}>", core::any::type_name::<U>())
    }
}

impl<A, U> Operation<(A,)> for Cast<U>
where
    A: AsPrimitive<U>,
    U: Copy + 'static,
{
    type Output = U;

    #[inline]
    fn apply(&self, (a,): (A,)) -> U {
        a.as_()
    }
}

/// A closure used as an operation.
#[derive(Copy, Clone)]
pub struct Func<F>(pub F);

impl<F> fmt::Debug for Func<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Func")
    }
}

impl<F, A, O> Operation<(A,)> for Func<F>
where
    F: Fn(A) -> O,
    O: Copy,
{
    type Output = O;

    #[inline]
    fn apply(&self, (a,): (A,)) -> O {
        (self.0)(a)
    }
}

impl<F, A, B, O> Operation<(A, B)> for Func<F>
where
    F: Fn(A, B) -> O,
    O: Copy,
{
    type Output = O;

    #[inline]
    fn apply(&self, (a, b): (A, B)) -> O {
        (self.0)(a, b)
    }
}

#[test]
fn test_operations() {
    assert_eq!(Add.apply((2, 3)), 5);
    assert_eq!(Shr.apply((16u32, 2u32)), 4);
    assert_eq!(Neg.apply((1.5f32,)), -1.5);
    assert_eq!(Not.apply((0u8,)), 255);
    assert_eq!(Cast::<u8>::new().apply((300i32,)), 44);
    assert_eq!(Cast::<i32>::new().apply((-2.7f64,)), -2);
    assert_eq!(Func(|a: i32, b: i32| a * 10 + b).apply((4, 2)), 42);
    assert_eq!(DivScalar.apply((3.0f64, 0.5)), 1.5);
}
