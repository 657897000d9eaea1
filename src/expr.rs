//! Lazily evaluated elementwise expressions.
//!
//! An [`Expr`] captures an [`Operation`] together with its operands and only
//! computes element `i` when asked through [`Operand::at`]. Operands are
//! vectors, borrowed vectors, nested expressions, or broadcast scalars
//! ([`Splat`]). Nothing is cached, every read re-evaluates the tree.

use crate::{
    op::{self, Operation},
    scalar::scalar_eq,
    Scalar, Vector,
};
use num_traits::AsPrimitive;

/// Anything that can be read element by element.
pub trait Operand {
    type Elem: Copy;

    /// Evaluates element `i`. Panics if `i` is out of range for a vector
    /// operand.
    fn at(&self, i: usize) -> Self::Elem;
}

impl<'a, E: Operand + ?Sized> Operand for &'a E {
    type Elem = E::Elem;

    #[inline]
    fn at(&self, i: usize) -> Self::Elem {
        (**self).at(i)
    }
}

/// A scalar broadcast over every index.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Splat<S>(pub S);

impl<S: Copy> Operand for Splat<S> {
    type Elem = S;

    #[inline]
    fn at(&self, _: usize) -> S {
        self.0
    }
}

/// The ordered operands of an expression.
pub trait Operands {
    type Elems;

    fn at(&self, i: usize) -> Self::Elems;
}

impl<A: Operand> Operands for (A,) {
    type Elems = (A::Elem,);

    #[inline]
    fn at(&self, i: usize) -> Self::Elems {
        (self.0.at(i),)
    }
}

impl<A: Operand, B: Operand> Operands for (A, B) {
    type Elems = (A::Elem, B::Elem);

    #[inline]
    fn at(&self, i: usize) -> Self::Elems {
        (self.0.at(i), self.1.at(i))
    }
}

/// An unevaluated elementwise computation producing `N` elements.
#[derive(Copy, Clone, Debug)]
#[must_use = "expressions are lazy and do nothing until evaluated"]
pub struct Expr<Op, Args, const N: usize> {
    op: Op,
    args: Args,
}

impl<Op, Args, const N: usize> Expr<Op, Args, N> {
    #[inline]
    pub const fn new(op: Op, args: Args) -> Self {
        Self { op, args }
    }
}

impl<Op, Args, const N: usize> Operand for Expr<Op, Args, N>
where
    Args: Operands,
    Op: Operation<Args::Elems>,
{
    type Elem = Op::Output;

    #[inline]
    fn at(&self, i: usize) -> Self::Elem {
        self.op.apply(self.args.at(i))
    }
}

/// A vector or an expression of arity `N`.
///
/// Scalars are operands but never `VectorExpr`s, which is what keeps
/// `scalar OP scalar` out of the operator set.
pub trait VectorExpr<const N: usize>: Operand + Sized {
    /// Materializes every element into a new vector.
    #[inline]
    fn eval(&self) -> Vector<Self::Elem, N>
    where
        Self::Elem: Scalar,
    {
        Vector::from_fn(|i| self.at(i))
    }

    #[inline]
    fn map<F, U>(self, f: F) -> Expr<op::Func<F>, (Self,), N>
    where
        F: Fn(Self::Elem) -> U,
        U: Copy,
    {
        Expr::new(op::Func(f), (self,))
    }

    #[inline]
    fn zip_with<R, F, U>(self, rhs: R, f: F) -> Expr<op::Func<F>, (Self, R), N>
    where
        R: VectorExpr<N>,
        F: Fn(Self::Elem, R::Elem) -> U,
        U: Copy,
    {
        Expr::new(op::Func(f), (self, rhs))
    }

    /// Unary plus.
    #[inline]
    fn pos(self) -> Expr<op::Pos, (Self,), N> {
        Expr::new(op::Pos, (self,))
    }

    #[inline]
    fn abs(self) -> Expr<op::Abs, (Self,), N>
    where
        Self::Elem: Scalar,
    {
        Expr::new(op::Abs, (self,))
    }

    #[inline]
    fn round(self) -> Expr<op::Round, (Self,), N>
    where
        Self::Elem: Scalar,
    {
        Expr::new(op::Round, (self,))
    }

    #[inline]
    fn floor(self) -> Expr<op::Floor, (Self,), N>
    where
        Self::Elem: Scalar,
    {
        Expr::new(op::Floor, (self,))
    }

    #[inline]
    fn ceil(self) -> Expr<op::Ceil, (Self,), N>
    where
        Self::Elem: Scalar,
    {
        Expr::new(op::Ceil, (self,))
    }

    /// Converts every element to `U` with `as` semantics.
    #[inline]
    fn component_cast<U>(self) -> Expr<op::Cast<U>, (Self,), N>
    where
        U: Scalar,
        Self::Elem: AsPrimitive<U>,
    {
        Expr::new(op::Cast::new(), (self,))
    }

    /// True if at least one element is nonzero.
    fn any_nonzero(&self) -> bool
    where
        Self::Elem: Scalar,
    {
        (0..N).any(|i| !self.at(i).is_zero())
    }

    fn sum(&self) -> Self::Elem
    where
        Self::Elem: Scalar,
    {
        let mut out = <Self::Elem as Scalar>::ZERO;
        for i in 0..N {
            out = out.wrapping_add(self.at(i));
        }
        out
    }

    fn product(&self) -> Self::Elem
    where
        Self::Elem: Scalar,
    {
        let mut out = <Self::Elem as Scalar>::ONE;
        for i in 0..N {
            out = out.wrapping_mul(self.at(i));
        }
        out
    }

    /// Dot product accumulated in this expression's element type. Integer
    /// overflow wraps.
    fn dot<R>(&self, rhs: R) -> Self::Elem
    where
        R: VectorExpr<N>,
        Self::Elem: Scalar,
        R::Elem: AsPrimitive<Self::Elem>,
    {
        let mut out = <Self::Elem as Scalar>::ZERO;
        for i in 0..N {
            out = out.wrapping_add(self.at(i).wrapping_mul(rhs.at(i).as_()));
        }
        out
    }

    fn length2(&self) -> Self::Elem
    where
        Self::Elem: Scalar,
    {
        let mut out = <Self::Elem as Scalar>::ZERO;
        for i in 0..N {
            let v = self.at(i);
            out = out.wrapping_add(v.wrapping_mul(v));
        }
        out
    }

    #[inline]
    fn length(&self) -> f64
    where
        Self::Elem: Scalar,
    {
        self.length2().to_f64().sqrt()
    }

    fn distance2<R>(&self, rhs: R) -> f64
    where
        R: VectorExpr<N>,
        Self::Elem: Scalar,
        R::Elem: Scalar,
    {
        let mut out = 0.0;
        for i in 0..N {
            let delta = self.at(i).to_f64() - rhs.at(i).to_f64();
            out += delta * delta;
        }
        out
    }

    #[inline]
    fn distance<R>(&self, rhs: R) -> f64
    where
        R: VectorExpr<N>,
        Self::Elem: Scalar,
        R::Elem: Scalar,
    {
        self.distance2(rhs).sqrt()
    }

    /// Returns the unit vector in double precision, or the unchanged vector
    /// if its length is exactly zero.
    fn normalize(&self) -> Vector<f64, N>
    where
        Self::Elem: Scalar,
    {
        let v: Vector<f64, N> = Vector::from_fn(|i| self.at(i).to_f64());
        let len = v.length();
        if len == 0.0 {
            return v;
        }
        (v / len).eval()
    }

    #[inline]
    fn set_length<S: Scalar>(&self, s: S) -> Vector<f64, N>
    where
        Self::Elem: Scalar,
    {
        (self.normalize() * s.to_f64()).eval()
    }

    #[inline]
    fn scale_to<S: Scalar>(&self, s: S) -> Vector<f64, N>
    where
        Self::Elem: Scalar,
    {
        self.set_length(s)
    }

    /// Angle between two vectors in radians.
    ///
    /// NaN when either vector has zero length, or when rounding pushes the
    /// cosine outside `[-1, 1]`.
    fn delta_angle<R>(&self, rhs: R) -> f64
    where
        R: VectorExpr<N>,
        Self::Elem: Scalar,
        R::Elem: Scalar + AsPrimitive<Self::Elem>,
    {
        let dot = self.dot(&rhs).to_f64();
        (dot / (self.length2().to_f64() * rhs.length2().to_f64()).sqrt()).acos()
    }

    #[inline]
    fn angle<R>(&self, rhs: R) -> f64
    where
        R: VectorExpr<N>,
        Self::Elem: Scalar,
        R::Elem: Scalar + AsPrimitive<Self::Elem>,
    {
        self.delta_angle(rhs)
    }

    /// True if every pair of elements differs by at most `max_abs_diff`.
    fn abs_diff_eq<R>(&self, rhs: R, max_abs_diff: f64) -> bool
    where
        R: VectorExpr<N>,
        Self::Elem: Scalar,
        R::Elem: Scalar,
    {
        (0..N).all(|i| (self.at(i).to_f64() - rhs.at(i).to_f64()).abs() <= max_abs_diff)
    }
}

impl<'a, E: VectorExpr<N>, const N: usize> VectorExpr<N> for &'a E {}

impl<Op, Args, const N: usize> VectorExpr<N> for Expr<Op, Args, N> where Self: Operand {}

impl<Op, Args, R, const N: usize> PartialEq<R> for Expr<Op, Args, N>
where
    Self: VectorExpr<N>,
    <Self as Operand>::Elem: Scalar,
    R: VectorExpr<N>,
    R::Elem: Scalar,
{
    fn eq(&self, other: &R) -> bool {
        (0..N).all(|i| scalar_eq(self.at(i), other.at(i)))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        op::{self, Operation},
        vec2, vec3, Expr, Operand, Vector, VectorExpr,
    };
    use std::cell::Cell;

    #[test]
    fn test_expr_evaluates_lazily() {
        let a = vec2(1.0f32, 2.0);
        let b = vec2(3.0f32, 4.0);
        let c = vec2(5.0f32, 6.0);

        let adds = Cell::new(0);
        let muls = Cell::new(0);
        let add = |l: f32, r: f32| {
            adds.set(adds.get() + 1);
            l + r
        };
        let mul = |l: f32, r: f32| {
            muls.set(muls.get() + 1);
            l * r
        };

        let expr = (&a).zip_with((&b).zip_with(&c, mul), add);
        assert_eq!(adds.get(), 0);
        assert_eq!(muls.get(), 0);

        let d = expr.eval();
        assert_eq!(d, vec2(16.0f32, 26.0));
        assert_eq!(adds.get(), 2);
        assert_eq!(muls.get(), 2);

        // no caching, each read walks the tree again
        assert_eq!(expr.at(1), 26.0);
        assert_eq!(adds.get(), 3);
        assert_eq!(muls.get(), 3);
    }

    struct Counting<'c, O>(&'c Cell<usize>, O);

    impl<'c, O: Operation<Args>, Args> Operation<Args> for Counting<'c, O> {
        type Output = O::Output;

        fn apply(&self, args: Args) -> Self::Output {
            self.0.set(self.0.get() + 1);
            self.1.apply(args)
        }
    }

    #[test]
    fn test_operator_tree_evaluates_once_per_index() {
        let a = vec2(1.0f32, 2.0);
        let b = vec2(3.0f32, 4.0);
        let c = vec2(5.0f32, 6.0);

        // counted `*` under the `+` operator
        let muls = Cell::new(0);
        let expr = &a + Expr::<_, _, 2>::new(Counting(&muls, op::Mul), (&b, &c));
        assert_eq!(muls.get(), 0);
        assert_eq!(expr.eval(), vec2(16.0f32, 26.0));
        assert_eq!(muls.get(), 2);

        // counted `+` over a tree built by the `*` operator
        let adds = Cell::new(0);
        let expr = Expr::<_, _, 2>::new(Counting(&adds, op::Add), (&a, &b * &c));
        assert_eq!(adds.get(), 0);
        let d = Vector::<f32, 2>::from_expr(&expr);
        assert_eq!(d, vec2(16.0f32, 26.0));
        assert_eq!(adds.get(), 2);

        // both counted, combined through the operators
        let (adds, muls) = (Cell::new(0), Cell::new(0));
        let product = Expr::<_, _, 2>::new(Counting(&muls, op::Mul), (&b, &c));
        let sum = Expr::<_, _, 2>::new(Counting(&adds, op::Add), (&a, product));
        let e = (sum * 2.0f32 - &a).eval();
        assert_eq!(e, vec2(31.0f32, 50.0));
        assert_eq!((adds.get(), muls.get()), (2, 2));
    }

    #[test]
    fn test_scalar_operand_broadcasts() {
        let v = vec3(1, 2, 3);
        let e = v * 10 + 1;
        assert_eq!(e.at(0), 11);
        assert_eq!(e.at(2), 31);
        assert_eq!(e.eval(), vec3(11, 21, 31));
    }

    #[test]
    fn test_nested_expression_reductions() {
        let a = vec2(3, -4);
        let b = vec2(1, 1);
        let e = a + b - b;
        assert_eq!(e.length2(), 25);
        assert_eq!(e.length(), 5.0);
        assert_eq!(e.sum(), -1);
        assert_eq!(e.product(), -12);
        assert_eq!(e.dot(b), -1);
        assert!(e.any_nonzero());
        assert!(!(a - a).any_nonzero());
    }

    #[test]
    fn test_integer_reductions_wrap() {
        let v = vec2(16u8, 1);
        assert_eq!(v.length2(), 1);
        assert_eq!(v.length(), 1.0);
        assert_eq!(v.dot(vec2(16u8, 0)), 0);
        assert_eq!(vec2(200u8, 100).sum(), 44);
        assert_eq!(vec3(16u8, 16, 2).product(), 0);
        assert_eq!((v * 2).sum(), 34);
    }

    #[test]
    fn test_expr_map() {
        let v = vec3(1u8, 2, 3);
        let squares = v.map(|x| u32::from(x) * u32::from(x)).eval();
        assert_eq!(squares, vec3(1u32, 4, 9));
    }

    #[test]
    fn test_custom_operation() {
        #[derive(Copy, Clone, Debug)]
        struct Lerp(f64);

        impl crate::op::Operation<(f64, f64)> for Lerp {
            type Output = f64;

            fn apply(&self, (a, b): (f64, f64)) -> f64 {
                a + (b - a) * self.0
            }
        }

        let a = Vector::<f64, 2>::zero();
        let b = vec2(10.0, -10.0);
        let mid = Expr::<_, _, 2>::new(Lerp(0.25), (&a, &b)).eval();
        assert_eq!(mid, vec2(2.5, -2.5));
    }

    #[test]
    fn test_rounding_is_lazy() {
        let v = vec2(-1.5f64, 2.25);
        assert_eq!(v.abs().eval(), vec2(1.5, 2.25));
        assert_eq!(v.round().eval(), vec2(-2.0, 2.0));
        assert_eq!(v.floor().eval(), vec2(-2.0, 2.0));
        assert_eq!(v.ceil().eval(), vec2(-1.0, 3.0));
        assert_eq!((v.floor() + v.ceil()).eval(), vec2(-3.0, 5.0));
        assert_eq!(v.pos().eval(), v);
    }
}
