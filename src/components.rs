use crate::{Scalar, Vector, VectorExpr};
use bytemuck::{Pod, Zeroable};
use core::ops::{Deref, DerefMut};
use num_traits::AsPrimitive;

#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vector<T, 2> {
    Vector::from_array([x, y])
}

#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::from_array([x, y, z])
}

#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::from_array([x, y, z, w])
}

/// Component letters of an arity, in order, if it has named components.
pub const fn component_names(n: usize) -> Option<&'static str> {
    match n {
        2 => Some("xy"),
        3 => Some("xyz"),
        4 => Some("xyzw"),
        _ => None,
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Xy<T> {
    pub x: T,
    pub y: T,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Xyz<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Xyzw<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

macro_rules! impl_named_components {
    ($($n:literal => $View:ident),+) => {$(
        // SAFETY: `repr(C)` with only `T` fields, so no padding and every bit
        // pattern is valid whenever it is for `T`.
        unsafe impl<T: Pod> Zeroable for $View<T> {}
        unsafe impl<T: Pod> Pod for $View<T> {}

        impl<T: Scalar> Deref for Vector<T, $n> {
            type Target = $View<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                bytemuck::cast_ref(self.as_array())
            }
        }

        impl<T: Scalar> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                bytemuck::cast_mut(self.as_mut_array())
            }
        }
    )+};
}

impl_named_components!(2 => Xy, 3 => Xyz, 4 => Xyzw);

impl<T: Scalar> Vector<T, 2> {
    /// Angle of the vector against the positive x axis, in `(-pi, pi]`.
    #[inline]
    pub fn polar_angle(&self) -> f64 {
        self.y.to_f64().atan2(self.x.to_f64())
    }
}

impl Vector<f64, 2> {
    /// The point on the unit circle at `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        vec2(cos, sin)
    }
}

#[inline]
pub fn angle_coords(angle: f64) -> Vector<f64, 2> {
    Vector::from_angle(angle)
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product, evaluated immediately since every output element reads
    /// two other positions.
    pub fn cross<R>(&self, rhs: R) -> Self
    where
        R: VectorExpr<3>,
        R::Elem: AsPrimitive<T>,
    {
        let Xyz { x, y, z } = **self;
        let (rx, ry, rz): (T, T, T) = (rhs.at(0).as_(), rhs.at(1).as_(), rhs.at(2).as_());
        vec3(y * rz - z * ry, z * rx - x * rz, x * ry - y * rx)
    }
}
