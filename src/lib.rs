//! Fixed-size numeric vectors with lazily evaluated elementwise arithmetic.
//!
//! Arithmetic operators on [`Vector`]s don't compute anything. They build an
//! [`Expr`] tree that is evaluated one index at a time when it is assigned to a
//! vector, compared, reduced or read with [`Operand::at`]. A chain like
//! `a + b * c` therefore never materializes `b * c`.
//!
//! ```
//! use math_vector::{vec3, Float3d, VectorExpr};
//!
//! let a = vec3(1.0f32, 2.0, 3.0);
//! let b = vec3(0.5f32, 0.5, 0.5);
//! let c = Float3d::splat(4.0);
//!
//! let d = (&a + &b * &c).eval();
//! assert_eq!(d, vec3(3.0f32, 4.0, 5.0));
//! assert_eq!(d.x, 3.0);
//! assert_eq!((a - 1.0).length2(), 5.0);
//! assert_eq!(d.labeled().line_breaks(false).to_string(), "x: 3 y: 4 z: 5 ");
//! ```
//!
//! Vectors of different element types mix freely in expressions, but a scalar
//! operand must have the vector's element type and vectors must share their
//! arity:
//!
//! ```compile_fail
//! use math_vector::vec2;
//!
//! let _ = vec2(1u32, 2) + 1.5f64;
//! ```
//!
//! ```compile_fail
//! use math_vector::vec2;
//!
//! let _ = -vec2(1u32, 2);
//! ```

mod aliases;
mod components;
mod expr;
mod format;
#[cfg(feature = "glam")]
mod glam_ext;
pub mod op;
mod ops;
mod scalar;
#[cfg(feature = "serde")]
mod serialization;
mod vector;

pub use aliases::*;
pub use components::{angle_coords, component_names, vec2, vec3, vec4, Xy, Xyz, Xyzw};
pub use expr::{Expr, Operand, Operands, Splat, VectorExpr};
pub use format::Labeled;
pub use scalar::Scalar;
pub use vector::Vector;
