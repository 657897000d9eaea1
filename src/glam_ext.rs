use crate::Vector;
use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

macro_rules! impl_glam_conversions {
    ($($Glam:ty => $T:ty, $n:literal);+ $(;)?) => {$(
        impl From<$Glam> for Vector<$T, $n> {
            #[inline]
            fn from(v: $Glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<Vector<$T, $n>> for $Glam {
            #[inline]
            fn from(v: Vector<$T, $n>) -> Self {
                <$Glam>::from_array(v.to_array())
            }
        }
    )+};
}

impl_glam_conversions!(
    Vec2 => f32, 2;
    Vec3 => f32, 3;
    Vec4 => f32, 4;
    DVec2 => f64, 2;
    DVec3 => f64, 3;
    DVec4 => f64, 4;
    IVec2 => i32, 2;
    IVec3 => i32, 3;
    IVec4 => i32, 4;
    UVec2 => u32, 2;
    UVec3 => u32, 3;
    UVec4 => u32, 4;
);

#[cfg(test)]
mod test {
    use crate::{vec3, Float3d, Vector, VectorExpr};
    use glam::{DVec2, IVec4, UVec2, Vec3};
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_conversions() {
        let v: Float3d = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, vec3(1.0f32, 2.0, 3.0));
        assert_eq!(Vec3::from(v), Vec3::new(1.0, 2.0, 3.0));

        let d = Vector::from(DVec2::new(0.5, -0.5));
        assert_eq!(DVec2::from((d * 2.0).eval()), DVec2::new(1.0, -1.0));

        assert_eq!(IVec4::from(Vector::<i32, 4>::splat(-3)), IVec4::splat(-3));
        assert_eq!(Vector::<u32, 2>::from(UVec2::new(4, 9)).sum(), 13);
    }

    #[test]
    fn test_matches_glam() {
        let mut rng = rand_pcg::Pcg32::seed_from_u64(0x676c_616d);
        for _ in 0..100 {
            let a = Vec3::new(rng.gen(), rng.gen(), rng.gen()) * 10.0;
            let b = Vec3::new(rng.gen(), rng.gen(), rng.gen()) * 10.0;
            let (va, vb) = (Float3d::from(a), Float3d::from(b));

            assert!(va.cross(&vb).abs_diff_eq(Float3d::from(a.cross(b)), 1e-4));
            assert!(((va + vb).length() - (a + b).length() as f64).abs() < 1e-4);
            assert!((va.dot(&vb) - a.dot(b)).abs() < 1e-3);
            assert!(Float3d::from_expr(va.normalize()).abs_diff_eq(Float3d::from(a.normalize()), 1e-5));
        }
    }
}
