use crate::Vector;

pub type Vec2d<T> = Vector<T, 2>;
pub type Vec3d<T> = Vector<T, 3>;
pub type Vec4d<T> = Vector<T, 4>;

macro_rules! element_aliases {
    ($($t:ty => $two:ident, $three:ident, $four:ident);+ $(;)?) => {$(
        pub type $two = Vec2d<$t>;
        pub type $three = Vec3d<$t>;
        pub type $four = Vec4d<$t>;
    )+};
}

element_aliases!(
    i8 => Char2d, Char3d, Char4d;
    u8 => Uchar2d, Uchar3d, Uchar4d;
    i32 => Int2d, Int3d, Int4d;
    u32 => Uint2d, Uint3d, Uint4d;
    f32 => Float2d, Float3d, Float4d;
    f64 => Double2d, Double3d, Double4d;
);
