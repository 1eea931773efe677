//! First-class type names.
//!
//! The lattice is closed: `void`, signed and unsigned integers of 8 to 64
//! bits, 32- and 64-bit floats, two-, three- and four-wide column vectors of
//! each, and two float matrix shapes. Vectors are written `<Nx1>` after the
//! scalar, matrices `<RxC>`.

use std::fmt;

/// Element type of a [`TypeDef`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Scalar {
    Void,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl Scalar {
    /// Width in bits; zero for `void`.
    pub const fn bits(self) -> u32 {
        match self {
            Scalar::Void => 0,
            Scalar::I8 | Scalar::U8 => 8,
            Scalar::I16 | Scalar::U16 => 16,
            Scalar::I32 | Scalar::U32 | Scalar::F32 => 32,
            Scalar::I64 | Scalar::U64 | Scalar::F64 => 64,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Scalar::I8 | Scalar::I16 | Scalar::I32 | Scalar::I64 | Scalar::F32 | Scalar::F64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Scalar::F32 | Scalar::F64)
    }
}

/// A resolved type name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDef {
    pub name: &'static str,
    pub scalar: Scalar,
    pub rows: u8,
    pub columns: u8,
}

impl TypeDef {
    const fn new(name: &'static str, scalar: Scalar, rows: u8, columns: u8) -> Self {
        TypeDef {
            name,
            scalar,
            rows,
            columns,
        }
    }

    #[inline]
    pub const fn is_scalar(&self) -> bool {
        self.rows == 1 && self.columns == 1
    }

    #[inline]
    pub const fn is_vector(&self) -> bool {
        self.rows > 1 && self.columns == 1
    }

    #[inline]
    pub const fn is_matrix(&self) -> bool {
        self.columns > 1
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Scalar, then its 2-, 3- and 4-wide vectors.
macro_rules! with_vectors {
    ($scalar:ident, $name:literal) => {
        [
            TypeDef::new($name, Scalar::$scalar, 1, 1),
            TypeDef::new(concat!($name, "<2x1>"), Scalar::$scalar, 2, 1),
            TypeDef::new(concat!($name, "<3x1>"), Scalar::$scalar, 3, 1),
            TypeDef::new(concat!($name, "<4x1>"), Scalar::$scalar, 4, 1),
        ]
    };
}

const I8: [TypeDef; 4] = with_vectors!(I8, "i8");
const I16: [TypeDef; 4] = with_vectors!(I16, "i16");
const I32: [TypeDef; 4] = with_vectors!(I32, "i32");
const I64: [TypeDef; 4] = with_vectors!(I64, "i64");
const U8: [TypeDef; 4] = with_vectors!(U8, "u8");
const U16: [TypeDef; 4] = with_vectors!(U16, "u16");
const U32: [TypeDef; 4] = with_vectors!(U32, "u32");
const U64: [TypeDef; 4] = with_vectors!(U64, "u64");
const F32: [TypeDef; 4] = with_vectors!(F32, "f32");
const F64: [TypeDef; 4] = with_vectors!(F64, "f64");

/// Every type name, in lookup order.
#[rustfmt::skip]
pub static TYPES: [TypeDef; 43] = [
    TypeDef::new("void", Scalar::Void, 1, 1),
    I8[0], I8[1], I8[2], I8[3],
    I16[0], I16[1], I16[2], I16[3],
    I32[0], I32[1], I32[2], I32[3],
    I64[0], I64[1], I64[2], I64[3],
    U8[0], U8[1], U8[2], U8[3],
    U16[0], U16[1], U16[2], U16[3],
    U32[0], U32[1], U32[2], U32[3],
    U64[0], U64[1], U64[2], U64[3],
    F32[0], F32[1], F32[2], F32[3],
    F64[0], F64[1], F64[2], F64[3],
    TypeDef::new("f32<3x3>", Scalar::F32, 3, 3),
    TypeDef::new("f32<4x4>", Scalar::F32, 4, 4),
];

/// Resolve a type name.
pub fn lookup(name: &str) -> Option<&'static TypeDef> {
    // Every name starts with one of these.
    if !matches!(name.as_bytes().first(), Some(b'v' | b'i' | b'u' | b'f')) {
        return None;
    }
    TYPES.iter().find(|def| def.name == name)
}
