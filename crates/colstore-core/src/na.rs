//! NA (missing value) sentinels.
//!
//! Every fixed-width primitive reserves one bit pattern to mean "no data":
//! - Signed integers: the two's-complement minimum.
//! - Unsigned integers: the maximum.
//! - Floats: one specific NaN payload. Any other NaN, including the canonical
//!   quiet NaN that arithmetic produces, is an ordinary value.
//!
//! Float sentinels must be tested by raw bits. `NA_F8 == NA_F8` is false
//! under IEEE equality, so `is_na` reinterprets the value first.
//!
//! There is no sentinel for `u64`: no storage type stores unsigned 64-bit
//! elements, and `u64` does not implement [`NaValue`], so asking for one does
//! not compile.

use serde::Serialize;

/// Raw bits of the 32-bit float sentinel (exponent all ones, payload `0x7A2`).
pub const NA_F4_BITS: u32 = 0x7F80_07A2;
/// Raw bits of the 64-bit float sentinel (exponent all ones, payload `0x7A2`).
pub const NA_F8_BITS: u64 = 0x7FF0_0000_0000_07A2;

pub const NA_I1: i8 = i8::MIN;
pub const NA_I2: i16 = i16::MIN;
pub const NA_I4: i32 = i32::MIN;
pub const NA_I8: i64 = i64::MIN;
pub const NA_U1: u8 = u8::MAX;
pub const NA_U2: u16 = u16::MAX;
pub const NA_U4: u32 = u32::MAX;
pub const NA_F4: f32 = f4_from_bits(NA_F4_BITS);
pub const NA_F8: f64 = f8_from_bits(NA_F8_BITS);

/// Reinterpret 32 raw bits as an `f32`. Bit transmute, not a numeric cast.
#[inline]
pub const fn f4_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Raw bits of an `f32`, NaN payload included.
#[inline]
pub const fn f4_to_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterpret 64 raw bits as an `f64`. Bit transmute, not a numeric cast.
#[inline]
pub const fn f8_from_bits(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Raw bits of an `f64`, NaN payload included.
#[inline]
pub const fn f8_to_bits(value: f64) -> u64 {
    value.to_bits()
}

/// Numeric class of a primitive kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueClass {
    Signed,
    Unsigned,
    Float,
}

/// Primitive kinds that own an NA sentinel.
///
/// Names follow the storage code convention: letter for the class, digit for
/// the width in bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NaKind {
    I1 = 0,
    I2 = 1,
    I4 = 2,
    I8 = 3,
    U1 = 4,
    U2 = 5,
    U4 = 6,
    F4 = 7,
    F8 = 8,
}

impl NaKind {
    pub const ALL: [Self; 9] = [
        Self::I1,
        Self::I2,
        Self::I4,
        Self::I8,
        Self::U1,
        Self::U2,
        Self::U4,
        Self::F4,
        Self::F8,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// Element width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::I1 | Self::U1 => 1,
            Self::I2 | Self::U2 => 2,
            Self::I4 | Self::U4 | Self::F4 => 4,
            Self::I8 | Self::F8 => 8,
        }
    }

    pub const fn class(self) -> ValueClass {
        match self {
            Self::I1 | Self::I2 | Self::I4 | Self::I8 => ValueClass::Signed,
            Self::U1 | Self::U2 | Self::U4 => ValueClass::Unsigned,
            Self::F4 | Self::F8 => ValueClass::Float,
        }
    }

    /// Sentinel bit pattern, zero-extended to 64 bits.
    pub const fn bits(self) -> u64 {
        match self {
            Self::I1 => NA_I1 as u8 as u64,
            Self::I2 => NA_I2 as u16 as u64,
            Self::I4 => NA_I4 as u32 as u64,
            Self::I8 => NA_I8 as u64,
            Self::U1 => NA_U1 as u64,
            Self::U2 => NA_U2 as u64,
            Self::U4 => NA_U4 as u64,
            Self::F4 => NA_F4_BITS as u64,
            Self::F8 => NA_F8_BITS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::I1 => "i1",
            Self::I2 => "i2",
            Self::I4 => "i4",
            Self::I8 => "i8",
            Self::U1 => "u1",
            Self::U2 => "u2",
            Self::U4 => "u4",
            Self::F4 => "f4",
            Self::F8 => "f8",
        }
    }

    /// Whether `raw` holds exactly this kind's sentinel in its low `width()`
    /// bytes, with every higher byte zero.
    pub const fn is_na_bits(self, raw: u64) -> bool {
        raw == self.bits()
    }

    /// Test an element slot read straight from column memory.
    ///
    /// `bytes` is little-endian. A slice whose length is not `width()` is
    /// never NA.
    pub fn is_na_le_bytes(self, bytes: &[u8]) -> bool {
        if bytes.len() != self.width() {
            return false;
        }
        let mut buf = [0u8; 8];
        buf[..bytes.len()].copy_from_slice(bytes);
        self.is_na_bits(u64::from_le_bytes(buf))
    }
}

/// A fixed-width primitive with a reserved NA value.
pub trait NaValue: Copy {
    /// The sentinel. For floats, compare with [`NaValue::is_na`], never `==`.
    const NA: Self;
    const KIND: NaKind;

    fn is_na(self) -> bool;
}

macro_rules! int_na {
    ($($ty:ty => $kind:ident, $na:expr;)*) => {$(
        impl NaValue for $ty {
            const NA: Self = $na;
            const KIND: NaKind = NaKind::$kind;

            #[inline]
            fn is_na(self) -> bool {
                self == Self::NA
            }
        }
    )*};
}

int_na! {
    i8 => I1, NA_I1;
    i16 => I2, NA_I2;
    i32 => I4, NA_I4;
    i64 => I8, NA_I8;
    u8 => U1, NA_U1;
    u16 => U2, NA_U2;
    u32 => U4, NA_U4;
}

impl NaValue for f32 {
    const NA: Self = NA_F4;
    const KIND: NaKind = NaKind::F4;

    #[inline]
    fn is_na(self) -> bool {
        f4_to_bits(self) == NA_F4_BITS
    }
}

impl NaValue for f64 {
    const NA: Self = NA_F8;
    const KIND: NaKind = NaKind::F8;

    #[inline]
    fn is_na(self) -> bool {
        f8_to_bits(self) == NA_F8_BITS
    }
}

/// Whether `value` is the NA sentinel of its type.
#[inline]
pub fn is_na<T: NaValue>(value: T) -> bool {
    value.is_na()
}
