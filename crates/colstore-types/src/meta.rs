//! Per-column auxiliary metadata records.
//!
//! The registry only records each record's size. Field layouts are owned by
//! the column layer and may still change; the sizes below are the contract.

use serde::Serialize;

/// Decimal scale for scaled-integer reals (`i2r`, `i4r`, `i8r`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct DecimalMeta {
    /// Power of ten the stored integer is divided by.
    pub scale: i32,
}

const _: () = assert!(size_of::<DecimalMeta>() == 4);

/// Offset bookkeeping for variable-width strings (`i4s`, `i8s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct VarcharMeta {
    /// Byte offset of the offsets array within the column buffer.
    pub offoff: i64,
}

const _: () = assert!(size_of::<VarcharMeta>() == 8);

/// Declared width of a fixed character block (`c#s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct FixcharMeta {
    pub n: i64,
}

const _: () = assert!(size_of::<FixcharMeta>() == 8);

/// Dictionary reference for enum-coded strings (`u1e`, `u2e`, `u4e`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct EnumMeta {
    /// Number of dictionary levels.
    pub num: usize,
    /// Byte offset of the level offsets within the column buffer.
    pub offoff: i64,
}

const _: () = assert!(size_of::<EnumMeta>() == 16);

/// Which metadata record a storage type carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKind {
    Decimal,
    Varchar,
    Fixchar,
    Enum,
}

impl MetaKind {
    /// Size in bytes of the record.
    pub const fn size(self) -> usize {
        match self {
            Self::Decimal => size_of::<DecimalMeta>(),
            Self::Varchar => size_of::<VarcharMeta>(),
            Self::Fixchar => size_of::<FixcharMeta>(),
            Self::Enum => size_of::<EnumMeta>(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Varchar => "varchar",
            Self::Fixchar => "fixchar",
            Self::Enum => "enum",
        }
    }
}
