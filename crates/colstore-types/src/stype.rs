//! Storage types: one tag per physical column representation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TypeError;
use crate::registry::{STypeInfo, describe};

/// Physical storage type of a column.
///
/// Tags are dense and zero-based. Collaborators persist them on disk, so the
/// numbering is part of the file format: append new variants, never
/// renumber existing ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SType {
    /// Zero-width column.
    Void = 0,
    /// Boolean stored as one signed byte (0, 1, NA).
    BooleanI1 = 1,
    IntegerI1 = 2,
    IntegerI2 = 3,
    IntegerI4 = 4,
    IntegerI8 = 5,
    RealF4 = 6,
    RealF8 = 7,
    /// Decimal: integer mantissa scaled by `DecimalMeta::scale`.
    RealI2 = 8,
    RealI4 = 9,
    RealI8 = 10,
    /// Variable-width string with 4-byte offsets.
    StringI4Vchar = 11,
    /// Variable-width string with 8-byte offsets.
    StringI8Vchar = 12,
    /// Fixed-width character block; the width is stored per column.
    StringFchar = 13,
    /// Enum-coded string, 1-byte codes into a per-column dictionary.
    StringU1Enum = 14,
    StringU2Enum = 15,
    StringU4Enum = 16,
    /// Timestamp since the epoch.
    DatetimeI8Epoch = 17,
    /// Timestamp packed into calendar fields.
    DatetimeI8Prtmn = 18,
    /// Time of day.
    DatetimeI4Time = 19,
    /// Calendar date.
    DatetimeI4Date = 20,
    /// Year and month.
    DatetimeI2Month = 21,
    /// Opaque 8-byte handle to a host object.
    ObjectP8 = 22,
}

const _: () = assert!(size_of::<SType>() == 1);
const _: () = assert!(SType::ObjectP8 as usize + 1 == SType::COUNT);

impl SType {
    pub const COUNT: usize = 23;

    /// Every storage type in tag order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Void,
        Self::BooleanI1,
        Self::IntegerI1,
        Self::IntegerI2,
        Self::IntegerI4,
        Self::IntegerI8,
        Self::RealF4,
        Self::RealF8,
        Self::RealI2,
        Self::RealI4,
        Self::RealI8,
        Self::StringI4Vchar,
        Self::StringI8Vchar,
        Self::StringFchar,
        Self::StringU1Enum,
        Self::StringU2Enum,
        Self::StringU4Enum,
        Self::DatetimeI8Epoch,
        Self::DatetimeI8Prtmn,
        Self::DatetimeI4Time,
        Self::DatetimeI4Date,
        Self::DatetimeI2Month,
        Self::ObjectP8,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// Tag ordinal, usable as a registry index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-character identifying code (e.g. `"i4i"`).
    pub fn code(self) -> &'static str {
        STypeInfo::of(self).code()
    }

    /// Look up a storage type by its three-character code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Descriptor from the process-wide registry.
    pub fn info(self) -> &'static STypeInfo {
        describe(self)
    }

    /// Whether the element payload differs in size per element.
    pub fn is_varwidth(self) -> bool {
        STypeInfo::of(self).is_varwidth()
    }

    pub fn is_string(self) -> bool {
        matches!(
            self,
            Self::StringI4Vchar
                | Self::StringI8Vchar
                | Self::StringFchar
                | Self::StringU1Enum
                | Self::StringU2Enum
                | Self::StringU4Enum
        )
    }

    pub fn is_enum(self) -> bool {
        matches!(
            self,
            Self::StringU1Enum | Self::StringU2Enum | Self::StringU4Enum
        )
    }
}

impl TryFrom<u8> for SType {
    type Error = TypeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or(TypeError::InvalidSType(v))
    }
}

impl FromStr for SType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| TypeError::UnknownCode(s.to_string()))
    }
}

impl fmt::Display for SType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
