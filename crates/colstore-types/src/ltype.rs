//! Logical types: the coarse grouping storage types map onto.

use std::fmt;

use serde::Serialize;

use crate::error::TypeError;

/// Logical type of a column.
///
/// Several storage types share one logical type (every integer width is
/// `Integer`). Tags are persisted by collaborators; never renumber.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LType {
    /// Zero-width columns with no values at all.
    Void = 0,
    Boolean = 1,
    Integer = 2,
    Real = 3,
    String = 4,
    Datetime = 5,
    /// Opaque handles owned by the host.
    Object = 6,
}

const _: () = assert!(size_of::<LType>() == 1);

impl LType {
    pub const COUNT: usize = 7;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Void,
        Self::Boolean,
        Self::Integer,
        Self::Real,
        Self::String,
        Self::Datetime,
        Self::Object,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::String => "string",
            Self::Datetime => "datetime",
            Self::Object => "object",
        }
    }
}

impl TryFrom<u8> for LType {
    type Error = TypeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_u8(v).ok_or(TypeError::InvalidLType(v))
    }
}

impl fmt::Display for LType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
