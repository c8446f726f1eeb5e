//! Errors for decoding type tags and codes.

use crate::ltype::LType;
use crate::stype::SType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("invalid storage type tag: {0} (expected < {count})", count = SType::COUNT)]
    InvalidSType(u8),
    #[error("invalid logical type tag: {0} (expected < {count})", count = LType::COUNT)]
    InvalidLType(u8),
    #[error("unknown storage type code: {0:?}")]
    UnknownCode(String),
}
