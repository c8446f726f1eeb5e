//! Storage type registry for colstore.
//!
//! This crate contains:
//! - Type tags (`SType`, `LType`)
//! - Auxiliary metadata records (`DecimalMeta`, `VarcharMeta`, ...)
//! - The process-wide descriptor table (`TypeRegistry`, `describe`)
//! - A human-readable dump of the table

pub mod dump;
pub mod error;
pub mod ltype;
pub mod meta;
pub mod registry;
pub mod stype;

// Re-export commonly used items at crate root
pub use colstore_core::{Colors, NaKind, NaValue, ValueClass, is_na};
pub use dump::dump;
pub use error::TypeError;
pub use ltype::LType;
pub use meta::{DecimalMeta, EnumMeta, FixcharMeta, MetaKind, VarcharMeta};
pub use registry::{STypeInfo, TypeRegistry, describe, init_type_system};
pub use stype::SType;
