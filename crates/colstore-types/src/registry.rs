//! Storage type descriptors and the process-wide registry.
//!
//! `STypeInfo::of` is the table itself: an exhaustive `match`, so adding an
//! `SType` without a descriptor fails to compile. `TypeRegistry` materializes
//! it into an array indexed by tag ordinal, built once behind a `LazyLock`
//! after the platform contract has been verified.

use std::ops::Index;
use std::sync::LazyLock;

use colstore_core::NaKind;
use serde::Serialize;

use crate::ltype::LType;
use crate::meta::MetaKind;
use crate::stype::SType;

/// Immutable description of one storage type's physical layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct STypeInfo {
    stype: SType,
    code: &'static str,
    elemsize: usize,
    metasize: usize,
    meta: Option<MetaKind>,
    varwidth: bool,
    ltype: LType,
    na: Option<NaKind>,
}

impl STypeInfo {
    /// Descriptor for `stype`.
    ///
    /// Invariant: when `na` is present, its width equals `elemsize` and its
    /// class matches the element encoding.
    pub const fn of(stype: SType) -> Self {
        use LType as L;
        use MetaKind as M;
        use NaKind as N;
        use SType as S;

        #[rustfmt::skip]
        let (code, elemsize, meta, varwidth, ltype, na) = match stype {
            S::Void            => ("---", 0, None,             false, L::Void,     None),
            S::BooleanI1       => ("i1b", 1, None,             false, L::Boolean,  Some(N::I1)),
            S::IntegerI1       => ("i1i", 1, None,             false, L::Integer,  Some(N::I1)),
            S::IntegerI2       => ("i2i", 2, None,             false, L::Integer,  Some(N::I2)),
            S::IntegerI4       => ("i4i", 4, None,             false, L::Integer,  Some(N::I4)),
            S::IntegerI8       => ("i8i", 8, None,             false, L::Integer,  Some(N::I8)),
            S::RealF4          => ("f4r", 4, None,             false, L::Real,     Some(N::F4)),
            S::RealF8          => ("f8r", 8, None,             false, L::Real,     Some(N::F8)),
            S::RealI2          => ("i2r", 2, Some(M::Decimal), false, L::Real,     Some(N::I2)),
            S::RealI4          => ("i4r", 4, Some(M::Decimal), false, L::Real,     Some(N::I4)),
            S::RealI8          => ("i8r", 8, Some(M::Decimal), false, L::Real,     Some(N::I8)),
            S::StringI4Vchar   => ("i4s", 4, Some(M::Varchar), true,  L::String,   None),
            S::StringI8Vchar   => ("i8s", 8, Some(M::Varchar), true,  L::String,   None),
            S::StringFchar     => ("c#s", 0, Some(M::Fixchar), false, L::String,   None),
            S::StringU1Enum    => ("u1e", 1, Some(M::Enum),    true,  L::String,   Some(N::U1)),
            S::StringU2Enum    => ("u2e", 2, Some(M::Enum),    true,  L::String,   Some(N::U2)),
            S::StringU4Enum    => ("u4e", 4, Some(M::Enum),    true,  L::String,   Some(N::U4)),
            S::DatetimeI8Epoch => ("i8d", 8, None,             false, L::Datetime, Some(N::I8)),
            S::DatetimeI8Prtmn => ("i8w", 8, None,             false, L::Datetime, Some(N::I8)),
            S::DatetimeI4Time  => ("i4t", 4, None,             false, L::Datetime, Some(N::I4)),
            S::DatetimeI4Date  => ("i4d", 4, None,             false, L::Datetime, Some(N::I4)),
            S::DatetimeI2Month => ("i2d", 2, None,             false, L::Datetime, Some(N::I2)),
            S::ObjectP8        => ("p8p", 8, None,             false, L::Object,   None),
        };

        let metasize = match meta {
            Some(m) => m.size(),
            None => 0,
        };

        Self {
            stype,
            code,
            elemsize,
            metasize,
            meta,
            varwidth,
            ltype,
            na,
        }
    }

    pub fn stype(&self) -> SType {
        self.stype
    }

    /// Three-character identifying code, unique across the table.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Element width in bytes; 0 when the width is a per-column parameter.
    pub fn elemsize(&self) -> usize {
        self.elemsize
    }

    /// Size of the per-column metadata record; 0 when there is none.
    pub fn metasize(&self) -> usize {
        self.metasize
    }

    pub fn meta(&self) -> Option<MetaKind> {
        self.meta
    }

    pub fn is_varwidth(&self) -> bool {
        self.varwidth
    }

    pub fn ltype(&self) -> LType {
        self.ltype
    }

    /// Primitive kind whose sentinel marks NA elements.
    ///
    /// `None` for void, offset-indexed and fixed-width strings, and objects:
    /// their missing values are owned by the column layer.
    pub fn na(&self) -> Option<NaKind> {
        self.na
    }

    /// Test one raw little-endian element slot for NA.
    ///
    /// Always false for types without a scalar sentinel.
    pub fn is_na_le_bytes(&self, bytes: &[u8]) -> bool {
        self.na.is_some_and(|na| na.is_na_le_bytes(bytes))
    }
}

/// Descriptor table indexed by `SType` ordinal.
#[derive(Debug)]
pub struct TypeRegistry {
    infos: [STypeInfo; SType::COUNT],
}

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::build);

impl TypeRegistry {
    fn build() -> Self {
        colstore_core::ensure_platform();
        let registry = Self {
            infos: SType::ALL.map(STypeInfo::of),
        };
        tracing::debug!(
            stypes = SType::COUNT,
            ltypes = LType::COUNT,
            "storage type registry initialized"
        );
        registry
    }

    pub fn get(&self, stype: SType) -> &STypeInfo {
        &self.infos[stype.index()]
    }

    /// Find a descriptor by its three-character code.
    pub fn by_code(&self, code: &str) -> Option<&STypeInfo> {
        self.infos.iter().find(|info| info.code == code)
    }

    /// Descriptors in tag order.
    pub fn iter(&self) -> std::slice::Iter<'_, STypeInfo> {
        self.infos.iter()
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

impl Index<SType> for TypeRegistry {
    type Output = STypeInfo;

    fn index(&self, stype: SType) -> &STypeInfo {
        self.get(stype)
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = &'a STypeInfo;
    type IntoIter = std::slice::Iter<'a, STypeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the registry if needed and return it.
///
/// The first call verifies the platform contract (panicking if it does not
/// hold) and populates the table. Later calls return the same instance.
pub fn init_type_system() -> &'static TypeRegistry {
    LazyLock::force(&REGISTRY)
}

/// Descriptor for `stype`. O(1).
pub fn describe(stype: SType) -> &'static STypeInfo {
    init_type_system().get(stype)
}
