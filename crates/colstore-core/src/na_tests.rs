use crate::na::*;

#[test]
fn signed_sentinels_are_minimum() {
    assert!(is_na(i8::MIN));
    assert!(is_na(i16::MIN));
    assert!(is_na(i32::MIN));
    assert!(is_na(i64::MIN));

    for v in [0i8, 1, -1, i8::MAX, i8::MIN + 1] {
        assert!(!is_na(v), "{v}");
    }
    for v in [0i16, 1, -1, i16::MAX, i16::MIN + 1] {
        assert!(!is_na(v), "{v}");
    }
    for v in [0i32, 1, -1, i32::MAX, i32::MIN + 1] {
        assert!(!is_na(v), "{v}");
    }
    for v in [0i64, 1, -1, i64::MAX, i64::MIN + 1] {
        assert!(!is_na(v), "{v}");
    }
}

#[test]
fn i1_exhaustive() {
    for v in i8::MIN..=i8::MAX {
        assert_eq!(is_na(v), v == i8::MIN, "{v}");
    }
}

#[test]
fn unsigned_sentinels_are_maximum() {
    assert!(is_na(u8::MAX));
    assert!(is_na(u16::MAX));
    assert!(is_na(u32::MAX));

    assert!(!is_na(0u8));
    assert!(!is_na(u8::MAX - 1));
    assert!(!is_na(0u16));
    assert!(!is_na(u16::MAX - 1));
    assert!(!is_na(0u32));
    assert!(!is_na(u32::MAX - 1));
}

#[test]
fn u1_exhaustive() {
    for v in u8::MIN..=u8::MAX {
        assert_eq!(is_na(v), v == u8::MAX, "{v}");
    }
}

#[test]
fn f4_sentinel() {
    assert!(is_na(NA_F4));
    assert!(NA_F4.is_nan());
    assert!(!is_na(0.0f32));
    assert!(!is_na(-0.0f32));
    assert!(!is_na(1.5f32));
    assert!(!is_na(f32::INFINITY));
    assert!(!is_na(f32::NEG_INFINITY));
    assert!(!is_na(f32::MAX));
}

#[test]
fn f8_sentinel() {
    assert!(is_na(NA_F8));
    assert!(NA_F8.is_nan());
    assert!(!is_na(0.0f64));
    assert!(!is_na(-0.0f64));
    assert!(!is_na(1.5f64));
    assert!(!is_na(f64::INFINITY));
    assert!(!is_na(f64::NEG_INFINITY));
    assert!(!is_na(f64::MIN_POSITIVE));
}

#[test]
fn other_nans_are_not_na() {
    assert!(!is_na(f32::NAN));
    assert!(!is_na(f64::NAN));

    let other_f4 = f4_from_bits(NA_F4_BITS + 1);
    assert!(other_f4.is_nan());
    assert!(!is_na(other_f4));

    let other_f8 = f8_from_bits(NA_F8_BITS + 1);
    assert!(other_f8.is_nan());
    assert!(!is_na(other_f8));

    // Same payload, sign bit set.
    assert!(!is_na(f4_from_bits(NA_F4_BITS | 0x8000_0000)));
    assert!(!is_na(f8_from_bits(NA_F8_BITS | 0x8000_0000_0000_0000)));
}

#[test]
fn float_bits_roundtrip() {
    assert_eq!(f4_to_bits(f4_from_bits(NA_F4_BITS)), NA_F4_BITS);
    assert_eq!(f8_to_bits(f8_from_bits(NA_F8_BITS)), NA_F8_BITS);
    assert_eq!(f4_to_bits(NA_F4), NA_F4_BITS);
    assert_eq!(f8_to_bits(NA_F8), NA_F8_BITS);
}

#[test]
fn float_sentinels_are_bit_stable() {
    let a = NA_F8;
    let b = <f64 as NaValue>::NA;
    assert_ne!(a, b);
    assert_eq!(a.to_bits(), b.to_bits());
    assert_eq!(NA_F4.to_bits(), <f32 as NaValue>::NA.to_bits());
}

#[test]
fn trait_kinds() {
    assert_eq!(<i8 as NaValue>::KIND, NaKind::I1);
    assert_eq!(<i16 as NaValue>::KIND, NaKind::I2);
    assert_eq!(<i32 as NaValue>::KIND, NaKind::I4);
    assert_eq!(<i64 as NaValue>::KIND, NaKind::I8);
    assert_eq!(<u8 as NaValue>::KIND, NaKind::U1);
    assert_eq!(<u16 as NaValue>::KIND, NaKind::U2);
    assert_eq!(<u32 as NaValue>::KIND, NaKind::U4);
    assert_eq!(<f32 as NaValue>::KIND, NaKind::F4);
    assert_eq!(<f64 as NaValue>::KIND, NaKind::F8);
}

#[test]
fn kind_width_matches_primitive() {
    assert_eq!(NaKind::I1.width(), size_of::<i8>());
    assert_eq!(NaKind::I2.width(), size_of::<i16>());
    assert_eq!(NaKind::I4.width(), size_of::<i32>());
    assert_eq!(NaKind::I8.width(), size_of::<i64>());
    assert_eq!(NaKind::U1.width(), size_of::<u8>());
    assert_eq!(NaKind::U2.width(), size_of::<u16>());
    assert_eq!(NaKind::U4.width(), size_of::<u32>());
    assert_eq!(NaKind::F4.width(), size_of::<f32>());
    assert_eq!(NaKind::F8.width(), size_of::<f64>());
}

#[test]
fn kind_class() {
    assert_eq!(NaKind::I1.class(), ValueClass::Signed);
    assert_eq!(NaKind::I8.class(), ValueClass::Signed);
    assert_eq!(NaKind::U1.class(), ValueClass::Unsigned);
    assert_eq!(NaKind::U4.class(), ValueClass::Unsigned);
    assert_eq!(NaKind::F4.class(), ValueClass::Float);
    assert_eq!(NaKind::F8.class(), ValueClass::Float);
}

#[test]
fn kind_bits() {
    assert_eq!(NaKind::I1.bits(), 0x80);
    assert_eq!(NaKind::I2.bits(), 0x8000);
    assert_eq!(NaKind::I4.bits(), 0x8000_0000);
    assert_eq!(NaKind::I8.bits(), 0x8000_0000_0000_0000);
    assert_eq!(NaKind::U1.bits(), 0xFF);
    assert_eq!(NaKind::U2.bits(), 0xFFFF);
    assert_eq!(NaKind::U4.bits(), 0xFFFF_FFFF);
    assert_eq!(NaKind::F4.bits(), 0x7F80_07A2);
    assert_eq!(NaKind::F8.bits(), 0x7FF0_0000_0000_07A2);
}

#[test]
fn kind_from_u8() {
    for kind in NaKind::ALL {
        assert_eq!(NaKind::from_u8(kind as u8), Some(kind));
    }
    assert_eq!(NaKind::from_u8(9), None);
    assert_eq!(NaKind::from_u8(255), None);
}

#[test]
fn kind_names() {
    let names: Vec<_> = NaKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        ["i1", "i2", "i4", "i8", "u1", "u2", "u4", "f4", "f8"]
    );
}

#[test]
fn is_na_bits_rejects_high_garbage() {
    assert!(NaKind::I1.is_na_bits(0x80));
    assert!(!NaKind::I1.is_na_bits(0xFF80));
    assert!(!NaKind::I1.is_na_bits(i8::MIN as i64 as u64));
    assert!(NaKind::F4.is_na_bits(NA_F4_BITS as u64));
}

#[test]
fn is_na_le_bytes() {
    assert!(NaKind::I4.is_na_le_bytes(&NA_I4.to_le_bytes()));
    assert!(!NaKind::I4.is_na_le_bytes(&0i32.to_le_bytes()));
    assert!(NaKind::U2.is_na_le_bytes(&[0xFF, 0xFF]));
    assert!(NaKind::F8.is_na_le_bytes(&NA_F8.to_le_bytes()));
    assert!(!NaKind::F8.is_na_le_bytes(&f64::NAN.to_le_bytes()));
    assert!(NaKind::F4.is_na_le_bytes(&NA_F4.to_le_bytes()));
}

#[test]
fn is_na_le_bytes_wrong_width() {
    assert!(!NaKind::I4.is_na_le_bytes(&[0x80]));
    assert!(!NaKind::I1.is_na_le_bytes(&[0x80, 0x00]));
    assert!(!NaKind::I8.is_na_le_bytes(&[]));
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&NaKind::F8).unwrap(), "\"f8\"");
    assert_eq!(
        serde_json::to_string(&ValueClass::Unsigned).unwrap(),
        "\"unsigned\""
    );
}
