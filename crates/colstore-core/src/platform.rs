//! Platform layout contract.
//!
//! The engine only runs on 64-bit targets where pointers, `usize` and `i64`
//! share one width and every fixed-width primitive has its nominal size.
//! Everything that can be checked at compile time is; the rest is checked
//! once by [`verify`] before the type registry is built.

#[cfg(not(target_pointer_width = "64"))]
compile_error!("colstore only supports 64-bit platforms");

const _: () = assert!(size_of::<*const u8>() == 8);
const _: () = assert!(size_of::<*const u8>() == size_of::<usize>());
const _: () = assert!(size_of::<*const u8>() == size_of::<i64>());
const _: () = assert!(size_of::<i8>() == 1);
const _: () = assert!(size_of::<i16>() == 2);
const _: () = assert!(size_of::<i32>() == 4);
const _: () = assert!(size_of::<i64>() == 8);
const _: () = assert!(size_of::<f32>() == 4);
const _: () = assert!(size_of::<f64>() == 8);

/// A violated layout assumption.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("{what} is {actual} bytes (expected {expected})")]
    Width {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("digit fast path disagrees with range test for byte {byte}")]
    DigitFastPath { byte: i8 },
}

/// ASCII decimal digit test used by numeric parsers.
///
/// One subtraction and one unsigned compare instead of two range compares.
/// [`check_digit_fast_path`] proves the two agree for every byte.
#[inline]
pub const fn is_ascii_digit_fast(ch: u8) -> bool {
    ch.wrapping_sub(b'0') < 10
}

/// Runtime restatement of the width contract. Reports the first violation.
pub fn check_widths() -> Result<(), PlatformError> {
    let widths: [(&'static str, usize, usize); 8] = [
        ("pointer", 8, size_of::<*const u8>()),
        ("usize", 8, size_of::<usize>()),
        ("i8", 1, size_of::<i8>()),
        ("i16", 2, size_of::<i16>()),
        ("i32", 4, size_of::<i32>()),
        ("i64", 8, size_of::<i64>()),
        ("f32", 4, size_of::<f32>()),
        ("f64", 8, size_of::<f64>()),
    ];
    for (what, expected, actual) in widths {
        if expected != actual {
            return Err(PlatformError::Width {
                what,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Exhaustively compare the digit fast path against the range test over all
/// 256 signed byte values.
pub fn check_digit_fast_path() -> Result<(), PlatformError> {
    for byte in i8::MIN..=i8::MAX {
        let by_range = (b'0' as i8..=b'9' as i8).contains(&byte);
        let by_offset = (byte.wrapping_sub(b'0' as i8) as u8) < 10;
        if by_range != by_offset || by_range != is_ascii_digit_fast(byte as u8) {
            return Err(PlatformError::DigitFastPath { byte });
        }
    }
    Ok(())
}

/// Run every runtime platform check.
pub fn verify() -> Result<(), PlatformError> {
    check_widths()?;
    check_digit_fast_path()
}
