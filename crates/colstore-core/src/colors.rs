//! ANSI color codes for registry dumps.
//!
//! Three semantic colors plus a dim modifier:
//! - Blue: storage type codes
//! - Green: NA sentinel patterns
//! - Dim: placeholders for absent values
//! - Reset: return to default

/// ANSI color palette for debug output.
///
/// Uses only standard 16-color ANSI codes so dumps read on light and dark
/// terminals alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `color`, closing with reset. No-op when colors are off.
    pub fn paint(&self, color: &'static str, text: &str) -> String {
        if color.is_empty() {
            return text.to_string();
        }
        format!("{color}{text}{}", self.reset)
    }
}
