//! Error types for tricolor.

use thiserror::Error;

/// Errors produced while building, parsing or mutating a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A color string did not match `#RRGGBB` / `#RRGGBBAA` (the `#` is optional).
    #[error(
        "invalid color string '{0}': expected 6 (RGB) or 8 (RGBA) hex digits, optionally prefixed with '#'"
    )]
    Format(String),

    /// A hue that falls into no 60 degree sextant, even after reduction modulo 360.
    #[error("hue {0} is not a finite number of degrees")]
    NonFiniteHue(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_includes_offending_input() {
        let err = ColorError::Format("GG0000".into());
        let msg = format!("{err}");
        assert!(msg.contains("GG0000"), "missing input in: {msg}");
        assert!(msg.contains("hex"), "missing hint in: {msg}");
    }

    #[test]
    fn non_finite_hue_includes_value() {
        let err = ColorError::NonFiniteHue(f64::INFINITY);
        let msg = format!("{err}");
        assert!(msg.contains("inf"), "missing value in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
