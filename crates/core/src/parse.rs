//! Hex string parsing and output for [`Color`].
//!
//! Accepted input is `RRGGBB` or `RRGGBBAA` (case insensitive), optionally
//! prefixed with `#`. The whole string is validated against one pattern
//! before any digit is read, so malformed input is never partially parsed.
//! Serde support uses the same hex form.

use crate::color::Color;
use crate::error::ColorError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#)?[0-9a-fA-F]{6}([0-9a-fA-F]{2})?$").expect("hex color pattern compiles")
});

impl Color {
    /// Parses `#RRGGBB`, `#RRGGBBAA`, `RRGGBB` or `RRGGBBAA`.
    ///
    /// The alpha byte, when present, is divided by 255; otherwise alpha is 1.
    /// Returns `ColorError::Format` for anything else.
    pub fn parse(text: &str) -> Result<Color, ColorError> {
        if !HEX_COLOR.is_match(text) {
            return Err(ColorError::Format(text.to_string()));
        }
        let hex = text.strip_prefix('#').unwrap_or(text);
        let byte = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16)
                .map_err(|_| ColorError::Format(text.to_string()))
        };

        let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
        let alpha = if hex.len() == 8 {
            f64::from(byte(6)?) / 255.0
        } else {
            1.0
        };
        Ok(Color::from_rgba(r, g, b, alpha))
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when alpha is not exactly 1.
    ///
    /// The alpha byte is `alpha` clamped to [0, 1], scaled by 255 and rounded.
    pub fn to_hex(&self) -> String {
        let rgb = self.rgb();
        let hex = format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b);
        if self.alpha() == 1.0 {
            hex
        } else {
            let a = (self.alpha().clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("{hex}{a:02X}")
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::parse(value)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;

    #[test]
    fn parses_six_digits_with_hash() {
        let c = Color::parse("#FF0000").unwrap();
        assert_eq!(c.rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn parses_eight_digits_without_hash() {
        let c = Color::parse("ff0000ff").unwrap();
        assert_eq!(c.rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn alpha_byte_is_divided_by_255() {
        let c = Color::parse("#00000080").unwrap();
        assert_eq!(c.alpha(), 128.0 / 255.0);
    }

    #[test]
    fn every_byte_lands_in_its_own_channel() {
        let c = Color::parse("#12aB3c").unwrap();
        assert_eq!(c.rgb(), Rgb { r: 0x12, g: 0xAB, b: 0x3C });
    }

    #[test]
    fn rejects_four_digits() {
        assert_eq!(
            Color::parse("FF00"),
            Err(ColorError::Format("FF00".to_string()))
        );
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(matches!(
            Color::parse("GG0000"),
            Err(ColorError::Format(_))
        ));
    }

    #[test]
    fn rejects_malformed_inputs_without_truncating() {
        for bad in [
            "",
            "#",
            "##ff0000",
            "ff0000#",
            "#ff00000",
            "#ff0000f",
            "#ff0000ff00",
            " ff0000",
            "ff0000\n",
            "#ff 000",
            "0xff0000",
        ] {
            assert!(Color::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn from_str_and_try_from_agree_with_parse() {
        let a: Color = "#336699".parse().unwrap();
        let b = Color::try_from("336699").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Color::parse("#336699").unwrap());
    }

    #[test]
    fn to_hex_omits_opaque_alpha() {
        assert_eq!(Color::from_rgb(255, 0, 16).to_hex(), "#FF0010");
    }

    #[test]
    fn to_hex_appends_rounded_alpha_byte() {
        assert_eq!(Color::from_rgba(0, 0, 0, 0.5).to_hex(), "#00000080");
        assert_eq!(Color::from_rgba(0, 0, 0, 0.0).to_hex(), "#00000000");
        assert_eq!(Color::from_rgba(0, 0, 0, 7.0).to_hex(), "#000000FF");
    }

    #[test]
    fn to_hex_of_hsl_color_uses_derived_channels() {
        let c = Color::from_hsl(240.0, 1.0, 0.5).unwrap();
        assert_eq!(c.to_hex(), "#0000FF");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_rgba(1, 2, 3, 0.2)).unwrap();
        assert_eq!(json, "\"#01020333\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Color = serde_json::from_str("\"#0a0B0c\"").unwrap();
        assert_eq!(c.rgb(), Rgb { r: 10, g: 11, b: 12 });
    }

    #[test]
    fn deserialize_rejects_invalid_hex() {
        let result: Result<Color, _> = serde_json::from_str("\"#zzzzzz\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("zzzzzz"), "unexpected error: {err}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_output_parses_back_to_same_channels(
                r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>(),
            ) {
                let c = Color::from_rgba(r, g, b, f64::from(a) / 255.0);
                let back = Color::parse(&c.to_hex()).unwrap();
                prop_assert_eq!(back.rgb(), c.rgb());
                prop_assert_eq!(back.alpha(), c.alpha());
            }

            #[test]
            fn arbitrary_text_never_panics(s in "\\PC{0,12}") {
                let _ = Color::parse(&s);
            }
        }
    }
}
