//! Per-model value types and pure conversion functions between them.
//!
//! Provides [`Rgb`] (8-bit channels), [`Srgb`] (normalized channels),
//! [`Hsl`] and [`Cmyk`]. All color-space math runs in `f64` on normalized
//! components; only [`Srgb::quantize`] produces 8-bit integers, and it
//! truncates rather than rounds.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// RGB color with normalized channels, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue in degrees, saturation and lightness nominally in [0, 1].
///
/// Hue is kept as written; it is reduced modulo 360 only when converting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Subtractive color with cyan, magenta, yellow and black (key) in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Rgb {
    /// Divides every channel by 255.
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: f64::from(self.r) / 255.0,
            g: f64::from(self.g) / 255.0,
            b: f64::from(self.b) / 255.0,
        }
    }
}

impl Srgb {
    /// Scales every channel by 255 and truncates toward zero.
    ///
    /// Values outside [0, 1] saturate at 0 or 255; NaN becomes 0.
    pub fn quantize(self) -> Rgb {
        Rgb {
            r: quantize_channel(self.r),
            g: quantize_channel(self.g),
            b: quantize_channel(self.b),
        }
    }

    fn max(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    fn min(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }
}

/// Converts a normalized channel to 8 bits, truncating.
pub fn quantize_channel(v: f64) -> u8 {
    // `as` saturates float-to-int casts and maps NaN to 0.
    (v * 255.0) as u8
}

/// Reduces a hue in degrees into [0, 360).
///
/// Returns `None` for NaN and infinities, which belong to no sextant.
pub fn normalize_hue(h: f64) -> Option<f64> {
    if !h.is_finite() {
        return None;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    Some(if wrapped >= 360.0 { 0.0 } else { wrapped })
}

/// Converts normalized RGB to HSL with the max/min/delta method.
///
/// Achromatic input (max == min) yields hue 0 and saturation 0. Hue is
/// always in [0, 360) for finite input.
pub fn srgb_to_hsl(c: Srgb) -> Hsl {
    let max = c.max();
    let min = c.min();
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let sector = if max == c.r {
        ((c.g - c.b) / delta).rem_euclid(6.0)
    } else if max == c.g {
        (c.b - c.r) / delta + 2.0
    } else {
        (c.r - c.g) / delta + 4.0
    };
    let h = normalize_hue(sector * 60.0).unwrap_or(0.0);

    // Only reachable with a nonzero delta for out-of-range channels.
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if denom == 0.0 { 0.0 } else { delta / denom };

    Hsl { h, s, l }
}

/// Converts HSL to normalized RGB via chroma and sextant selection.
///
/// The hue is reduced modulo 360 first. Returns
/// [`ColorError::NonFiniteHue`] when it still matches no sextant.
pub fn hsl_to_srgb(c: Hsl) -> Result<Srgb, ColorError> {
    let hue = normalize_hue(c.h).ok_or(ColorError::NonFiniteHue(c.h))?;
    Ok(sextant_to_srgb(hue, c.s, c.l))
}

/// `hue` must already be in [0, 360), as returned by [`normalize_hue`].
pub(crate) fn sextant_to_srgb(hue: f64, s: f64, l: f64) -> Srgb {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Srgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}

/// Converts normalized RGB to CMYK.
///
/// Pure black (black == 1) has no defined ink mix; cyan, magenta and
/// yellow are 0 there.
pub fn srgb_to_cmyk(c: Srgb) -> Cmyk {
    let k = 1.0 - c.max();
    let ink = 1.0 - k;
    if ink == 0.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k,
        };
    }
    Cmyk {
        c: (1.0 - c.r - k) / ink,
        m: (1.0 - c.g - k) / ink,
        y: (1.0 - c.b - k) / ink,
        k,
    }
}

/// Converts CMYK to normalized RGB.
pub fn cmyk_to_srgb(c: Cmyk) -> Srgb {
    Srgb {
        r: (1.0 - c.c) * (1.0 - c.k),
        g: (1.0 - c.m) * (1.0 - c.k),
        b: (1.0 - c.y) * (1.0 - c.k),
    }
}
