//! The [`Color`] value type.
//!
//! A `Color` stores the model it was last written through (RGB, HSL or
//! CMYK) together with an independent alpha channel. The other two models
//! are derived on read, so every observable view always describes the same
//! color. Writing any component makes that component's model authoritative.

use crate::error::ColorError;
use crate::model::{
    cmyk_to_srgb, normalize_hue, quantize_channel, sextant_to_srgb, srgb_to_cmyk, srgb_to_hsl, Cmyk,
    Hsl, Rgb, Srgb,
};
use serde::Serialize;
use tracing::trace;

/// The color model a [`Color`] was last written through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Hsl,
    Cmyk,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Model {
    Rgb(Rgb),
    /// `hue` is `hsl.h` reduced into [0, 360); `srgb` caches the
    /// unquantized conversion of `hsl`.
    Hsl {
        hsl: Hsl,
        hue: f64,
        srgb: Srgb,
    },
    Cmyk(Cmyk),
}

impl Model {
    /// Builds the HSL variant, rejecting hues that fall in no sextant.
    fn from_hsl(hsl: Hsl) -> Result<Self, ColorError> {
        let hue = normalize_hue(hsl.h).ok_or(ColorError::NonFiniteHue(hsl.h))?;
        Ok(Self::from_hsl_in_range(hsl, hue))
    }

    fn from_hsl_in_range(hsl: Hsl, hue: f64) -> Self {
        Model::Hsl {
            hsl,
            hue,
            srgb: sextant_to_srgb(hue, hsl.s, hsl.l),
        }
    }

    fn kind(&self) -> ColorModel {
        match self {
            Model::Rgb(_) => ColorModel::Rgb,
            Model::Hsl { .. } => ColorModel::Hsl,
            Model::Cmyk(_) => ColorModel::Cmyk,
        }
    }
}

/// A color readable and writable as RGB, HSL or CMYK, plus alpha.
///
/// Equality compares the stored representation: two colors built through
/// different models are not equal even when they read back the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    model: Model,
    alpha: f64,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}

impl Color {
    // -- construction --

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit channels and an alpha in [0, 1].
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            model: Model::Rgb(Rgb { r, g, b }),
            alpha,
        }
    }

    /// Creates an opaque color from hue (degrees), saturation and lightness.
    ///
    /// Values are not range-checked. Returns [`ColorError::NonFiniteHue`] if
    /// `h` is NaN or infinite.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Like [`Color::from_hsl`] with an explicit alpha.
    pub fn from_hsla(h: f64, s: f64, l: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(Self {
            model: Model::from_hsl(Hsl { h, s, l })?,
            alpha,
        })
    }

    /// Creates an opaque color from cyan, magenta, yellow and black.
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::from_cmyka(c, m, y, k, 1.0)
    }

    /// Like [`Color::from_cmyk`] with an explicit alpha.
    pub fn from_cmyka(c: f64, m: f64, y: f64, k: f64, alpha: f64) -> Self {
        Self {
            model: Model::Cmyk(Cmyk { c, m, y, k }),
            alpha,
        }
    }

    /// Returns the model that was written last.
    pub fn model(&self) -> ColorModel {
        self.model.kind()
    }

    // -- whole-model views --

    /// Normalized RGB before quantization. The other views derive from
    /// this so that truncation error does not compound; it can differ from
    /// [`Color::red`] and friends, which read the quantized channels.
    pub fn srgb(&self) -> Srgb {
        match self.model {
            Model::Rgb(rgb) => rgb.to_srgb(),
            Model::Hsl { srgb, .. } => srgb,
            Model::Cmyk(cmyk) => cmyk_to_srgb(cmyk),
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self.model {
            Model::Rgb(rgb) => rgb,
            _ => self.srgb().quantize(),
        }
    }

    pub fn hsl(&self) -> Hsl {
        match self.model {
            Model::Hsl { hsl, .. } => hsl,
            _ => srgb_to_hsl(self.srgb()),
        }
    }

    pub fn cmyk(&self) -> Cmyk {
        match self.model {
            Model::Cmyk(cmyk) => cmyk,
            _ => srgb_to_cmyk(self.srgb()),
        }
    }

    // -- component accessors --

    pub fn r(&self) -> u8 {
        self.rgb().r
    }

    pub fn g(&self) -> u8 {
        self.rgb().g
    }

    pub fn b(&self) -> u8 {
        self.rgb().b
    }

    /// Red channel as `r / 255`.
    pub fn red(&self) -> f64 {
        f64::from(self.r()) / 255.0
    }

    /// Green channel as `g / 255`.
    pub fn green(&self) -> f64 {
        f64::from(self.g()) / 255.0
    }

    /// Blue channel as `b / 255`.
    pub fn blue(&self) -> f64 {
        f64::from(self.b()) / 255.0
    }

    pub fn h(&self) -> f64 {
        self.hsl().h
    }

    pub fn s(&self) -> f64 {
        self.hsl().s
    }

    pub fn l(&self) -> f64 {
        self.hsl().l
    }

    pub fn c(&self) -> f64 {
        self.cmyk().c
    }

    pub fn m(&self) -> f64 {
        self.cmyk().m
    }

    pub fn y(&self) -> f64 {
        self.cmyk().y
    }

    pub fn k(&self) -> f64 {
        self.cmyk().k
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    // -- mutators --
    //
    // Each setter makes its own model authoritative. Writing the value a
    // component already reads leaves the color untouched.

    fn switch_to(&mut self, model: Model) {
        if model.kind() != self.model.kind() {
            trace!(from = ?self.model.kind(), to = ?model.kind(), "authoritative model changed");
        }
        self.model = model;
    }

    fn write_rgb(&mut self, edit: impl FnOnce(&mut Rgb)) {
        let mut rgb = self.rgb();
        edit(&mut rgb);
        self.switch_to(Model::Rgb(rgb));
    }

    fn write_cmyk(&mut self, edit: impl FnOnce(&mut Cmyk)) {
        let mut cmyk = self.cmyk();
        edit(&mut cmyk);
        self.switch_to(Model::Cmyk(cmyk));
    }

    /// Current HSL along with its hue reduced into [0, 360).
    fn hsl_in_range(&self) -> (Hsl, f64) {
        match self.model {
            Model::Hsl { hsl, hue, .. } => (hsl, hue),
            // Derived hues are already in range.
            _ => {
                let hsl = self.hsl();
                (hsl, hsl.h)
            }
        }
    }

    /// Rewrites saturation or lightness while keeping the current hue.
    fn write_hsl_keeping_hue(&mut self, edit: impl FnOnce(&mut Hsl)) {
        let (mut hsl, hue) = self.hsl_in_range();
        edit(&mut hsl);
        self.switch_to(Model::from_hsl_in_range(hsl, hue));
    }

    pub fn set_r(&mut self, r: u8) {
        if self.r() != r {
            self.write_rgb(|c| c.r = r);
        }
    }

    pub fn set_g(&mut self, g: u8) {
        if self.g() != g {
            self.write_rgb(|c| c.g = g);
        }
    }

    pub fn set_b(&mut self, b: u8) {
        if self.b() != b {
            self.write_rgb(|c| c.b = b);
        }
    }

    /// Sets the red channel from a normalized value (scaled by 255, truncated).
    pub fn set_red(&mut self, red: f64) {
        self.set_r(quantize_channel(red));
    }

    /// Sets the green channel from a normalized value (scaled by 255, truncated).
    pub fn set_green(&mut self, green: f64) {
        self.set_g(quantize_channel(green));
    }

    /// Sets the blue channel from a normalized value (scaled by 255, truncated).
    pub fn set_blue(&mut self, blue: f64) {
        self.set_b(quantize_channel(blue));
    }

    /// Sets the hue in degrees. Any finite value is accepted and reduced
    /// modulo 360 when converting; NaN and infinities are rejected and leave
    /// the color unchanged.
    pub fn set_h(&mut self, h: f64) -> Result<(), ColorError> {
        if self.h() == h {
            return Ok(());
        }
        let hsl = Hsl { h, ..self.hsl() };
        self.switch_to(Model::from_hsl(hsl)?);
        Ok(())
    }

    pub fn set_s(&mut self, s: f64) {
        if self.s() != s {
            self.write_hsl_keeping_hue(|c| c.s = s);
        }
    }

    pub fn set_l(&mut self, l: f64) {
        if self.l() != l {
            self.write_hsl_keeping_hue(|c| c.l = l);
        }
    }

    pub fn set_c(&mut self, c: f64) {
        if self.c() != c {
            self.write_cmyk(|v| v.c = c);
        }
    }

    pub fn set_m(&mut self, m: f64) {
        if self.m() != m {
            self.write_cmyk(|v| v.m = m);
        }
    }

    pub fn set_y(&mut self, y: f64) {
        if self.y() != y {
            self.write_cmyk(|v| v.y = y);
        }
    }

    pub fn set_k(&mut self, k: f64) {
        if self.k() != k {
            self.write_cmyk(|v| v.k = k);
        }
    }

    /// Alpha never affects, nor is affected by, the color models.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Snapshot of every component, in all three models.
    pub fn components(&self) -> Components {
        let rgb = self.rgb();
        let hsl = self.hsl();
        let cmyk = self.cmyk();
        Components {
            model: self.model(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            red: f64::from(rgb.r) / 255.0,
            green: f64::from(rgb.g) / 255.0,
            blue: f64::from(rgb.b) / 255.0,
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
            c: cmyk.c,
            m: cmyk.m,
            y: cmyk.y,
            k: cmyk.k,
            alpha: self.alpha,
        }
    }
}

/// Every readable component of a [`Color`] at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Components {
    pub model: ColorModel,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
    pub alpha: f64,
}
