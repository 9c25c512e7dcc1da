//! Format templates for rendering a [`Color`] as text.
//!
//! A template is scanned once, left to right. At each position the longest
//! recognized token wins, so `Rd` (decimal red) is never split into `R`
//! (hex red) followed by a literal `d`. Anything that is not a token, braces
//! included, is copied through unchanged.
//!
//! | Token                       | Output                                   |
//! |-----------------------------|------------------------------------------|
//! | `A` `a`                     | alpha                                    |
//! | `R` `G` `B`                 | 8-bit channel as two uppercase hex digits |
//! | `Rd` `Gd` `Bd` (any case)   | 8-bit channel in decimal                 |
//! | `r` `g` `b`                 | normalized channel (`channel / 255`)     |
//! | `H` `S` `L` (any case)      | hue, saturation, lightness               |
//! | `C` `M` `Y` `K` (any case)  | cyan, magenta, yellow, black             |
//!
//! Floating-point values use Rust's shortest round-trip `Display` form
//! (`1`, `0.5`, `0.3333333333333333`).

use crate::color::{Color, Components};
use std::fmt::{self, Write};
use std::sync::LazyLock;

/// Template used by `Color`'s `Display` impl.
pub const DEFAULT_TEMPLATE: &str = "#RGBA";

static DEFAULT: LazyLock<Template> = LazyLock::new(|| Template::parse(DEFAULT_TEMPLATE));

/// A color component a template token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Alpha,
    HexRed,
    HexGreen,
    HexBlue,
    DecRed,
    DecGreen,
    DecBlue,
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl Field {
    fn write_to<W: Write>(self, parts: &Components, out: &mut W) -> fmt::Result {
        match self {
            Field::Alpha => write!(out, "{}", parts.alpha),
            Field::HexRed => write!(out, "{:02X}", parts.r),
            Field::HexGreen => write!(out, "{:02X}", parts.g),
            Field::HexBlue => write!(out, "{:02X}", parts.b),
            Field::DecRed => write!(out, "{}", parts.r),
            Field::DecGreen => write!(out, "{}", parts.g),
            Field::DecBlue => write!(out, "{}", parts.b),
            Field::Red => write!(out, "{}", parts.red),
            Field::Green => write!(out, "{}", parts.green),
            Field::Blue => write!(out, "{}", parts.blue),
            Field::Hue => write!(out, "{}", parts.h),
            Field::Saturation => write!(out, "{}", parts.s),
            Field::Lightness => write!(out, "{}", parts.l),
            Field::Cyan => write!(out, "{}", parts.c),
            Field::Magenta => write!(out, "{}", parts.m),
            Field::Yellow => write!(out, "{}", parts.y),
            Field::Black => write!(out, "{}", parts.k),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Field(Field),
}

/// A parsed format template, reusable across colors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pieces: Vec<Piece>,
}

/// Matches a one-character token, given whether a `d`/`D` follows.
fn token(c: char, decimal_suffix: bool) -> Option<(Field, usize)> {
    let field = match (c, decimal_suffix) {
        ('R' | 'r', true) => return Some((Field::DecRed, 2)),
        ('G' | 'g', true) => return Some((Field::DecGreen, 2)),
        ('B' | 'b', true) => return Some((Field::DecBlue, 2)),
        ('R', _) => Field::HexRed,
        ('G', _) => Field::HexGreen,
        ('B', _) => Field::HexBlue,
        ('r', _) => Field::Red,
        ('g', _) => Field::Green,
        ('b', _) => Field::Blue,
        ('A' | 'a', _) => Field::Alpha,
        ('H' | 'h', _) => Field::Hue,
        ('S' | 's', _) => Field::Saturation,
        ('L' | 'l', _) => Field::Lightness,
        ('C' | 'c', _) => Field::Cyan,
        ('M' | 'm', _) => Field::Magenta,
        ('Y' | 'y', _) => Field::Yellow,
        ('K' | 'k', _) => Field::Black,
        _ => return None,
    };
    Some((field, 1))
}

impl Template {
    /// Scans `template` into literal text and fields.
    ///
    /// An empty or whitespace-only template renders as an empty string.
    pub fn parse(template: &str) -> Self {
        let mut pieces = Vec::new();
        if template.trim().is_empty() {
            return Self { pieces };
        }

        let mut text = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            let decimal_suffix = matches!(chars.peek(), Some('d' | 'D'));
            match token(c, decimal_suffix) {
                Some((field, width)) => {
                    if width == 2 {
                        chars.next();
                    }
                    if !text.is_empty() {
                        pieces.push(Piece::Text(std::mem::take(&mut text)));
                    }
                    pieces.push(Piece::Field(field));
                }
                None => text.push(c),
            }
        }
        if !text.is_empty() {
            pieces.push(Piece::Text(text));
        }
        Self { pieces }
    }

    /// Fields referenced by the template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.pieces.iter().filter_map(|p| match p {
            Piece::Field(f) => Some(*f),
            Piece::Text(_) => None,
        })
    }

    /// Writes the template for `color` into `out`.
    pub fn write_to<W: Write>(&self, color: &Color, out: &mut W) -> fmt::Result {
        let parts = color.components();
        for piece in &self.pieces {
            match piece {
                Piece::Text(s) => out.write_str(s)?,
                Piece::Field(f) => f.write_to(&parts, out)?,
            }
        }
        Ok(())
    }

    /// Renders the template for `color`.
    pub fn render(&self, color: &Color) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(color, &mut out);
        out
    }
}

impl Color {
    /// Renders this color through a format template; see the module docs
    /// for the token table.
    pub fn format(&self, template: &str) -> String {
        Template::parse(template).render(self)
    }
}

impl fmt::Display for Color {
    /// Equivalent to `format("#RGBA")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DEFAULT.write_to(self, f)
    }
}
