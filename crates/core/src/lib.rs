#![deny(unsafe_code)]
//! A color value readable and writable as RGB, HSL or CMYK.
//!
//! [`Color`] keeps its three models consistent: whichever model was written
//! last is authoritative and the other two are derived from it. Alpha is an
//! independent channel. Colors parse from hex strings (`#RRGGBB`,
//! `#RRGGBBAA`) and render through a small [`Template`] language.
//!
//! ```
//! use tricolor_core::Color;
//!
//! let mut c = Color::parse("#FF0000").unwrap();
//! c.set_h(120.0).unwrap();
//! assert_eq!(c.format("Rd,Gd,Bd"), "0,255,0");
//! assert_eq!(c.to_string(), "#00FF001");
//! ```

pub mod color;
pub mod error;
pub mod model;
pub mod parse;
pub mod template;

pub use color::{Color, ColorModel, Components};
pub use error::ColorError;
pub use model::{Cmyk, Hsl, Rgb, Srgb};
pub use template::{Field, Template, DEFAULT_TEMPLATE};
