//! # stylereg - registers of named ANSI styles
//!
//! `stylereg` builds ANSI escape sequences for text effects, foreground and
//! background colors, and underline styles and colors. It only produces
//! strings; writing them to a terminal is up to the caller.
//!
//! ## Concepts
//!
//! - A [`RenderType`] is a numeric parameter set: an SGR code, an SGR code with
//!   sub-arguments, an 8-bit palette index or an RGB triple.
//! - A [`Style`] is an ordered list of render types. Styles combine by
//!   concatenation (`a.combine(&b)` or `&a + &b`).
//! - A [`Register`] holds named styles and a [`RenderTable`] that turns each
//!   render type into an escape sequence. The table is per register, which
//!   is how the same `Eightbit(196)` becomes a foreground color in [`FG`]
//!   and a background color in [`BG`].
//!
//! ## Quick Start
//!
//! ```rust
//! use stylereg::{BG, EF, FG, RS};
//!
//! let bold = EF.sequence("bold").unwrap();
//! let red = FG.sequence("red").unwrap();
//! let reset = RS.sequence("all").unwrap();
//! assert_eq!(format!("{red}{bold}alert{reset}"), "\x1b[31m\x1b[1malert\x1b[0m");
//!
//! // Colors outside the named set
//! let orange = FG.rgb(255, 150, 50).unwrap();
//! assert_eq!(FG.render(&orange).unwrap(), "\x1b[38;2;255;150;50m");
//!
//! // Same index, different register, different sequence
//! let fg = FG.render(&FG.eightbit(196).unwrap()).unwrap();
//! let bg = BG.render(&BG.eightbit(196).unwrap()).unwrap();
//! assert_ne!(fg, bg);
//! ```
//!
//! ## Customizing
//!
//! The statics are read-only. Clone a preset (or build one with
//! [`Register::fg`] and friends) to add styles or swap formatters:
//!
//! ```rust
//! use stylereg::{RenderType, FG};
//!
//! let mut fg = FG.clone();
//! fg.set("orange", RenderType::Rgb(255, 150, 50)).unwrap();
//! fg.alias("warning", "orange").unwrap();
//! assert_eq!(fg.sequence("warning").unwrap(), "\x1b[38;2;255;150;50m");
//! ```
//!
//! Registers can also be declared in YAML or JSON, see [`RegisterConfig`].

use once_cell::sync::Lazy;

pub mod register;
pub mod render;
pub mod style;

pub use register::{
    ConfigError, ExprError, Register, RegisterConfig, RegisterSet, PRESET_NAMES,
};
pub use render::{RenderKind, RenderTable, RenderType};
pub use style::{Channel, DynamicCall, Style, StyleError};

/// Effects: `bold`, `dim`, `italic`, `underl`, `blink`, `inverse`, `hidden`, `strike`, `rs`.
pub static EF: Lazy<Register> = Lazy::new(Register::ef);

/// Foreground colors, plus `eightbit` and `rgb` constructors.
pub static FG: Lazy<Register> = Lazy::new(Register::fg);

/// Background colors, plus `eightbit` and `rgb` constructors.
pub static BG: Lazy<Register> = Lazy::new(Register::bg);

/// Underline styles and colors, plus `eightbit` and `rgb` constructors.
pub static UL: Lazy<Register> = Lazy::new(Register::ul);

/// Resets for single effects, colors, or everything (`all`).
pub static RS: Lazy<Register> = Lazy::new(Register::rs);
