//! Registers: named style catalogs that know how to render their styles.
//!
//! - [`Register`]: named styles, a render table and dynamic color constructors
//! - the presets [`Register::ef`], [`Register::fg`], [`Register::bg`],
//!   [`Register::ul`] and [`Register::rs`]
//! - [`RegisterConfig`]: registers declared in YAML or JSON
//! - [`RegisterSet`]: registers addressed by name through style expressions

mod config;
mod presets;
#[allow(clippy::module_inception)]
mod register;
mod set;

pub use config::{ConfigError, RegisterConfig, RuleConfig, StyleConfig};
pub use presets::PRESET_NAMES;
pub use register::{EightbitCall, Register, RgbCall, RESET_STYLE};
pub use set::{ExprError, RegisterSet};
