//! Style lookup, construction and rendering errors.

use std::fmt;

use thiserror::Error;

use crate::render::RenderKind;

/// A channel of an RGB color, used to report which component was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// The dynamic constructors a register may bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicCall {
    Eightbit,
    Rgb,
}

impl fmt::Display for DynamicCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DynamicCall::Eightbit => "eightbit",
            DynamicCall::Rgb => "rgb",
        })
    }
}

/// Error returned when a style cannot be looked up, built or rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// No style is registered under the requested name.
    #[error("register '{register}' has no style named '{name}'")]
    UnknownStyleName { register: String, name: String },

    /// A style uses a render kind the register cannot format.
    #[error("register '{register}' has no formatter for render type '{kind}'")]
    MissingFormatter { register: String, kind: RenderKind },

    /// An 8-bit palette index outside 0-255.
    #[error("8-bit color index {value} is out of range 0-255")]
    InvalidColorIndex { value: i64 },

    /// An RGB channel outside 0-255.
    #[error("{channel} component {value} is out of range 0-255")]
    InvalidColorComponent { channel: Channel, value: i64 },

    /// The register does not bind the requested dynamic constructor.
    #[error("register '{register}' has no {call} constructor")]
    NoDynamicCall { register: String, call: DynamicCall },
}

/// Checks an 8-bit palette index.
pub(crate) fn color_index(value: i64) -> Result<u8, StyleError> {
    u8::try_from(value).map_err(|_| StyleError::InvalidColorIndex { value })
}

/// Checks one RGB channel.
pub(crate) fn color_component(channel: Channel, value: i64) -> Result<u8, StyleError> {
    u8::try_from(value).map_err(|_| StyleError::InvalidColorComponent { channel, value })
}
