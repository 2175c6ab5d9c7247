//! Style values and their errors.
//!
//! - [`Style`]: an ordered list of render types that renders to one escape string
//! - [`StyleError`]: lookup, construction and rendering failures

mod error;
#[allow(clippy::module_inception)]
mod style;

pub(crate) use error::{color_component, color_index};
pub use error::{Channel, DynamicCall, StyleError};
pub use style::Style;
