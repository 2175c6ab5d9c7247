//! Render types and their dispatch to escape sequence formatters.
//!
//! - [`RenderType`]: a numeric styling parameter set (SGR code, 8-bit index, RGB)
//! - [`RenderKind`]: the tag a [`RenderTable`] dispatches on
//! - [`RenderTable`]: a register's kind → formatter map
//! - [`func`]: the built-in formatters

pub mod func;
mod kind;
mod table;

pub use kind::{RenderKind, RenderType};
pub use table::{RenderFn, RenderTable};
