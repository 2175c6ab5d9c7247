//! A named collection of registers and the style expression syntax.
//!
//! # Expressions
//!
//! An expression is one or more terms joined by `+`. Each term names a
//! register and a value:
//!
//! | Term             | Meaning                                  |
//! |------------------|------------------------------------------|
//! | `fg.red`         | named style                              |
//! | `bg.196`         | 8-bit palette index                      |
//! | `fg.255,150,50`  | RGB triple                               |
//! | `ul.#ff9632`     | RGB triple in hex                        |
//!
//! Every term is rendered by its own register and the results are
//! concatenated in order, so `fg.88+bg.88` yields a foreground and a
//! background sequence even though both use the same 8-bit index.

use std::collections::BTreeMap;

use thiserror::Error;

use super::register::Register;
use crate::style::{Style, StyleError};

/// Error returned when a style expression cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("empty style expression")]
    Empty,

    #[error("term '{term}' must have the form <register>.<value>")]
    MissingRegister { term: String },

    #[error("unknown register '{name}'")]
    UnknownRegister { name: String },

    #[error("term '{term}' has an invalid color value")]
    InvalidValue { term: String },

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// A parsed term value.
enum Value<'a> {
    Name(&'a str),
    Eightbit(i64),
    Rgb(i64, i64, i64),
}

fn parse_value<'a>(term: &str, value: &'a str) -> Result<Value<'a>, ExprError> {
    let invalid = || ExprError::InvalidValue {
        term: term.to_string(),
    };

    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .map(i64::from)
                .ok_or_else(invalid)
        };
        return Ok(Value::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }

    let starts_numeric = value
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-');
    if !starts_numeric {
        return Ok(Value::Name(value));
    }

    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<i64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    match numbers.as_slice() {
        [index] => Ok(Value::Eightbit(*index)),
        [r, g, b] => Ok(Value::Rgb(*r, *g, *b)),
        _ => Err(invalid()),
    }
}

/// Registers addressable by name, with the five presets by default.
///
/// # Example
///
/// ```rust
/// use stylereg::RegisterSet;
///
/// let set = RegisterSet::new();
/// assert_eq!(set.resolve("fg.red+ef.bold").unwrap(), "\x1b[31m\x1b[1m");
/// assert_eq!(set.resolve("bg.255,0,0").unwrap(), "\x1b[48;2;255;0;0m");
/// ```
#[derive(Debug, Clone)]
pub struct RegisterSet {
    registers: BTreeMap<String, Register>,
}

impl RegisterSet {
    /// Creates a set holding fresh copies of the presets `ef`, `fg`, `bg`, `ul`, `rs`.
    pub fn new() -> Self {
        Self::empty()
            .add(Register::ef())
            .add(Register::fg())
            .add(Register::bg())
            .add(Register::ul())
            .add(Register::rs())
    }

    pub fn empty() -> Self {
        Self {
            registers: BTreeMap::new(),
        }
    }

    /// Adds a register under its own name, replacing one with the same name.
    #[must_use]
    pub fn add(mut self, register: Register) -> Self {
        self.insert(register);
        self
    }

    pub fn insert(&mut self, register: Register) {
        self.registers
            .insert(register.name().to_string(), register);
    }

    pub fn get(&self, name: &str) -> Option<&Register> {
        self.registers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Register> {
        self.registers.get_mut(name)
    }

    /// Returns register names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registers.keys().map(String::as_str)
    }

    /// Mutes every register; see [`Register::mute`].
    pub fn mute(&mut self) {
        self.registers.values_mut().for_each(Register::mute);
    }

    pub fn unmute(&mut self) {
        self.registers.values_mut().for_each(Register::unmute);
    }

    /// Resolves one term to its register and style.
    pub fn term(&self, term: &str) -> Result<(&Register, Style), ExprError> {
        let (reg_name, value) = term.split_once('.').ok_or_else(|| ExprError::MissingRegister {
            term: term.to_string(),
        })?;
        let register = self
            .get(reg_name)
            .ok_or_else(|| ExprError::UnknownRegister {
                name: reg_name.to_string(),
            })?;
        let style = match parse_value(term, value)? {
            Value::Name(name) => register.get(name)?.clone(),
            Value::Eightbit(index) => register.eightbit(index)?,
            Value::Rgb(r, g, b) => register.rgb(r, g, b)?,
        };
        Ok((register, style))
    }

    /// Renders a `+`-joined style expression.
    ///
    /// # Errors
    ///
    /// Returns an [`ExprError`] for malformed terms, unknown registers, or any
    /// [`StyleError`] raised by the registers themselves.
    pub fn resolve(&self, expr: &str) -> Result<String, ExprError> {
        let terms: Vec<&str> = expr
            .split('+')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect();
        if terms.is_empty() {
            return Err(ExprError::Empty);
        }

        terms.into_iter().try_fold(String::new(), |mut out, term| {
            let (register, style) = self.term(term)?;
            out.push_str(&register.render(&style)?);
            Ok(out)
        })
    }
}

impl Default for RegisterSet {
    fn default() -> Self {
        Self::new()
    }
}
