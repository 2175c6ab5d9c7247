//! The [`Register`]: named styles plus the table that renders them.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::render::{RenderKind, RenderTable, RenderType};
use crate::style::{color_component, color_index, Channel, DynamicCall, Style, StyleError};

/// Builds the render type for [`Register::eightbit`].
pub type EightbitCall = fn(u8) -> RenderType;

/// Builds the render type for [`Register::rgb`].
pub type RgbCall = fn(u8, u8, u8) -> RenderType;

/// Name of the style [`Register::paint`] appends after the text.
pub const RESET_STYLE: &str = "rs";

/// A named, extensible catalog of styles plus the formatters to render them.
///
/// Registers are open: styles and formatters can be added or replaced after
/// construction. Every stored style is checked against the register's
/// [`RenderTable`] when it is stored, so a style the register cannot render
/// is rejected up front instead of producing an empty string later.
///
/// Lookups are deterministic: [`Register::names`] and [`Register::to_map`]
/// enumerate in sorted name order.
///
/// # Thread Safety
///
/// Registers are `Send + Sync`. Mutation requires `&mut self`; share a
/// register behind a lock if it must change while other threads read it.
///
/// # Example
///
/// ```rust
/// use stylereg::render::func;
/// use stylereg::{Register, RenderKind, RenderType};
///
/// let mut reg = Register::new("accent");
/// reg.set_renderfunc(RenderKind::Rgb, func::rgb_fg);
/// reg.set_rgb_call(RenderType::Rgb);
/// reg.set("orange", RenderType::Rgb(255, 150, 50)).unwrap();
///
/// assert_eq!(reg.sequence("orange").unwrap(), "\x1b[38;2;255;150;50m");
/// assert!(reg.get("neon").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Register {
    name: String,
    styles: BTreeMap<String, Style>,
    table: RenderTable,
    eightbit_call: Option<EightbitCall>,
    rgb_call: Option<RgbCall>,
    muted: bool,
}

impl Register {
    /// Creates an empty register with no formatters and no dynamic calls.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            table: RenderTable::new(name.clone()),
            name,
            styles: BTreeMap::new(),
            eightbit_call: None,
            rgb_call: None,
            muted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the register under a new name. Styles and formatters are kept.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.table.set_owner(self.name.clone());
        self
    }

    pub fn table(&self) -> &RenderTable {
        &self.table
    }

    /// Registers the formatter for a render kind, replacing any previous one.
    pub fn set_renderfunc<F>(&mut self, kind: RenderKind, func: F)
    where
        F: Fn(&[u32]) -> String + Send + Sync + 'static,
    {
        let kind_name = kind.to_string();
        if self.table.set(kind, func) {
            debug!(register = %self.name, kind = %kind_name, "replaced formatter");
        } else {
            debug!(register = %self.name, kind = %kind_name, "registered formatter");
        }
    }

    /// Binds the constructor used by [`Register::eightbit`].
    pub fn set_eightbit_call(&mut self, call: EightbitCall) {
        debug!(register = %self.name, "bound eightbit constructor");
        self.eightbit_call = Some(call);
    }

    /// Binds the constructor used by [`Register::rgb`].
    pub fn set_rgb_call(&mut self, call: RgbCall) {
        debug!(register = %self.name, "bound rgb constructor");
        self.rgb_call = Some(call);
    }

    /// Stores `style` under `name`, replacing any existing style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingFormatter`] if the style uses a render
    /// kind this register has no formatter for. The register is unchanged.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        style: impl Into<Style>,
    ) -> Result<(), StyleError> {
        let name = name.into();
        let style = style.into();
        style.check(&self.table)?;
        self.insert(name, style);
        Ok(())
    }

    /// Stores an exact copy of the style named `target` under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyleName`] if `target` does not exist.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> Result<(), StyleError> {
        let style = self.get(target)?.clone();
        let alias = alias.into();
        debug!(register = %self.name, alias = %alias, to = %target, "registered alias");
        self.insert(alias, style);
        Ok(())
    }

    pub(crate) fn insert(&mut self, name: String, style: Style) {
        if self.styles.insert(name.clone(), style).is_some() {
            debug!(register = %self.name, style = %name, "replaced style");
        }
    }

    /// Returns the style bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyleName`] if no such style exists.
    pub fn get(&self, name: &str) -> Result<&Style, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::UnknownStyleName {
                register: self.name.clone(),
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Returns `(name, style)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Checks that every stored style can be rendered by this register.
    ///
    /// [`Register::set`] already enforces this; replacing a formatter cannot
    /// remove one, so this mainly guards registers assembled from parts.
    pub fn validate(&self) -> Result<(), StyleError> {
        self.styles
            .values()
            .try_for_each(|style| style.check(&self.table))
    }

    /// Renders `style` through this register's table.
    ///
    /// A muted register checks the style as usual but renders it as `""`.
    pub fn render(&self, style: &Style) -> Result<String, StyleError> {
        if self.muted {
            style.check(&self.table)?;
            return Ok(String::new());
        }
        style.render(&self.table)
    }

    /// Looks up `name` and renders it.
    pub fn sequence(&self, name: &str) -> Result<String, StyleError> {
        self.render(self.get(name)?)
    }

    /// Wraps `text` in the named style, followed by this register's
    /// [`RESET_STYLE`] when it has one.
    ///
    /// ```rust
    /// use stylereg::FG;
    ///
    /// assert_eq!(FG.paint("red", "hi").unwrap(), "\x1b[31mhi\x1b[39m");
    /// ```
    pub fn paint(&self, name: &str, text: &str) -> Result<String, StyleError> {
        let open = self.sequence(name)?;
        let close = match self.styles.get(RESET_STYLE) {
            Some(reset) => self.render(reset)?,
            None => String::new(),
        };
        Ok(format!("{open}{text}{close}"))
    }

    /// Builds a one-rule style for an 8-bit palette index.
    ///
    /// # Errors
    ///
    /// - [`StyleError::InvalidColorIndex`] if `index` is outside 0-255
    /// - [`StyleError::NoDynamicCall`] if no eightbit constructor is bound
    /// - [`StyleError::MissingFormatter`] if the bound constructor builds a
    ///   kind this register cannot format
    pub fn eightbit(&self, index: i64) -> Result<Style, StyleError> {
        let index = color_index(index)?;
        let call = self.eightbit_call.ok_or_else(|| StyleError::NoDynamicCall {
            register: self.name.clone(),
            call: DynamicCall::Eightbit,
        })?;
        self.checked(call(index))
    }

    /// Builds a one-rule style for a 24-bit color.
    ///
    /// # Errors
    ///
    /// - [`StyleError::InvalidColorComponent`] naming the first channel
    ///   outside 0-255
    /// - [`StyleError::NoDynamicCall`] if no rgb constructor is bound
    /// - [`StyleError::MissingFormatter`] as for [`Register::eightbit`]
    pub fn rgb(&self, r: i64, g: i64, b: i64) -> Result<Style, StyleError> {
        let r = color_component(Channel::Red, r)?;
        let g = color_component(Channel::Green, g)?;
        let b = color_component(Channel::Blue, b)?;
        let call = self.rgb_call.ok_or_else(|| StyleError::NoDynamicCall {
            register: self.name.clone(),
            call: DynamicCall::Rgb,
        })?;
        self.checked(call(r, g, b))
    }

    fn checked(&self, rule: RenderType) -> Result<Style, StyleError> {
        self.table.check(&rule)?;
        Ok(Style::from(rule))
    }

    /// Makes every style render as the empty string until [`Register::unmute`].
    pub fn mute(&mut self) {
        trace!(register = %self.name, "muted");
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        trace!(register = %self.name, "unmuted");
        self.muted = false;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Renders every style, keyed by name.
    pub fn to_map(&self) -> Result<BTreeMap<String, String>, StyleError> {
        self.styles
            .iter()
            .map(|(name, style)| Ok((name.clone(), self.render(style)?)))
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::render::func;
    use proptest::prelude::*;

    fn register(eightbit: fn(&[u32]) -> String, rgb: fn(&[u32]) -> String) -> Register {
        let mut reg = Register::new("r");
        reg.set_renderfunc(RenderKind::Eightbit, eightbit);
        reg.set_renderfunc(RenderKind::Rgb, rgb);
        reg.set_eightbit_call(RenderType::Eightbit);
        reg.set_rgb_call(RenderType::Rgb);
        reg
    }

    proptest! {
        #[test]
        fn eightbit_accepts_exactly_the_palette(index in -1000i64..1000) {
            let reg = register(func::eightbit_fg, func::rgb_fg);
            let result = reg.eightbit(index);
            if (0..=255).contains(&index) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err(), StyleError::InvalidColorIndex { value: index });
            }
        }

        #[test]
        fn rgb_rejects_any_bad_channel(r in -10i64..300, g in -10i64..300, b in -10i64..300) {
            let reg = register(func::eightbit_fg, func::rgb_fg);
            let valid = [r, g, b].iter().all(|c| (0..=255).contains(c));
            match reg.rgb(r, g, b) {
                Ok(_) => prop_assert!(valid),
                Err(StyleError::InvalidColorComponent { .. }) => prop_assert!(!valid),
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }

        #[test]
        fn same_style_differs_per_register(index in any::<u8>()) {
            let fg = register(func::eightbit_fg, func::rgb_fg);
            let bg = register(func::eightbit_bg, func::rgb_bg);
            let style = fg.eightbit(i64::from(index)).unwrap();
            prop_assert_ne!(fg.render(&style).unwrap(), bg.render(&style).unwrap());
        }
    }
}
