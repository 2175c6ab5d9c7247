//! Per-register dispatch from render kind to formatter.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::kind::{RenderKind, RenderType};
use crate::style::StyleError;

/// A formatter: ordered render type arguments in, escape sequence out.
pub type RenderFn = Arc<dyn Fn(&[u32]) -> String + Send + Sync>;

/// Maps each [`RenderKind`] to the formatter that renders it.
///
/// Every register owns one table, so the same kind can format differently
/// depending on the register: `Eightbit(196)` is `ESC[38;5;196m` in the
/// foreground register and `ESC[48;5;196m` in the background register.
///
/// # Example
///
/// ```rust
/// use stylereg::render::{func, RenderTable};
/// use stylereg::{RenderKind, RenderType};
///
/// let mut table = RenderTable::new("bg");
/// table.set(RenderKind::Eightbit, func::eightbit_bg);
///
/// assert_eq!(table.format(&RenderType::Eightbit(1)).unwrap(), "\x1b[48;5;1m");
/// assert!(table.format(&RenderType::Sgr(1)).is_err());
/// ```
#[derive(Clone, Default)]
pub struct RenderTable {
    /// Name of the owning register, reported in errors.
    owner: String,
    funcs: BTreeMap<RenderKind, RenderFn>,
}

impl RenderTable {
    /// Creates an empty table for the register named `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            funcs: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    /// Registers `func` for `kind`, replacing any previous formatter.
    ///
    /// Returns `true` if a formatter was replaced.
    pub fn set<F>(&mut self, kind: RenderKind, func: F) -> bool
    where
        F: Fn(&[u32]) -> String + Send + Sync + 'static,
    {
        self.funcs.insert(kind, Arc::new(func)).is_some()
    }

    pub fn contains(&self, kind: &RenderKind) -> bool {
        self.funcs.contains_key(kind)
    }

    /// Returns the registered kinds in sorted order.
    pub fn kinds(&self) -> impl Iterator<Item = &RenderKind> {
        self.funcs.keys()
    }

    /// Fails with [`StyleError::MissingFormatter`] if `rule` cannot be formatted.
    pub fn check(&self, rule: &RenderType) -> Result<(), StyleError> {
        self.lookup(&rule.kind()).map(|_| ())
    }

    /// Formats a single render type.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingFormatter`] if no formatter is registered
    /// for the rule's kind.
    pub fn format(&self, rule: &RenderType) -> Result<String, StyleError> {
        let func = self.lookup(&rule.kind())?;
        Ok(func(&rule.args()))
    }

    fn lookup(&self, kind: &RenderKind) -> Result<&RenderFn, StyleError> {
        self.funcs
            .get(kind)
            .ok_or_else(|| StyleError::MissingFormatter {
                register: self.owner.clone(),
                kind: kind.clone(),
            })
    }
}

impl fmt::Debug for RenderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderTable")
            .field("owner", &self.owner)
            .field("kinds", &self.funcs.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::func;

    #[test]
    fn test_format_dispatches_by_kind() {
        let mut table = RenderTable::new("fg");
        table.set(RenderKind::Sgr, func::sgr);
        table.set(RenderKind::Eightbit, func::eightbit_fg);

        assert_eq!(table.format(&RenderType::Sgr(31)).unwrap(), "\x1b[31m");
        assert_eq!(
            table.format(&RenderType::Eightbit(88)).unwrap(),
            "\x1b[38;5;88m"
        );
    }

    #[test]
    fn test_missing_formatter_is_an_error() {
        let table = RenderTable::new("ef");
        let err = table.format(&RenderType::Rgb(1, 2, 3)).unwrap_err();
        assert_eq!(
            err,
            StyleError::MissingFormatter {
                register: "ef".to_string(),
                kind: RenderKind::Rgb,
            }
        );
    }

    #[test]
    fn test_set_replaces() {
        let mut table = RenderTable::new("x");
        assert!(!table.set(RenderKind::Eightbit, func::eightbit_fg));
        assert!(table.set(RenderKind::Eightbit, func::eightbit_bg));
        assert_eq!(
            table.format(&RenderType::Eightbit(2)).unwrap(),
            "\x1b[48;5;2m"
        );
    }

    #[test]
    fn test_closure_formatter_for_custom_kind() {
        let mut table = RenderTable::new("hsl");
        table.set(RenderKind::Custom("hsl".to_string()), |args: &[u32]| {
            format!("<hsl {:?}>", args)
        });

        let rule = RenderType::custom("hsl", [120, 50, 50]);
        assert_eq!(table.format(&rule).unwrap(), "<hsl [120, 50, 50]>");
        assert!(table.check(&RenderType::custom("lab", [1])).is_err());
    }

    #[test]
    fn test_kinds_sorted() {
        let mut table = RenderTable::new("ul");
        table.set(RenderKind::Rgb, func::rgb_underline);
        table.set(RenderKind::Sgr, func::sgr);
        let kinds: Vec<&RenderKind> = table.kinds().collect();
        assert_eq!(kinds, vec![&RenderKind::Sgr, &RenderKind::Rgb]);
    }

    #[test]
    fn test_debug_lists_kinds() {
        let mut table = RenderTable::new("rs");
        table.set(RenderKind::Sgr, func::sgr);
        let debug = format!("{:?}", table);
        assert!(debug.contains("rs"));
        assert!(debug.contains("Sgr"));
    }
}
