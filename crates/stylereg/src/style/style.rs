//! The [`Style`] value: an ordered, combinable list of render types.

use std::ops::Add;

use super::error::StyleError;
use crate::render::{RenderTable, RenderType};

/// An ordered bundle of render types representing one or more terminal attributes.
///
/// Order is output order: terminals apply escape sequences left to right, so
/// [`Style::combine`] concatenates and never reorders or deduplicates.
///
/// Styles carry no reference to a register. The same style renders
/// differently through different tables, which is what lets one
/// `Eightbit(88)` entry mean dark red text in `fg` and a dark red
/// background in `bg`.
///
/// # Example
///
/// ```rust
/// use stylereg::{RenderType, Style, FG};
///
/// let warn = Style::from(RenderType::Sgr(33)).with(RenderType::Sgr(1));
/// assert_eq!(FG.render(&warn).unwrap(), "\x1b[33m\x1b[1m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    rules: Vec<RenderType>,
}

impl Style {
    /// Creates an empty style, which renders as the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: impl IntoIterator<Item = RenderType>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends a rule, returning the extended style for chaining.
    #[must_use]
    pub fn with(mut self, rule: RenderType) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[RenderType] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns a new style with `self`'s rules followed by `other`'s.
    ///
    /// Neither operand changes. Combination is associative but not
    /// commutative.
    #[must_use]
    pub fn combine(&self, other: &Style) -> Style {
        let mut rules = Vec::with_capacity(self.rules.len() + other.rules.len());
        rules.extend_from_slice(&self.rules);
        rules.extend_from_slice(&other.rules);
        Style { rules }
    }

    /// Renders every rule through `table` and concatenates the results.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::MissingFormatter`] for the first rule whose kind
    /// has no formatter in `table`.
    pub fn render(&self, table: &RenderTable) -> Result<String, StyleError> {
        self.rules.iter().try_fold(String::new(), |mut out, rule| {
            out.push_str(&table.format(rule)?);
            Ok(out)
        })
    }

    /// Checks that `table` can render every rule without rendering anything.
    pub fn check(&self, table: &RenderTable) -> Result<(), StyleError> {
        self.rules.iter().try_for_each(|rule| table.check(rule))
    }
}

impl From<RenderType> for Style {
    fn from(rule: RenderType) -> Self {
        Self { rules: vec![rule] }
    }
}

impl FromIterator<RenderType> for Style {
    fn from_iter<I: IntoIterator<Item = RenderType>>(iter: I) -> Self {
        Self::from_rules(iter)
    }
}

impl FromIterator<Style> for Style {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().flat_map(|style| style.rules).collect(),
        }
    }
}

impl Add for Style {
    type Output = Style;

    fn add(mut self, other: Style) -> Style {
        self.rules.extend(other.rules);
        self
    }
}

impl Add<&Style> for &Style {
    type Output = Style;

    fn add(self, other: &Style) -> Style {
        self.combine(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{func, RenderKind};

    fn fg_table() -> RenderTable {
        let mut table = RenderTable::new("fg");
        table.set(RenderKind::Sgr, func::sgr);
        table.set(RenderKind::Eightbit, func::eightbit_fg);
        table.set(RenderKind::Rgb, func::rgb_fg);
        table
    }

    #[test]
    fn test_empty_style_renders_empty() {
        assert_eq!(Style::new().render(&fg_table()).unwrap(), "");
        assert!(Style::new().is_empty());
    }

    #[test]
    fn test_render_preserves_order() {
        let style = Style::from_rules([RenderType::Sgr(1), RenderType::Eightbit(9)]);
        assert_eq!(style.render(&fg_table()).unwrap(), "\x1b[1m\x1b[38;5;9m");

        let reversed = Style::from_rules([RenderType::Eightbit(9), RenderType::Sgr(1)]);
        assert_eq!(reversed.render(&fg_table()).unwrap(), "\x1b[38;5;9m\x1b[1m");
    }

    #[test]
    fn test_combine_does_not_mutate_operands() {
        let a = Style::from(RenderType::Sgr(31));
        let b = Style::from(RenderType::Sgr(1));
        let c = a.combine(&b);

        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(c.rules(), &[RenderType::Sgr(31), RenderType::Sgr(1)]);
    }

    #[test]
    fn test_combine_is_not_commutative() {
        let a = Style::from(RenderType::Sgr(31));
        let b = Style::from(RenderType::Sgr(1));
        assert_ne!(a.combine(&b), b.combine(&a));
    }

    #[test]
    fn test_add_operators_match_combine() {
        let a = Style::from(RenderType::Sgr(31));
        let b = Style::from(RenderType::Rgb(1, 2, 3));
        assert_eq!(&a + &b, a.combine(&b));
        assert_eq!(a.clone() + b.clone(), a.combine(&b));
    }

    #[test]
    fn test_collect_styles() {
        let a = Style::from(RenderType::Sgr(1));
        let b = Style::from_rules([RenderType::Sgr(2), RenderType::Sgr(3)]);
        let all: Style = vec![a, b].into_iter().collect();
        assert_eq!(
            all.rules(),
            &[RenderType::Sgr(1), RenderType::Sgr(2), RenderType::Sgr(3)]
        );
    }

    #[test]
    fn test_render_fails_on_unformattable_rule() {
        let style = Style::from(RenderType::Sgr(4)).with(RenderType::sgr_args(4, [3]));
        let err = style.render(&fg_table()).unwrap_err();
        assert!(matches!(
            err,
            StyleError::MissingFormatter {
                kind: RenderKind::SgrArgs,
                ..
            }
        ));
        assert!(style.check(&fg_table()).is_err());
    }

    #[test]
    fn test_render_is_repeatable() {
        let style = Style::from(RenderType::Rgb(10, 20, 30));
        let table = fg_table();
        assert_eq!(style.render(&table).unwrap(), style.render(&table).unwrap());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::render::{func, RenderKind};
    use proptest::prelude::*;

    fn rule() -> impl Strategy<Value = RenderType> {
        prop_oneof![
            (0u32..108).prop_map(RenderType::Sgr),
            any::<u8>().prop_map(RenderType::Eightbit),
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RenderType::Rgb(r, g, b)),
        ]
    }

    fn style() -> impl Strategy<Value = Style> {
        prop::collection::vec(rule(), 0..6).prop_map(Style::from_rules)
    }

    fn table() -> RenderTable {
        let mut table = RenderTable::new("fg");
        table.set(RenderKind::Sgr, func::sgr);
        table.set(RenderKind::Eightbit, func::eightbit_fg);
        table.set(RenderKind::Rgb, func::rgb_fg);
        table
    }

    proptest! {
        #[test]
        fn combine_is_associative(a in style(), b in style(), c in style()) {
            let left = a.combine(&b).combine(&c);
            let right = a.combine(&b.combine(&c));
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(left.render(&table()).unwrap(), right.render(&table()).unwrap());
        }

        #[test]
        fn combined_render_is_concatenation(a in style(), b in style()) {
            let table = table();
            let joined = format!("{}{}", a.render(&table).unwrap(), b.render(&table).unwrap());
            prop_assert_eq!(a.combine(&b).render(&table).unwrap(), joined);
        }

        #[test]
        fn single_rule_renders_like_its_formatter(rule in rule()) {
            let table = table();
            let direct = match &rule {
                RenderType::Sgr(_) => func::sgr(&rule.args()),
                RenderType::Eightbit(_) => func::eightbit_fg(&rule.args()),
                _ => func::rgb_fg(&rule.args()),
            };
            prop_assert_eq!(Style::from(rule).render(&table).unwrap(), direct);
        }
    }
}
