//! Declarative register definitions loaded from YAML or JSON.
//!
//! # Format
//!
//! ```yaml
//! name: brand
//! extends: fg            # optional preset: ef | fg | bg | ul | rs
//! formatters:            # optional: render kind -> built-in formatter
//!   eightbit: eightbit_bg
//! styles:
//!   orange: { rgb: [255, 150, 50] }
//!   alert: [ { sgr: 1 }, { eightbit: 196 } ]
//!   squiggle: { sgr_args: [4, 3] }
//!   strong: bold         # alias to another style
//! ```
//!
//! Concrete styles are stored first, then aliases are resolved, so an alias
//! may point at a preset style or at any configured style regardless of the
//! order they are written in. Alias chains are followed to their concrete
//! style; dangling aliases and cycles are errors. Numbers are range-checked
//! with the same errors as [`Register::eightbit`] and [`Register::rgb`].

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::presets::PRESET_NAMES;
use super::register::Register;
use crate::render::{func, RenderKind, RenderType};
use crate::style::{color_component, color_index, Channel, Style, StyleError};

/// Error returned when a register definition cannot be parsed or built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML register definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON register definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown preset '{name}' (expected one of: {})", PRESET_NAMES.join(", "))]
    UnknownPreset { name: String },

    #[error("unknown formatter '{name}' for render type '{kind}'")]
    UnknownFormatter { kind: String, name: String },

    #[error("style '{name}': sgr_args needs at least the SGR number")]
    EmptySgrArgs { name: String },

    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },

    #[error("cycle detected in style aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("style '{name}': {source}")]
    Style {
        name: String,
        #[source]
        source: StyleError,
    },
}

/// One render type as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleConfig {
    Sgr(u32),
    /// SGR number followed by its sub-parameters.
    SgrArgs(Vec<u32>),
    Eightbit(i64),
    Rgb([i64; 3]),
}

impl RuleConfig {
    /// Converts the rule of style `name`, range-checking color values.
    fn to_render_type(&self, name: &str) -> Result<RenderType, ConfigError> {
        let style_error = |source| ConfigError::Style {
            name: name.to_string(),
            source,
        };
        match self {
            RuleConfig::Sgr(num) => Ok(RenderType::Sgr(*num)),
            RuleConfig::SgrArgs(args) => {
                let (num, extra) = args.split_first().ok_or_else(|| ConfigError::EmptySgrArgs {
                    name: name.to_string(),
                })?;
                Ok(RenderType::sgr_args(*num, extra.iter().copied()))
            }
            RuleConfig::Eightbit(index) => color_index(*index)
                .map(RenderType::Eightbit)
                .map_err(style_error),
            RuleConfig::Rgb([r, g, b]) => Ok(RenderType::Rgb(
                color_component(Channel::Red, *r).map_err(style_error)?,
                color_component(Channel::Green, *g).map_err(style_error)?,
                color_component(Channel::Blue, *b).map_err(style_error)?,
            )),
        }
    }
}

/// A style as written in a config file: an alias, one rule, or a rule list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleConfig {
    Alias(String),
    Rule(RuleConfig),
    Rules(Vec<RuleConfig>),
}

/// A register definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterConfig {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub formatters: BTreeMap<String, String>,
    #[serde(default)]
    pub styles: BTreeMap<String, StyleConfig>,
}

impl RegisterConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builds the register this definition describes.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownPreset`] for a bad `extends`
    /// - [`ConfigError::UnknownFormatter`] for a formatter name that is not built in
    /// - [`ConfigError::EmptySgrArgs`] for `sgr_args: []`
    /// - [`ConfigError::UnresolvedAlias`] and [`ConfigError::CycleDetected`] for
    ///   aliases that never reach a concrete style
    /// - [`ConfigError::Style`] wrapping the [`StyleError`] of the first style that
    ///   fails (out-of-range values, missing formatters)
    pub fn build(&self) -> Result<Register, ConfigError> {
        let mut reg = match &self.extends {
            Some(preset) => Register::preset(preset)
                .ok_or_else(|| ConfigError::UnknownPreset {
                    name: preset.clone(),
                })?
                .renamed(self.name.clone()),
            None => Register::new(self.name.clone()),
        };

        for (kind, formatter) in &self.formatters {
            let func = func::builtin(formatter).ok_or_else(|| ConfigError::UnknownFormatter {
                kind: kind.clone(),
                name: formatter.clone(),
            })?;
            reg.set_renderfunc(RenderKind::from_name(kind), func);
        }

        let mut aliases = BTreeMap::new();
        for (name, style) in &self.styles {
            let style = match style {
                StyleConfig::Alias(target) => {
                    aliases.insert(name.as_str(), target.as_str());
                    continue;
                }
                StyleConfig::Rule(rule) => Style::from(rule.to_render_type(name)?),
                StyleConfig::Rules(rules) => rules
                    .iter()
                    .map(|rule| rule.to_render_type(name))
                    .collect::<Result<Style, _>>()?,
            };
            reg.set(name.clone(), style)
                .map_err(|source| ConfigError::Style {
                    name: name.clone(),
                    source,
                })?;
        }

        for &name in aliases.keys() {
            let target = resolve_alias(&aliases, name)?;
            if !reg.contains(target) {
                return Err(ConfigError::UnresolvedAlias {
                    from: name.to_string(),
                    to: target.to_string(),
                });
            }
            reg.alias(name, target)
                .map_err(|source| ConfigError::Style {
                    name: name.to_string(),
                    source,
                })?;
        }

        debug!(register = %reg.name(), styles = reg.len(), "built register from config");
        Ok(reg)
    }
}

/// Follows the alias chain starting at `start` to the first name that is not
/// itself a configured alias.
fn resolve_alias<'a>(
    aliases: &BTreeMap<&'a str, &'a str>,
    start: &'a str,
) -> Result<&'a str, ConfigError> {
    let mut path = vec![start];
    let mut current = start;
    while let Some(&next) = aliases.get(current) {
        let seen = path.contains(&next);
        path.push(next);
        if seen {
            return Err(ConfigError::CycleDetected {
                path: path.into_iter().map(String::from).collect(),
            });
        }
        current = next;
    }
    Ok(current)
}
