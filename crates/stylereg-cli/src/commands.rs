//! Command implementations. Output goes to the writer passed in.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use console::measure_text_width;
use stylereg::{Register, RegisterConfig, RegisterSet, RS};
use tracing::debug;

/// Makes escape sequences visible.
pub fn escape(seq: &str) -> String {
    seq.replace('\x1b', "\\x1b")
}

/// Loads a register definition, choosing the parser by file extension.
pub fn load_register(path: &Path) -> Result<Register> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        RegisterConfig::from_json(&source)
    } else {
        RegisterConfig::from_yaml(&source)
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    let register = config
        .build()
        .with_context(|| format!("invalid register in {}", path.display()))?;
    debug!(path = %path.display(), register = %register.name(), "loaded register");
    Ok(register)
}

/// Builds the preset set plus every register in `configs`.
pub fn register_set(configs: &[impl AsRef<Path>]) -> Result<RegisterSet> {
    let mut set = RegisterSet::new();
    for path in configs {
        set.insert(load_register(path.as_ref())?);
    }
    Ok(set)
}

pub fn show(
    out: &mut impl Write,
    set: &RegisterSet,
    exprs: &[String],
    text: Option<&str>,
    escaped: bool,
) -> Result<()> {
    let mut rendered = String::new();
    for expr in exprs {
        rendered.push_str(
            &set.resolve(expr)
                .with_context(|| format!("cannot render '{expr}'"))?,
        );
    }
    if let Some(text) = text {
        rendered.push_str(text);
        rendered.push_str(&RS.sequence("all")?);
    }

    if escaped {
        writeln!(out, "{}", escape(&rendered))?;
    } else {
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

pub fn list(out: &mut impl Write, set: &RegisterSet, name: &str, escaped: bool) -> Result<()> {
    let register = set
        .get(name)
        .with_context(|| format!("unknown register '{name}'"))?;
    let width = register
        .names()
        .map(measure_text_width)
        .max()
        .unwrap_or(0);
    let reset = RS.sequence("all")?;

    for (style_name, style) in register.iter() {
        let seq = register.render(style)?;
        let sample = if escaped {
            escape(&seq)
        } else {
            format!("{seq}{style_name}{reset}")
        };
        let pad = width - measure_text_width(style_name);
        writeln!(out, "{style_name}{}  {sample}", " ".repeat(pad))?;
    }
    Ok(())
}

pub fn check(out: &mut impl Write, path: &Path) -> Result<()> {
    let register = load_register(path)?;
    writeln!(out, "{}: {} styles", register.name(), register.len())?;
    for name in register.names() {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}
