//! The five preset registers: effects, foreground, background, underline, reset.
//!
//! Colors come in three tiers:
//!
//! | Tier    | Names                                  | Encoding            |
//! |---------|----------------------------------------|---------------------|
//! | classic | `black` … `li_grey`                    | SGR 30-37 / 40-47   |
//! | bright  | `da_grey` … `white`                    | SGR 90-97 / 100-107 |
//! | dark    | `da_black` … `da_cyan`, `grey`         | 8-bit palette       |
//!
//! Classic codes are the most widely supported, the 8-bit tier the least, but
//! the 8-bit palette is always there as a fallback. The underline register
//! has no SGR color codes and uses 8-bit indices 0-15 for the first two tiers.

use super::register::Register;
use crate::render::{func, RenderKind, RenderType};
use crate::style::Style;

const CLASSIC: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "li_grey",
];

const BRIGHT: [&str; 8] = [
    "da_grey",
    "li_red",
    "li_green",
    "li_yellow",
    "li_blue",
    "li_magenta",
    "li_cyan",
    "white",
];

const DARK: [(&str, u8); 8] = [
    ("da_black", 0),
    ("da_red", 88),
    ("da_green", 22),
    ("da_yellow", 58),
    ("da_blue", 18),
    ("da_magenta", 89),
    ("da_cyan", 23),
    ("grey", 249),
];

/// Resets bold/dim, italic, underline, blink, inverse, hidden and strike.
///
/// There is no single SGR code that resets only the effects.
const EFFECTS_RESET: [u32; 7] = [22, 23, 24, 25, 27, 28, 29];

fn sgr(num: u32) -> Style {
    Style::from(RenderType::Sgr(num))
}

fn eightbit(num: u8) -> Style {
    Style::from(RenderType::Eightbit(num))
}

fn effects_reset() -> Style {
    EFFECTS_RESET.into_iter().map(RenderType::Sgr).collect()
}

/// Stores the same style under every name, so aliases are exact duplicates.
fn put(reg: &mut Register, names: &[&str], style: Style) {
    for name in names {
        reg.insert((*name).to_string(), style.clone());
    }
}

fn with_sgr(name: &str) -> Register {
    let mut reg = Register::new(name);
    reg.set_renderfunc(RenderKind::Sgr, func::sgr);
    reg
}

fn put_dark_tier(reg: &mut Register) {
    for (name, index) in DARK {
        put(reg, &[name], eightbit(index));
    }
}

/// Builds `fg` or `bg`: the two registers differ only in codes and formatters.
fn color_register(
    name: &str,
    eightbit_fn: fn(&[u32]) -> String,
    rgb_fn: fn(&[u32]) -> String,
    classic_base: u32,
    bright_base: u32,
) -> Register {
    let mut reg = with_sgr(name);
    reg.set_renderfunc(RenderKind::Eightbit, eightbit_fn);
    reg.set_renderfunc(RenderKind::Rgb, rgb_fn);
    reg.set_eightbit_call(RenderType::Eightbit);
    reg.set_rgb_call(RenderType::Rgb);

    for (offset, name) in (0u32..).zip(CLASSIC) {
        put(&mut reg, &[name], sgr(classic_base + offset));
    }
    put(&mut reg, &["rs"], sgr(classic_base + 9));
    for (offset, name) in (0u32..).zip(BRIGHT) {
        put(&mut reg, &[name], sgr(bright_base + offset));
    }
    put_dark_tier(&mut reg);
    reg
}

impl Register {
    /// The effect register: `bold`, `dim`, `italic`, `underl`, `blink`,
    /// `inverse`, `hidden`, `strike`, and `rs` to reset them all.
    ///
    /// ```rust
    /// use stylereg::Register;
    ///
    /// let ef = Register::ef();
    /// assert_eq!(ef.sequence("bold").unwrap(), "\x1b[1m");
    /// assert_eq!(ef.get("b").unwrap(), ef.get("bold").unwrap());
    /// ```
    pub fn ef() -> Self {
        let mut reg = with_sgr("ef");
        put(&mut reg, &["b", "bold"], sgr(1));
        put(&mut reg, &["dim"], sgr(2));
        put(&mut reg, &["i", "italic"], sgr(3));
        put(&mut reg, &["u", "underl"], sgr(4));
        put(&mut reg, &["blink"], sgr(5));
        put(&mut reg, &["inverse"], sgr(7));
        put(&mut reg, &["hidden"], sgr(8));
        put(&mut reg, &["strike"], sgr(9));
        put(&mut reg, &["rs"], effects_reset());
        reg
    }

    /// The foreground register, with `eightbit` and `rgb` constructors.
    pub fn fg() -> Self {
        color_register("fg", func::eightbit_fg, func::rgb_fg, 30, 90)
    }

    /// The background register, with `eightbit` and `rgb` constructors.
    pub fn bg() -> Self {
        color_register("bg", func::eightbit_bg, func::rgb_bg, 40, 100)
    }

    /// The underline register: line styles and underline colors.
    ///
    /// Colors only set the underline color; combine them with `on` (or a
    /// line style such as `curly`) to actually draw the line. Line styles
    /// other than `line` use the kitty `4:n` extension.
    pub fn ul() -> Self {
        let mut reg = with_sgr("ul");
        reg.set_renderfunc(RenderKind::SgrArgs, func::sgr_args);
        reg.set_renderfunc(RenderKind::Eightbit, func::eightbit_underline);
        reg.set_renderfunc(RenderKind::Rgb, func::rgb_underline);
        reg.set_eightbit_call(RenderType::Eightbit);
        reg.set_rgb_call(RenderType::Rgb);

        put(&mut reg, &["on", "line"], sgr(4));
        put(&mut reg, &["off"], sgr(24));
        put(&mut reg, &["double"], Style::from(RenderType::sgr_args(4, [2])));
        put(&mut reg, &["curly"], Style::from(RenderType::sgr_args(4, [3])));
        put(&mut reg, &["dotted"], Style::from(RenderType::sgr_args(4, [4])));
        put(&mut reg, &["dashed"], Style::from(RenderType::sgr_args(4, [5])));

        for (index, name) in (0u8..).zip(CLASSIC.into_iter().chain(BRIGHT)) {
            put(&mut reg, &[name], eightbit(index));
        }
        put(&mut reg, &["rs"], sgr(59).with(RenderType::Sgr(24)));
        put(&mut reg, &["default"], sgr(59));
        put_dark_tier(&mut reg);
        reg
    }

    /// The reset register: undo single effects, colors, or everything.
    ///
    /// Bold and dim share reset code 22 (`bold_dim` / `dim_bold`); terminals
    /// offer no way to reset one without the other.
    pub fn rs() -> Self {
        let mut reg = with_sgr("rs");
        put(&mut reg, &["all"], sgr(0));
        put(&mut reg, &["fg"], sgr(39));
        put(&mut reg, &["bg"], sgr(49));
        put(&mut reg, &["ef"], effects_reset());
        put(&mut reg, &["bold_dim", "dim_bold"], sgr(22));
        put(&mut reg, &["i", "italic"], sgr(23));
        put(&mut reg, &["u", "underl"], sgr(24));
        put(&mut reg, &["blink"], sgr(25));
        put(&mut reg, &["inverse"], sgr(27));
        put(&mut reg, &["hidden"], sgr(28));
        put(&mut reg, &["strike"], sgr(29));
        reg
    }

    /// Builds a preset by register name (`ef`, `fg`, `bg`, `ul`, `rs`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ef" => Some(Self::ef()),
            "fg" => Some(Self::fg()),
            "bg" => Some(Self::bg()),
            "ul" => Some(Self::ul()),
            "rs" => Some(Self::rs()),
            _ => None,
        }
    }
}

/// Names accepted by [`Register::preset`].
pub const PRESET_NAMES: [&str; 5] = ["ef", "fg", "bg", "ul", "rs"];
