//! Render types: the value descriptors a [`Style`](crate::Style) is made of.

use std::fmt;

/// Identifies which formatter a [`RenderType`] is dispatched to.
///
/// A [`RenderTable`](super::RenderTable) is keyed by this tag. The tag says
/// nothing about *where* a color ends up (foreground, background, underline);
/// that meaning comes from the register whose table does the formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderKind {
    Sgr,
    SgrArgs,
    Eightbit,
    Rgb,
    /// A user-defined kind, identified by name.
    Custom(String),
}

impl RenderKind {
    /// Parses the snake_case name used in register configs.
    ///
    /// Names other than the four built-in kinds become [`RenderKind::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "sgr" => RenderKind::Sgr,
            "sgr_args" => RenderKind::SgrArgs,
            "eightbit" => RenderKind::Eightbit,
            "rgb" => RenderKind::Rgb,
            other => RenderKind::Custom(other.to_string()),
        }
    }

    /// Returns the snake_case name of this kind.
    pub fn name(&self) -> &str {
        match self {
            RenderKind::Sgr => "sgr",
            RenderKind::SgrArgs => "sgr_args",
            RenderKind::Eightbit => "eightbit",
            RenderKind::Rgb => "rgb",
            RenderKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One styling parameter set, e.g. "SGR 1" or "RGB 255,150,50".
///
/// Render types carry numbers only. Turning them into escape sequences is the
/// job of the [`RenderTable`](super::RenderTable) owned by a register.
///
/// ```rust
/// use stylereg::RenderType;
///
/// assert_eq!(RenderType::Sgr(1).args(), vec![1]);
/// assert_eq!(RenderType::sgr_args(4, [3]).args(), vec![4, 3]);
/// assert_eq!(RenderType::Rgb(255, 150, 50).args(), vec![255, 150, 50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderType {
    /// A single SGR parameter, see <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>.
    Sgr(u32),
    /// An SGR parameter with sub-parameters, such as the kitty underline
    /// styles (`4:3` for curly).
    SgrArgs(u32, Vec<u32>),
    /// An index into the 256-color palette.
    Eightbit(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
    /// A parameter set for a user-defined kind.
    Custom { kind: String, args: Vec<u32> },
}

impl RenderType {
    pub fn sgr_args(num: u32, extra: impl IntoIterator<Item = u32>) -> Self {
        RenderType::SgrArgs(num, extra.into_iter().collect())
    }

    pub fn custom(kind: impl Into<String>, args: impl IntoIterator<Item = u32>) -> Self {
        RenderType::Custom {
            kind: kind.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Returns the tag used to look up this type's formatter.
    pub fn kind(&self) -> RenderKind {
        match self {
            RenderType::Sgr(_) => RenderKind::Sgr,
            RenderType::SgrArgs(..) => RenderKind::SgrArgs,
            RenderType::Eightbit(_) => RenderKind::Eightbit,
            RenderType::Rgb(..) => RenderKind::Rgb,
            RenderType::Custom { kind, .. } => RenderKind::Custom(kind.clone()),
        }
    }

    /// Returns the numeric payload in formatter argument order.
    pub fn args(&self) -> Vec<u32> {
        match self {
            RenderType::Sgr(num) => vec![*num],
            RenderType::SgrArgs(num, extra) => {
                let mut args = Vec::with_capacity(extra.len() + 1);
                args.push(*num);
                args.extend_from_slice(extra);
                args
            }
            RenderType::Eightbit(num) => vec![u32::from(*num)],
            RenderType::Rgb(r, g, b) => vec![u32::from(*r), u32::from(*g), u32::from(*b)],
            RenderType::Custom { args, .. } => args.clone(),
        }
    }
}
