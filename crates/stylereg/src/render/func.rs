//! Built-in escape sequence formatters.
//!
//! Each formatter takes the ordered arguments of a [`RenderType`](super::RenderType)
//! and returns the literal escape sequence. Formatters never validate: the
//! render types they receive were range-checked when they were built.
//!
//! | Formatter            | Output                     |
//! |----------------------|----------------------------|
//! | `sgr`                | `ESC[<n>m`                 |
//! | `sgr_args`           | `ESC[<n>:<a>:<b>m`         |
//! | `eightbit_fg`        | `ESC[38;5;<n>m`            |
//! | `eightbit_bg`        | `ESC[48;5;<n>m`            |
//! | `eightbit_underline` | `ESC[58;5;<n>m`            |
//! | `rgb_fg`             | `ESC[38;2;<r>;<g>;<b>m`    |
//! | `rgb_bg`             | `ESC[48;2;<r>;<g>;<b>m`    |
//! | `rgb_underline`      | `ESC[58;2;<r>;<g>;<b>m`    |

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

fn join(args: &[u32], sep: &str) -> String {
    args.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

fn csi(params: &str) -> String {
    format!("{CSI}{params}m")
}

fn prefixed(prefix: &str, args: &[u32]) -> String {
    csi(&format!("{prefix};{}", join(args, ";")))
}

pub fn sgr(args: &[u32]) -> String {
    csi(&join(args, ";"))
}

/// Sub-parameters are colon separated, as in `ESC[4:3m` (curly underline).
pub fn sgr_args(args: &[u32]) -> String {
    csi(&join(args, ":"))
}

pub fn eightbit_fg(args: &[u32]) -> String {
    prefixed("38;5", args)
}

pub fn eightbit_bg(args: &[u32]) -> String {
    prefixed("48;5", args)
}

pub fn eightbit_underline(args: &[u32]) -> String {
    prefixed("58;5", args)
}

pub fn rgb_fg(args: &[u32]) -> String {
    prefixed("38;2", args)
}

pub fn rgb_bg(args: &[u32]) -> String {
    prefixed("48;2", args)
}

pub fn rgb_underline(args: &[u32]) -> String {
    prefixed("58;2", args)
}

/// Names accepted by [`builtin`], in table order.
pub const BUILTIN_NAMES: &[&str] = &[
    "sgr",
    "sgr_args",
    "eightbit_fg",
    "eightbit_bg",
    "eightbit_underline",
    "rgb_fg",
    "rgb_bg",
    "rgb_underline",
];

/// Looks up a built-in formatter by name.
///
/// Used by register configs, which refer to formatters by name.
pub fn builtin(name: &str) -> Option<fn(&[u32]) -> String> {
    let func: fn(&[u32]) -> String = match name {
        "sgr" => sgr,
        "sgr_args" => sgr_args,
        "eightbit_fg" => eightbit_fg,
        "eightbit_bg" => eightbit_bg,
        "eightbit_underline" => eightbit_underline,
        "rgb_fg" => rgb_fg,
        "rgb_bg" => rgb_bg,
        "rgb_underline" => rgb_underline,
        _ => return None,
    };
    Some(func)
}
