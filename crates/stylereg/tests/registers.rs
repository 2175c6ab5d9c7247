//! End-to-end behaviour of the preset registers.
//!
//! Where `console` can produce the same sequence, its output is used as the
//! expected value.

use stylereg::render::func;
use stylereg::{
    Channel, Register, RegisterSet, RenderKind, RenderType, Style, StyleError, BG, EF, FG, RS,
    UL,
};

fn console_open(style: console::Style) -> String {
    let painted = style.force_styling(true).apply_to("x").to_string();
    painted
        .strip_suffix("x\x1b[0m")
        .expect("console output ends with text and reset")
        .to_string()
}

#[test]
fn test_effects_match_console() {
    let cases = [
        ("bold", console::Style::new().bold()),
        ("dim", console::Style::new().dim()),
        ("italic", console::Style::new().italic()),
        ("underl", console::Style::new().underlined()),
        ("blink", console::Style::new().blink()),
        ("inverse", console::Style::new().reverse()),
        ("hidden", console::Style::new().hidden()),
    ];
    for (name, style) in cases {
        assert_eq!(EF.sequence(name).unwrap(), console_open(style), "ef.{name}");
    }
}

#[test]
fn test_classic_colors_match_console() {
    assert_eq!(FG.sequence("red").unwrap(), console_open(console::Style::new().red()));
    assert_eq!(
        FG.sequence("cyan").unwrap(),
        console_open(console::Style::new().cyan())
    );
    assert_eq!(
        BG.sequence("green").unwrap(),
        console_open(console::Style::new().on_green())
    );
    assert_eq!(
        BG.sequence("black").unwrap(),
        console_open(console::Style::new().on_black())
    );
}

#[test]
fn test_eightbit_matches_console() {
    let fg = FG.render(&FG.eightbit(196).unwrap()).unwrap();
    assert_eq!(fg, console_open(console::Style::new().color256(196)));

    let bg = BG.render(&BG.eightbit(88).unwrap()).unwrap();
    assert_eq!(bg, console_open(console::Style::new().on_color256(88)));
}

#[test]
fn test_bold_sequence() {
    assert_eq!(EF.sequence("bold").unwrap(), "\x1b[1m");
}

#[test]
fn test_combine_red_then_bold() {
    let style = FG.get("red").unwrap().combine(EF.get("bold").unwrap());
    assert_eq!(FG.render(&style).unwrap(), "\x1b[31m\x1b[1m");
    assert_eq!(
        FG.render(&style).unwrap(),
        format!(
            "{}{}",
            FG.sequence("red").unwrap(),
            EF.sequence("bold").unwrap()
        )
    );
}

#[test]
fn test_foreground_and_background_eightbit_differ() {
    for index in [0, 1, 88, 255] {
        let fg = FG.render(&FG.eightbit(index).unwrap()).unwrap();
        let bg = BG.render(&BG.eightbit(index).unwrap()).unwrap();
        let ul = UL.render(&UL.eightbit(index).unwrap()).unwrap();
        assert_ne!(fg, bg);
        assert_ne!(fg, ul);
        assert_ne!(bg, ul);
    }
}

#[test]
fn test_same_style_through_each_register() {
    let style = Style::from(RenderType::Rgb(10, 20, 30));
    assert_eq!(FG.render(&style).unwrap(), func::rgb_fg(&[10, 20, 30]));
    assert_eq!(BG.render(&style).unwrap(), func::rgb_bg(&[10, 20, 30]));
    assert_eq!(UL.render(&style).unwrap(), func::rgb_underline(&[10, 20, 30]));
    assert!(matches!(
        EF.render(&style),
        Err(StyleError::MissingFormatter {
            kind: RenderKind::Rgb,
            ..
        })
    ));
}

#[test]
fn test_out_of_range_inputs() {
    assert_eq!(
        FG.rgb(256, 0, 0).unwrap_err(),
        StyleError::InvalidColorComponent {
            channel: Channel::Red,
            value: 256
        }
    );
    assert_eq!(
        FG.eightbit(-1).unwrap_err(),
        StyleError::InvalidColorIndex { value: -1 }
    );
}

#[test]
fn test_unknown_name() {
    assert!(matches!(
        FG.get("neon"),
        Err(StyleError::UnknownStyleName { .. })
    ));
}

#[test]
fn test_aliases_render_identically() {
    let registers: [&Register; 3] = [&*EF, &*UL, &*RS];
    let pairs: [(&str, &str); 4] = [
        ("b", "bold"),
        ("i", "italic"),
        ("u", "underl"),
        ("on", "line"),
    ];
    for reg in registers {
        for (alias, canonical) in pairs {
            if reg.contains(alias) && reg.contains(canonical) {
                assert_eq!(
                    reg.sequence(alias).unwrap(),
                    reg.sequence(canonical).unwrap(),
                    "{}.{alias} vs {}.{canonical}",
                    reg.name(),
                    reg.name()
                );
            }
        }
    }
}

#[test]
fn test_reset_register() {
    assert_eq!(RS.sequence("fg").unwrap(), FG.sequence("rs").unwrap());
    assert_eq!(RS.sequence("bg").unwrap(), BG.sequence("rs").unwrap());
    assert_eq!(RS.sequence("ef").unwrap(), EF.sequence("rs").unwrap());
}

#[test]
fn test_underline_color_needs_line() {
    let squiggle = UL.get("curly").unwrap() + UL.get("red").unwrap();
    assert_eq!(UL.render(&squiggle).unwrap(), "\x1b[4:3m\x1b[58;5;1m");
}

#[test]
fn test_to_map_is_sorted_and_complete() {
    let map = FG.to_map().unwrap();
    assert_eq!(map.len(), FG.len());
    let keys: Vec<&String> = map.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_statics_are_untouched_by_clones() {
    let mut fg = FG.clone();
    fg.mute();
    fg.set("red", RenderType::Sgr(91)).unwrap();
    assert_eq!(FG.sequence("red").unwrap(), "\x1b[31m");
    assert!(!FG.is_muted());
}

#[test]
fn test_register_set_round_trip_with_presets() {
    let set = RegisterSet::new();
    assert_eq!(
        set.resolve("fg.red+ef.bold").unwrap(),
        format!(
            "{}{}",
            FG.sequence("red").unwrap(),
            EF.sequence("bold").unwrap()
        )
    );
}
