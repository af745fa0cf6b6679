use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use pyraminx_core::{Axis, Section, Twist};

use crate::*;

fn write_prefs_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_prefs() {
    let prefs = Preferences::default();
    assert_eq!(750, prefs.animation.twist_duration_ms);
    assert_eq!(200, prefs.animation.min_twist_duration_ms);
    assert_eq!(TwistTiming::default(), prefs.animation.timing());
    assert_eq!(Duration::from_secs(1), prefs.solver.interval());
    assert!(!prefs.solver.auto_solve);

    let names: Vec<&str> = Color::ALL
        .iter()
        .map(|&c| prefs.face_color(c).unwrap().name.as_str())
        .collect();
    assert_eq!(vec!["yellow", "pink", "green", "purple"], names);
}

#[test]
fn test_user_file_overrides_defaults() {
    let file = write_prefs_file(
        "animation:\n  twist_duration_ms: 300\nsolver:\n  auto_solve: true\n",
    );
    let prefs = Preferences::try_load(Some(file.path())).unwrap();
    assert_eq!(300, prefs.animation.twist_duration_ms);
    assert_eq!(200, prefs.animation.min_twist_duration_ms);
    assert!(prefs.solver.auto_solve);
    assert_eq!(1000, prefs.solver.interval_ms);
    assert_eq!(DEFAULT_PREFS.keybinds, prefs.keybinds);

    // Keys from the user file are case-insensitive, like key presses.
    let file = write_prefs_file("keybinds:\n  Q: U\n");
    let prefs = Preferences::try_load(Some(file.path())).unwrap();
    assert_eq!(Some(&Axis::U), prefs.keybinds.keys.get("q"));
    assert!(!prefs.keybinds.keys.contains_key("Q"));
    let resolve = |s: &str| prefs.keybinds.resolve(&s.parse().unwrap());
    assert_eq!(Some(Twist::cw(Section::layer(Axis::U))), resolve("q"));
    assert_eq!(Some(Twist::ccw(Section::tip(Axis::U))), resolve("shift+alt+Q"));
    assert_eq!(Some(Twist::cw(Section::layer(Axis::L))), resolve("l"));
}

#[test]
fn test_bad_user_file_falls_back_to_defaults() {
    let file = write_prefs_file("animation:\n  twist_duration_ms: fast\n");
    assert!(Preferences::try_load(Some(file.path())).is_err());
    assert_eq!(Preferences::default(), Preferences::load(Some(file.path())));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    assert!(Preferences::try_load(Some(&missing)).is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = Preferences::default();
    prefs.animation.min_twist_duration_ms = 50;
    prefs.colors[0].rgb = Rgb::new(0x12, 0x34, 0x56);
    prefs.save(Some(&path)).unwrap();

    assert_eq!(prefs, Preferences::try_load(Some(&path)).unwrap());
}

#[test]
fn test_keybinds() {
    let keybinds = &Preferences::default().keybinds;
    let resolve = |s: &str| keybinds.resolve(&s.parse().unwrap());

    assert_eq!(Some(Twist::cw(Section::layer(Axis::L))), resolve("l"));
    assert_eq!(Some(Twist::cw(Section::layer(Axis::L))), resolve("L"));
    assert_eq!(Some(Twist::cw(Section::tip(Axis::R))), resolve("alt+r"));
    assert_eq!(Some(Twist::ccw(Section::layer(Axis::U))), resolve("shift+d"));
    assert_eq!(Some(Twist::ccw(Section::tip(Axis::B))), resolve("Shift+Alt+A"));
    assert_eq!(Some(Twist::cw(Section::layer(Axis::R))), resolve("s"));
    assert_eq!(Some(Twist::cw(Section::layer(Axis::L))), resolve("w"));
    assert_eq!(None, resolve("q"));
}

#[test]
fn test_key_press_parsing() {
    assert_eq!(
        Ok(KeyPress {
            key: "r".to_string(),
            alt: true,
            shift: false,
        }),
        "alt+R".parse(),
    );
    assert_eq!("alt+shift+w", "shift+alt+w".parse::<KeyPress>().unwrap().to_string());
    assert_eq!(Err(KeyPressError::MissingKey), "alt+".parse::<KeyPress>());
    assert_eq!(
        Err(KeyPressError::UnknownModifier("ctrl".to_string())),
        "ctrl+l".parse::<KeyPress>(),
    );
}

#[test]
fn test_rgb() {
    assert_eq!(Ok(Rgb::new(0xff, 0x00, 0xff)), "#f0f".parse());
    assert_eq!(Ok(Rgb::new(0x12, 0xab, 0xef)), "12ABef".parse());
    assert_eq!("#12abef", Rgb::new(0x12, 0xab, 0xef).to_string());
    assert!("#12345".parse::<Rgb>().is_err());

    let yaml = serde_norway::to_string(&Rgb::new(0xff, 0, 0xff)).unwrap();
    assert!(yaml.contains("#ff00ff"), "{yaml}");
    assert_eq!(Rgb::new(0xff, 0, 0xff), serde_norway::from_str::<Rgb>(&yaml).unwrap());
    assert_eq!(
        Rgb::new(0x11, 0x22, 0x33),
        serde_norway::from_str::<Rgb>("\"#123\"").unwrap(),
    );
    assert!(serde_norway::from_str::<Rgb>("\"#12\"").is_err());
}
