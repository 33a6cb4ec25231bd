use envault::icons::*;

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.env_active(), "🟢");
    assert_eq!(service.env_inactive(), "⚪");
    assert_eq!(service.project_icon("rocket"), "🚀");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.env_active(), "●");
    assert_eq!(service.env_inactive(), "○");
    assert_eq!(service.success(), "✓");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.env_active(), "*");
    assert_eq!(service.project_icon("folder"), "[]");
    assert_eq!(service.project_icon("terminal"), ">_");
}

#[test]
fn test_cycle_icon_theme() {
    let mut service = IconService::new(IconTheme::Ascii);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);
    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_every_picker_icon_has_a_glyph() {
    for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
        let service = IconService::new(theme);
        for id in PROJECT_ICON_IDS {
            assert!(!service.project_icon(id).is_empty(), "{id} has no glyph in {theme:?}");
        }
    }
}

#[test]
fn test_picker_colors_parse() {
    for color in PROJECT_COLORS {
        assert!(parse_hex_color(color).is_some(), "{color} should parse");
    }
}
