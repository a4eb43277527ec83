use super::*;

#[test]
fn theme_defaults_to_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn theme_parse_round_trips_known_values() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
    assert_eq!(Theme::parse(Theme::Light.as_str()), Theme::Light);
}

#[test]
fn theme_parse_falls_back_to_light() {
    assert_eq!(Theme::parse(""), Theme::Light);
    assert_eq!(Theme::parse("DARK"), Theme::Light);
    assert_eq!(Theme::parse("true"), Theme::Light);
}

#[test]
fn theme_toggle_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn toggle_icon_points_at_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
}
