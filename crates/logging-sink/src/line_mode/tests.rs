use super::LineMode;

#[test]
fn line_mode_conversions_round_trip() {
    assert_eq!(LineMode::from(true), LineMode::WithNewline);
    assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

    let append: bool = LineMode::WithNewline.into();
    assert!(append);

    let append: bool = LineMode::WithoutNewline.into();
    assert!(!append);
}

#[test]
fn default_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}

#[cfg(feature = "serde")]
#[test]
fn line_mode_serializes_in_snake_case() {
    let json = serde_json::to_string(&LineMode::WithoutNewline).expect("serialize");
    assert_eq!(json, r#""without_newline""#);

    let parsed: LineMode = serde_json::from_str(r#""with_newline""#).expect("deserialize");
    assert_eq!(parsed, LineMode::WithNewline);
}

#[test]
fn terminator_follows_mode() {
    assert_eq!(LineMode::WithNewline.terminator(), "\n");
    assert_eq!(LineMode::WithoutNewline.terminator(), "");
    assert_eq!(LineMode::default().terminator(), "\n");
}
