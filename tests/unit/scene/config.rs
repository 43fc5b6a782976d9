use super::*;

#[test]
fn defaults_validate() {
    let cfg = SceneConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.terminal.output_lines.len(), 21);
    assert_eq!(cfg.promo.feature_reveal_frames(), 39);
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{ "fps": { "num": 60, "den": 1 }, "promo": { "standalone_command": "xl demo.csv" } }"#;
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.fps, Fps::new(60, 1).unwrap());
    assert_eq!(cfg.promo.standalone_command, "xl demo.csv");
    assert_eq!(cfg.promo.command_chars_per_second, 40);
    assert_eq!(cfg.spring, SpringConfig::default());
}

#[test]
fn zero_rates_are_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.promo.command_chars_per_second = 0;
    assert!(cfg.validate().is_err());

    let json = r#"{ "fps": { "num": 0, "den": 1 } }"#;
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, TermreelError::Serde(_)));
}

#[test]
fn overflowing_durations_are_rejected_without_panicking() {
    let json = format!(
        r#"{{ "master": {{ "terminal_frames": {}, "logo_frames": 1 }} }}"#,
        u64::MAX
    );
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    assert!(matches!(cfg.validate(), Err(TermreelError::Validation(_))));

    let json = format!(r#"{{ "promo": {{ "feature_stagger_frames": {} }} }}"#, u64::MAX);
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    assert!(matches!(cfg.validate(), Err(TermreelError::Validation(_))));
    assert_eq!(cfg.promo.feature_reveal_frames(), u64::MAX);

    let json = format!(r#"{{ "promo": {{ "image_display_frames": {} }} }}"#, u64::MAX);
    let cfg = SceneConfig::from_reader(json.as_bytes()).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn promo_timeline_must_fit_its_duration() {
    let mut cfg = SceneConfig::default();
    // Default chain ends at frame 368.
    cfg.promo.duration_frames = 368;
    assert!(cfg.validate().is_ok());

    cfg.promo.duration_frames = 367;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("promo timeline ends at frame 368"));

    cfg.promo.duration_frames = 450;
    cfg.promo.feature_display_frames = 200;
    assert!(cfg.validate().is_err());
}
