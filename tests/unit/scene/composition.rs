use super::*;

#[test]
fn registry_declares_duration_fps_and_canvas() {
    let comps = Composition::registry(&SceneConfig::default()).unwrap();
    let ids: Vec<_> = comps.iter().map(Composition::id).collect();
    assert_eq!(ids, CompositionId::ALL.to_vec());

    let promo = &comps[0];
    assert_eq!(promo.duration(), FrameIndex(450));
    assert_eq!(promo.fps(), Fps::new(30, 1).unwrap());
    assert_eq!(promo.canvas(), Canvas { width: 1280, height: 1000 });
    assert_eq!(comps[1].duration(), FrameIndex(150));
    assert_eq!(comps[2].duration(), FrameIndex(450));
}

#[test]
fn ids_parse_case_insensitively() {
    assert_eq!("MacOSTerminal".parse::<CompositionId>().unwrap(), CompositionId::MacOsTerminal);
    assert_eq!("master".parse::<CompositionId>().unwrap(), CompositionId::Master);
    assert!("Intro".parse::<CompositionId>().is_err());
    assert_eq!(
        serde_json::to_string(&CompositionId::MacOsTerminal).unwrap(),
        "\"MacOSTerminal\""
    );
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.terminal.chars_per_second = 0;
    assert!(Composition::new(CompositionId::MacOsTerminal, cfg).is_err());
}

#[test]
fn markers_follow_the_composition() {
    let cfg = SceneConfig::default();
    let master = Composition::new(CompositionId::Master, cfg.clone()).unwrap();
    let names: Vec<_> = master.markers().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["promo", "logo_card"]);

    let promo = Composition::new(CompositionId::MacOsTerminal, cfg).unwrap();
    assert_eq!(promo.markers().first().unwrap().name, "terminal_session");
}
