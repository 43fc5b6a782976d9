use super::*;

fn opacity(out: &Elements, id: &str) -> f64 {
    out.get(id).unwrap().opacity
}

fn eval(frame: u64) -> Elements {
    let cfg = SceneConfig::default();
    let mut out = Elements::new();
    Promo::new(&cfg).write(FrameIndex(frame), &mut out);
    out
}

#[test]
fn markers_match_hand_computed_chain() {
    let cfg = SceneConfig::default();
    let t = promo_timeline(&cfg.promo, cfg.fps);
    assert!(t.validate().is_ok());

    let expected = [
        (PromoPhase::TerminalSession, 0),
        (PromoPhase::TerminalExit, 63),
        (PromoPhase::TitleFadeIn, 71),
        (PromoPhase::SubtitleFadeIn, 83),
        (PromoPhase::IntroHold, 103),
        (PromoPhase::IntroFadeOut, 127),
        (PromoPhase::CommandTyping, 142),
        (PromoPhase::ImageDelay, 151),
        (PromoPhase::ImageShow, 157),
        (PromoPhase::ImageExit, 217),
        (PromoPhase::FeatureReveal, 227),
        (PromoPhase::FeatureHold, 266),
        (PromoPhase::FeatureFadeOut, 326),
        (PromoPhase::Outro, 341),
    ];
    for (phase, start) in expected {
        assert_eq!(t.start(phase), FrameIndex(start), "{phase:?}");
    }
    assert!(t.end().0 <= cfg.promo.duration_frames);
}

#[test]
fn phases_are_ordered_and_contiguous() {
    let cfg = SceneConfig::default();
    let t = promo_timeline(&cfg.promo, cfg.fps);
    for w in t.markers().windows(2) {
        assert!(w[0].start <= w[1].start);
        assert_eq!(w[0].end(), w[1].start);
    }
}

#[test]
fn terminal_output_settles_before_exit() {
    let cfg = SceneConfig::default();
    let settle = TerminalContent::new(&cfg.terminal).settle_frame(cfg.fps);
    let t = promo_timeline(&cfg.promo, cfg.fps);
    assert!(settle <= t.start(PromoPhase::OutputHold));
}

#[test]
fn everything_after_the_terminal_is_inert_at_start() {
    let out = eval(0);
    assert_eq!(out.get("terminal").unwrap().translate, Vec2::ZERO);
    assert_eq!(opacity(&out, "intro.title"), 0.0);
    assert_eq!(opacity(&out, "intro.subtitle"), 0.0);
    assert_eq!(opacity(&out, "command"), 0.0);
    assert_eq!(opacity(&out, "image"), 0.0);
    assert_eq!(opacity(&out, "features.0"), 0.0);
    assert_eq!(opacity(&out, "outro.logo"), 0.0);
    assert_eq!(out.get("command").unwrap().text.as_deref(), Some(""));
}

#[test]
fn terminal_slides_down_after_exit_marker() {
    assert_eq!(eval(63).get("terminal").unwrap().translate.y, 0.0);
    let y = eval(64).get("terminal").unwrap().translate.y;
    assert!(y > 0.0 && y < 1200.0);
    let y = eval(200).get("terminal").unwrap().translate.y;
    assert!((y - 1200.0).abs() < 1.0);
}

#[test]
fn intro_fades_in_then_out() {
    assert_eq!(opacity(&eval(81), "intro.title"), 0.5);
    assert_eq!(opacity(&eval(93), "intro.subtitle"), 0.5);
    assert_eq!(opacity(&eval(120), "intro"), 1.0);
    assert_eq!(opacity(&eval(132), "intro"), 0.5);
    assert_eq!(opacity(&eval(137), "intro"), 0.0);
}

#[test]
fn standalone_command_types_then_blinks() {
    let out = eval(150);
    let cmd = out.get("command").unwrap();
    assert_eq!(cmd.text.as_deref(), Some("ls -Al | x"));
    assert!(cmd.cursor.unwrap().visible);

    let out = eval(151);
    let cmd = out.get("command").unwrap();
    assert_eq!(cmd.text.as_deref(), Some("ls -Al | xl"));
    assert_eq!(cmd.opacity, 1.0);
    assert!(cmd.cursor.unwrap().visible);

    // Typing is complete, so the cursor follows the blink phase.
    let out = eval(165);
    assert!(!out.get("command").unwrap().cursor.unwrap().visible);
}

#[test]
fn image_replaces_command_then_slides_left() {
    let out = eval(162);
    assert_eq!(opacity(&out, "image"), 1.0);
    assert_eq!(opacity(&out, "command"), 0.0);
    assert_eq!(out.get("image").unwrap().asset.as_deref(), Some("ls-pipe.png"));

    assert_eq!(eval(217).get("image").unwrap().translate.x, 0.0);
    let x = eval(300).get("image").unwrap().translate.x;
    assert!((x + 1400.0).abs() < 1.0);
}

#[test]
fn features_are_staggered() {
    let out = eval(246);
    assert_eq!(opacity(&out, "features.0"), 1.0);
    assert!((opacity(&out, "features.1") - 7.0 / 15.0).abs() < 1e-9);
    assert_eq!(opacity(&out, "features.2"), 0.0);
    assert_eq!(out.get("features.2").unwrap().text.as_deref(), Some("Written in Rust."));

    assert_eq!(opacity(&eval(300), "features"), 1.0);
    assert_eq!(opacity(&eval(336), "features"), 0.0);
}

#[test]
fn outro_fades_in_logo_then_url() {
    let out = eval(356);
    assert_eq!(opacity(&out, "outro.logo"), 1.0);
    assert!((opacity(&out, "outro.url") - 0.2).abs() < 1e-9);
    let out = eval(449);
    assert_eq!(opacity(&out, "outro.url"), 1.0);
    assert_eq!(out.get("outro.url").unwrap().text.as_deref(), Some("https://rustxl.com/"));
}
