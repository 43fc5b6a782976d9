use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn default_spring_is_overdamped() {
    let cfg = SpringConfig::default();
    assert!(cfg.validate().is_ok());
    assert!((cfg.damping_ratio() - 1.5).abs() < 1e-9);
}

#[test]
fn starts_at_rest_and_never_overshoots() {
    let cfg = SpringConfig::default();
    assert!(cfg.progress(0.0).abs() < 1e-12);

    let mut prev = 0.0;
    for f in 0..120u64 {
        let p = cfg.progress_at(FrameIndex(f), FrameIndex(0), fps30());
        assert!(p >= prev - 1e-12, "frame {f}: {p} < {prev}");
        assert!(p <= 1.0 + 1e-12, "frame {f} overshoots: {p}");
        prev = p;
    }
    assert!(prev > 0.999);
}

#[test]
fn inert_before_release() {
    let cfg = SpringConfig::default();
    for f in 0..=63u64 {
        assert_eq!(cfg.progress_at(FrameIndex(f), FrameIndex(63), fps30()), 0.0);
    }
    assert!(cfg.progress_at(FrameIndex(64), FrameIndex(63), fps30()) > 0.0);
}

#[test]
fn underdamped_spring_overshoots() {
    let cfg = SpringConfig {
        damping: 2.0,
        stiffness: 200.0,
        mass: 1.0,
    };
    let peak = (0..60u64)
        .map(|f| cfg.progress_at(FrameIndex(f), FrameIndex(0), fps30()))
        .fold(0.0f64, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn motion_scales_progress_by_distance() {
    let motion = SpringMotion {
        config: SpringConfig::default(),
        start: FrameIndex(10),
        distance: -1400.0,
    };
    assert_eq!(motion.offset(FrameIndex(5), fps30()), 0.0);
    let late = motion.offset(FrameIndex(100), fps30());
    assert!((late + 1400.0).abs() < 1.0);
}

#[test]
fn invalid_parameters_are_rejected() {
    let cfg = SpringConfig {
        mass: 0.0,
        ..SpringConfig::default()
    };
    assert!(cfg.validate().is_err());
}
