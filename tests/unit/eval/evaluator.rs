use super::*;
use crate::scene::config::SceneConfig;

fn promo() -> Composition {
    Composition::new(CompositionId::MacOsTerminal, SceneConfig::default()).unwrap()
}

#[test]
fn out_of_bounds_frame_is_rejected() {
    let comp = promo();
    assert!(Evaluator::eval_frame(&comp, FrameIndex(449)).is_ok());
    let err = Evaluator::eval_frame(&comp, FrameIndex(450)).unwrap_err();
    assert!(matches!(err, TermreelError::Evaluation(_)));
}

#[test]
fn evaluation_is_pure() {
    let comp = promo();
    let a = Evaluator::eval_frame(&comp, FrameIndex(160)).unwrap();
    let _ = Evaluator::eval_frame(&comp, FrameIndex(10)).unwrap();
    let b = Evaluator::eval_frame(&comp, FrameIndex(160)).unwrap();
    assert_eq!(a, b);
    assert!((a.time_secs - 160.0 / 30.0).abs() < 1e-12);
}

#[test]
fn range_is_ordered_and_matches_single_frames() {
    let comp = promo();
    let range = FrameRange::new(FrameIndex(140), FrameIndex(170)).unwrap();
    let frames = Evaluator::eval_range(&comp, range).unwrap();
    assert_eq!(frames.len(), 30);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.frame, FrameIndex(140 + i as u64));
        assert_eq!(f, &Evaluator::eval_frame(&comp, f.frame).unwrap());
    }
}

#[test]
fn range_past_duration_is_rejected() {
    let comp = promo();
    let range = FrameRange::new(FrameIndex(400), FrameIndex(451)).unwrap();
    assert!(Evaluator::eval_range(&comp, range).is_err());
}

#[test]
fn effective_opacity_includes_group_fade() {
    let comp = promo();
    let f = Evaluator::eval_frame(&comp, FrameIndex(132)).unwrap();
    assert_eq!(f.effective_opacity("intro.title"), Some(0.5));
}
