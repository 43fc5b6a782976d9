use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(30000, 1001).is_ok());
}

#[test]
fn fps_conversions() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.as_f64(), 30.0);
    assert!((fps.frames_to_secs(15) - 0.5).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_ceil(0.275), 9);
}

#[test]
fn frame_range_contains_is_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        r.frames().collect::<Vec<_>>(),
        vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
}

#[test]
fn frame_range_rejects_reversed_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn since_saturates_before_marker() {
    assert_eq!(FrameIndex(3).since(FrameIndex(10)), 0);
    assert_eq!(FrameIndex(12).since(FrameIndex(10)), 2);
}
