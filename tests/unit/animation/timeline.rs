use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    Intro,
    Hold,
    Outro,
}

impl PhaseKey for Demo {
    const ORDER: &'static [Self] = &[Self::Intro, Self::Hold, Self::Outro];

    fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Hold => "hold",
            Self::Outro => "outro",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

fn durations(k: Demo) -> u64 {
    match k {
        Demo::Intro => 10,
        Demo::Hold => 0,
        Demo::Outro => 5,
    }
}

#[test]
fn fold_chains_markers() {
    let t = Timeline::build(FrameIndex(3), durations);
    assert_eq!(t.start(Demo::Intro), FrameIndex(3));
    assert_eq!(t.start(Demo::Hold), FrameIndex(13));
    assert_eq!(t.start(Demo::Outro), FrameIndex(13));
    assert_eq!(t.end_of(Demo::Outro), FrameIndex(18));
    assert_eq!(t.end(), FrameIndex(18));
    assert_eq!(t.frames(Demo::Intro), 10);
}

#[test]
fn built_timelines_validate() {
    let t = Timeline::build(FrameIndex(0), durations);
    assert!(t.validate().is_ok());
    for w in t.markers().windows(2) {
        assert!(w[0].start <= w[1].start);
        assert_eq!(w[0].end(), w[1].start);
    }
}

#[test]
fn summary_lists_names_in_order() {
    let t = Timeline::build(FrameIndex(0), durations);
    let names: Vec<_> = t.summary().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["intro", "hold", "outro"]);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Swapped {
    First,
    Second,
}

impl PhaseKey for Swapped {
    const ORDER: &'static [Self] = &[Self::First, Self::Second];

    fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::First => 1,
            Self::Second => 0,
        }
    }
}

#[test]
fn mis_indexed_keys_fail_validation() {
    let t = Timeline::build(FrameIndex(0), |_: Swapped| 4);
    let err = t.validate().unwrap_err();
    assert!(err.to_string().contains("first"));
}

#[test]
fn overflowing_phase_fails_validation() {
    let t = Timeline::build(FrameIndex(10), |k| match k {
        Demo::Hold => u64::MAX,
        _ => 1,
    });
    assert_eq!(t.end(), FrameIndex(u64::MAX));
    assert!(t.validate().is_err());
}
