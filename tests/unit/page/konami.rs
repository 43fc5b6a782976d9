use super::*;
use crate::page::config::KONAMI_CODE;

fn konami() -> Konami {
    Konami::new(
        KONAMI_CODE.iter().map(|k| (*k).to_owned()).collect(),
        "You found the secret! Happy spreadsheeting!",
        300,
        3000,
        300,
    )
}

fn overlays(out: &[PageCommand]) -> usize {
    out.iter()
        .filter(|c| matches!(c, PageCommand::ShowOverlay { .. }))
        .count()
}

#[test]
fn exact_sequence_shows_one_overlay() {
    let mut k = konami();
    let mut out = Vec::new();
    let triggered: Vec<bool> = KONAMI_CODE.iter().map(|c| k.on_key(c, &mut out)).collect();
    assert_eq!(triggered.iter().filter(|t| **t).count(), 1);
    assert!(triggered[9]);
    assert_eq!(overlays(&out), 1);
    assert_eq!(k.progress(), 0);
    assert_eq!(
        out[1],
        PageCommand::StartTimer {
            timer: TimerId::OverlayExit { overlay: 0 },
            after_ms: 3000
        }
    );
}

#[test]
fn any_single_substitution_shows_nothing() {
    for pos in 0..KONAMI_CODE.len() {
        let mut k = konami();
        let mut out = Vec::new();
        for (i, code) in KONAMI_CODE.iter().enumerate() {
            let code = if i == pos { "KeyX" } else { *code };
            k.on_key(code, &mut out);
            if i == pos {
                assert_eq!(k.progress(), 0, "substitution at {pos}");
            }
        }
        assert_eq!(overlays(&out), 0, "substitution at {pos}");
        if pos == KONAMI_CODE.len() - 1 {
            assert_eq!(k.progress(), 0);
        }
    }
}

#[test]
fn mismatch_does_not_count_as_first_key() {
    let mut k = konami();
    let mut out = Vec::new();
    k.on_key("ArrowUp", &mut out);
    k.on_key("ArrowUp", &mut out);
    k.on_key("ArrowUp", &mut out);
    assert_eq!(k.progress(), 0);
}

#[test]
fn overlay_lifecycle_uses_exit_transition() {
    let mut k = konami();
    let mut out = Vec::new();
    for code in KONAMI_CODE {
        k.on_key(code, &mut out);
    }
    out.clear();
    k.on_exit(0, &mut out);
    assert_eq!(
        out,
        vec![
            PageCommand::HideOverlay {
                overlay: 0,
                exit_ms: 300
            },
            PageCommand::StartTimer {
                timer: TimerId::OverlayRemove { overlay: 0 },
                after_ms: 300
            },
        ]
    );
    out.clear();
    k.on_remove(0, &mut out);
    assert_eq!(out, vec![PageCommand::RemoveOverlay { overlay: 0 }]);

    out.clear();
    for code in KONAMI_CODE {
        k.on_key(code, &mut out);
    }
    assert!(matches!(out[0], PageCommand::ShowOverlay { overlay: 1, .. }));
}

#[test]
fn stale_or_unknown_overlay_timers_are_ignored() {
    let mut k = konami();
    let mut out = Vec::new();
    k.on_exit(7, &mut out);
    k.on_remove(7, &mut out);
    assert!(out.is_empty());

    for code in KONAMI_CODE {
        k.on_key(code, &mut out);
    }
    assert_eq!(k.live_overlays(), 1);
    out.clear();

    // Remove before exit does nothing.
    k.on_remove(0, &mut out);
    assert!(out.is_empty());

    k.on_exit(0, &mut out);
    assert_eq!(out.len(), 2);
    out.clear();
    k.on_exit(0, &mut out);
    assert!(out.is_empty());

    k.on_remove(0, &mut out);
    k.on_remove(0, &mut out);
    assert_eq!(out, vec![PageCommand::RemoveOverlay { overlay: 0 }]);
    assert_eq!(k.live_overlays(), 0);
}
