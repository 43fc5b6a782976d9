use std::collections::BTreeSet;

use crate::page::event::{PageCommand, TimerId};

/// Key-sequence easter egg with a timed overlay.
#[derive(Clone, Debug)]
pub struct Konami {
    sequence: Vec<String>,
    index: usize,
    next_overlay: u64,
    /// Overlays shown and not yet exiting.
    showing: BTreeSet<u64>,
    /// Overlays playing their exit transition.
    exiting: BTreeSet<u64>,
    message: String,
    enter_ms: u64,
    visible_ms: u64,
    exit_ms: u64,
}

impl Konami {
    pub fn new(
        sequence: Vec<String>,
        message: impl Into<String>,
        enter_ms: u64,
        visible_ms: u64,
        exit_ms: u64,
    ) -> Self {
        Self {
            sequence,
            index: 0,
            next_overlay: 0,
            showing: BTreeSet::new(),
            exiting: BTreeSet::new(),
            message: message.into(),
            enter_ms,
            visible_ms,
            exit_ms,
        }
    }

    /// Overlays currently on screen, including those exiting.
    pub fn live_overlays(&self) -> usize {
        self.showing.len() + self.exiting.len()
    }

    /// Keys matched so far.
    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feed one key code. Returns `true` when it completes the sequence.
    ///
    /// A mismatch resets progress to zero; the mismatching key is not re-tried as a first key.
    pub fn on_key(&mut self, code: &str, out: &mut Vec<PageCommand>) -> bool {
        if self.sequence.get(self.index).is_none_or(|k| k != code) {
            self.index = 0;
            return false;
        }
        self.index += 1;
        if self.index < self.sequence.len() {
            return false;
        }
        self.index = 0;

        let overlay = self.next_overlay;
        self.next_overlay += 1;
        self.showing.insert(overlay);
        tracing::debug!(overlay, "easter egg triggered");
        out.push(PageCommand::ShowOverlay {
            overlay,
            message: self.message.clone(),
            enter_ms: self.enter_ms,
        });
        out.push(PageCommand::StartTimer {
            timer: TimerId::OverlayExit { overlay },
            after_ms: self.visible_ms,
        });
        true
    }

    /// Start the exit transition; ignored unless `overlay` is still showing.
    pub fn on_exit(&mut self, overlay: u64, out: &mut Vec<PageCommand>) {
        if !self.showing.remove(&overlay) {
            return;
        }
        self.exiting.insert(overlay);
        out.push(PageCommand::HideOverlay {
            overlay,
            exit_ms: self.exit_ms,
        });
        out.push(PageCommand::StartTimer {
            timer: TimerId::OverlayRemove { overlay },
            after_ms: self.exit_ms,
        });
    }

    /// Remove the overlay; ignored unless it is exiting.
    pub fn on_remove(&mut self, overlay: u64, out: &mut Vec<PageCommand>) {
        if self.exiting.remove(&overlay) {
            out.push(PageCommand::RemoveOverlay { overlay });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/konami.rs"]
mod tests;
