use crate::page::document::{CopyButton, ElementId};
use crate::page::event::{Icon, PageCommand, TimerId};

#[derive(Clone, Debug)]
struct ButtonState {
    id: ElementId,
    text: Option<String>,
    /// Bumped on every successful copy; only the newest reset timer applies.
    generation: u64,
    copied: bool,
}

/// Copy-to-clipboard buttons with timed "copied" feedback.
#[derive(Clone, Debug)]
pub struct CopyButtons {
    buttons: Vec<ButtonState>,
    class: String,
    feedback_ms: u64,
}

impl CopyButtons {
    pub fn new(buttons: Vec<CopyButton>, class: impl Into<String>, feedback_ms: u64) -> Self {
        Self {
            buttons: buttons
                .into_iter()
                .map(|b| ButtonState {
                    id: b.id,
                    text: b.copy.filter(|t| !t.is_empty()),
                    generation: 0,
                    copied: false,
                })
                .collect(),
            class: class.into(),
            feedback_ms,
        }
    }

    pub fn is_copied(&self, button: &ElementId) -> bool {
        self.buttons.iter().any(|b| &b.id == button && b.copied)
    }

    /// Request a clipboard write for the clicked button, if it has text.
    pub fn on_click(&self, path: &[ElementId], out: &mut Vec<PageCommand>) {
        let Some(button) = self.buttons.iter().find(|b| path.contains(&b.id)) else {
            return;
        };
        if let Some(text) = &button.text {
            out.push(PageCommand::WriteClipboard {
                button: button.id.clone(),
                text: text.clone(),
            });
        }
    }

    /// Apply the outcome of a clipboard write. Failures are logged and show no feedback.
    pub fn on_written(
        &mut self,
        button: &ElementId,
        error: Option<&str>,
        out: &mut Vec<PageCommand>,
    ) {
        if let Some(error) = error {
            tracing::error!(button = %button, error, "failed to copy");
            return;
        }
        let Some(state) = self.buttons.iter_mut().find(|b| &b.id == button) else {
            return;
        };
        state.generation += 1;
        if !state.copied {
            state.copied = true;
            out.push(PageCommand::add_class(&state.id, &self.class));
            out.push(PageCommand::SetIcon {
                element: state.id.clone(),
                icon: Icon::Check,
            });
        }
        out.push(PageCommand::StartTimer {
            timer: TimerId::CopyReset {
                button: state.id.clone(),
                generation: state.generation,
            },
            after_ms: self.feedback_ms,
        });
    }

    /// Revert the feedback if `generation` is still the button's latest copy.
    pub fn on_reset(&mut self, button: &ElementId, generation: u64, out: &mut Vec<PageCommand>) {
        let Some(state) = self.buttons.iter_mut().find(|b| &b.id == button) else {
            return;
        };
        if state.generation != generation || !state.copied {
            return;
        }
        state.copied = false;
        out.push(PageCommand::remove_class(&state.id, &self.class));
        out.push(PageCommand::SetIcon {
            element: state.id.clone(),
            icon: Icon::Copy,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/copy.rs"]
mod tests;
