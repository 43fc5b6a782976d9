use crate::animation::interp::{Extrapolate, Span};
use crate::animation::reveal::{LineReveal, TypedText, cursor_visible};
use crate::foundation::core::{Fps, FrameIndex};
use crate::scene::config::TerminalConfig;
use crate::scene::model::{CursorProps, ElementProps, Elements};

/// State of the simulated terminal session at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalState<'a> {
    /// Typed prefix of the command.
    pub command: &'a str,
    pub typing_complete: bool,
    /// Output lines printed so far.
    pub output: &'a [String],
    pub output_complete: bool,
    /// Font size shrinks as output fills the window.
    pub font_size: f64,
    /// Cursor on the command line; shown while typing and until output starts.
    pub command_cursor: bool,
    /// Cursor on the trailing prompt; `None` until output starts, blinks once output is complete.
    pub tail_cursor: Option<bool>,
}

impl TerminalState<'_> {
    pub fn cursor_size(&self) -> (f64, f64) {
        (self.font_size * 0.5, self.font_size * 1.2)
    }

    pub fn line_height(&self) -> f64 {
        self.font_size * 1.5
    }
}

/// Terminal window content, evaluated in its own local frame.
#[derive(Clone, Copy, Debug)]
pub struct TerminalContent<'a> {
    cfg: &'a TerminalConfig,
}

impl<'a> TerminalContent<'a> {
    pub fn new(cfg: &'a TerminalConfig) -> Self {
        Self { cfg }
    }

    fn typed(&self) -> TypedText<'a> {
        TypedText::new(&self.cfg.command, self.cfg.chars_per_second, FrameIndex(0))
    }

    fn output(&self) -> LineReveal<'a, String> {
        LineReveal::new(
            &self.cfg.output_lines,
            self.typed(),
            self.cfg.output_delay_ms,
            self.cfg.ms_per_line,
        )
    }

    /// First local frame at which every output line is visible.
    pub fn settle_frame(&self, fps: Fps) -> FrameIndex {
        self.output().complete_at(fps)
    }

    pub fn state(&self, frame: FrameIndex, fps: Fps) -> TerminalState<'a> {
        let typed = self.typed();
        let output = self.output();

        let typing_complete = typed.is_complete(frame, fps);
        let shown = output.visible_count(frame, fps);
        let output_complete = shown >= output.len();

        let font_size = if output.is_empty() {
            self.cfg.font_size_start
        } else {
            Span::clamped(
                0.0,
                output.len() as f64,
                self.cfg.font_size_start,
                self.cfg.font_size_end,
            )
            .with_left(Extrapolate::Extend)
            .sample(shown as f64)
        };

        TerminalState {
            command: typed.visible(frame, fps),
            typing_complete,
            output: output.visible(frame, fps),
            output_complete,
            font_size,
            command_cursor: !typing_complete || shown == 0,
            tail_cursor: (shown > 0).then(|| cursor_visible(output_complete, frame, fps)),
        }
    }

    /// Write the terminal content elements under `parent`.
    pub fn write(&self, frame: FrameIndex, fps: Fps, parent: &str, out: &mut Elements) {
        let state = self.state(frame, fps);
        let (cursor_w, cursor_h) = state.cursor_size();
        let cursor = |visible| CursorProps {
            visible,
            width: cursor_w,
            height: cursor_h,
        };

        let content_id = format!("{parent}.content");
        out.insert(
            content_id.as_str(),
            ElementProps::new(0)
                .child_of(parent)
                .font_size(state.font_size),
        );

        let mut prompt = ElementProps::new(0)
            .child_of(&content_id)
            .label(self.cfg.prompt.as_str())
            .text(state.command);
        if state.command_cursor {
            prompt = prompt.cursor(cursor(true));
        }
        out.insert(format!("{parent}.prompt"), prompt);

        out.insert(
            format!("{parent}.output"),
            ElementProps::new(1)
                .child_of(&content_id)
                .line_height(state.line_height())
                .lines(state.output.to_vec()),
        );

        if let Some(visible) = state.tail_cursor {
            out.insert(
                format!("{parent}.tail"),
                ElementProps::new(2)
                    .child_of(&content_id)
                    .label(self.cfg.prompt.as_str())
                    .cursor(cursor(visible)),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/terminal.rs"]
mod tests;
