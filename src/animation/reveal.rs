//! Time-driven text reveal: typed prefixes, line-by-line output and blinking cursors.
//!
//! Reveal speed is defined in real time (`frame / fps`), so the same scene types at the same
//! pace at any frame rate. Arithmetic is done on the rational fps to keep frame boundaries exact.

use crate::foundation::core::{Fps, FrameIndex};

/// A string typed out at a fixed rate starting at a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypedText<'a> {
    text: &'a str,
    chars_per_second: u32,
    start: FrameIndex,
}

impl<'a> TypedText<'a> {
    /// Type `text` at `chars_per_second`, beginning at `start`.
    pub fn new(text: &'a str, chars_per_second: u32, start: FrameIndex) -> Self {
        Self {
            text,
            chars_per_second,
            start,
        }
    }

    /// Full target string.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Typing rate in characters per second.
    pub fn chars_per_second(&self) -> u32 {
        self.chars_per_second
    }

    /// Length of the target string in characters.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Unclamped `floor(elapsed_secs * rate)`; zero before `start`.
    pub fn chars_to_show(&self, frame: FrameIndex, fps: Fps) -> u64 {
        let elapsed = u128::from(frame.since(self.start));
        let n = elapsed * u128::from(self.chars_per_second) * u128::from(fps.den);
        u64::try_from(n / u128::from(fps.num.max(1))).unwrap_or(u64::MAX)
    }

    /// Visible prefix at `frame`, never longer than the target.
    pub fn visible(&self, frame: FrameIndex, fps: Fps) -> &'a str {
        let n = self.chars_to_show(frame, fps);
        match self.text.char_indices().nth(usize::try_from(n).unwrap_or(usize::MAX)) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => self.text,
        }
    }

    /// `true` once every character is shown.
    pub fn is_complete(&self, frame: FrameIndex, fps: Fps) -> bool {
        self.chars_to_show(frame, fps) >= self.len_chars() as u64
    }

    /// Frames needed to type the whole string: `ceil(len / rate * fps)`.
    ///
    /// A zero rate never completes and reports `u64::MAX`.
    pub fn duration_frames(&self, fps: Fps) -> u64 {
        let denom = u128::from(self.chars_per_second) * u128::from(fps.den);
        if denom == 0 {
            return u64::MAX;
        }
        let num = self.len_chars() as u128 * u128::from(fps.num);
        u64::try_from(num.div_ceil(denom)).unwrap_or(u64::MAX)
    }

    /// First frame at which the string is complete.
    pub fn complete_at(&self, fps: Fps) -> FrameIndex {
        FrameIndex(self.start.0.saturating_add(self.duration_frames(fps)))
    }
}

/// Lines revealed one at a time after a [`TypedText`] finishes plus a delay.
#[derive(Clone, Copy, Debug)]
pub struct LineReveal<'a, S> {
    lines: &'a [S],
    after: TypedText<'a>,
    delay_ms: u32,
    ms_per_line: u32,
}

impl<'a, S: AsRef<str>> LineReveal<'a, S> {
    /// Reveal `lines` every `ms_per_line`, starting `delay_ms` after `after` finishes typing.
    pub fn new(lines: &'a [S], after: TypedText<'a>, delay_ms: u32, ms_per_line: u32) -> Self {
        Self {
            lines,
            after,
            delay_ms,
            ms_per_line,
        }
    }

    /// Number of visible lines: `floor(elapsed_ms / ms_per_line) + 1` once elapsed is positive.
    pub fn visible_count(&self, frame: FrameIndex, fps: Fps) -> usize {
        // Every term is scaled by `fps.num * rate` so the comparison stays exact.
        let num = i128::from(fps.num.max(1));
        let den = i128::from(fps.den);
        let rate = i128::from(self.after.chars_per_second);
        if rate == 0 {
            return 0;
        }
        let elapsed = i128::from(frame.since(self.after.start));
        let len = self.after.len_chars() as i128;

        let now = elapsed * 1000 * den * rate;
        let typed = len * 1000 * num;
        let delay = i128::from(self.delay_ms) * num * rate;
        let since = now - typed - delay;
        if since <= 0 {
            return 0;
        }

        let step = i128::from(self.ms_per_line) * num * rate;
        let count = if step == 0 {
            self.lines.len() as i128
        } else {
            since / step + 1
        };
        usize::try_from(count.min(self.lines.len() as i128)).unwrap_or(0)
    }

    /// First frame at which every line is visible.
    pub fn complete_at(&self, fps: Fps) -> FrameIndex {
        let start = self.after.start;
        if self.lines.is_empty() {
            return start;
        }
        let num = i128::from(fps.num.max(1));
        let den = i128::from(fps.den);
        let rate = i128::from(self.after.chars_per_second);
        if rate == 0 || den == 0 {
            return FrameIndex(u64::MAX);
        }
        let len = self.after.len_chars() as i128;
        let typed = len * 1000 * num;
        let delay = i128::from(self.delay_ms) * num * rate;
        let step = i128::from(self.ms_per_line) * num * rate;
        let remaining = self.lines.len() as i128 - 1;

        let needed = typed + delay + (remaining * step).max(1);
        let per_frame = 1000 * den * rate;
        let frames = (needed + per_frame - 1) / per_frame;
        FrameIndex(start.0.saturating_add(u64::try_from(frames).unwrap_or(u64::MAX)))
    }

    /// Visible lines at `frame`.
    pub fn visible(&self, frame: FrameIndex, fps: Fps) -> &'a [S] {
        &self.lines[..self.visible_count(frame, fps)]
    }

    /// `true` when every line is visible.
    pub fn is_complete(&self, frame: FrameIndex, fps: Fps) -> bool {
        self.visible_count(frame, fps) >= self.lines.len()
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` when there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Blink phase: on for half a second, off for half a second (`floor(frame / (fps/2)) % 2 == 0`).
pub fn blink_on(frame: FrameIndex, fps: Fps) -> bool {
    let half_periods =
        u128::from(frame.0) * 2 * u128::from(fps.den) / u128::from(fps.num.max(1));
    half_periods % 2 == 0
}

/// Cursor visibility: solid until `settled`, blinking afterwards.
pub fn cursor_visible(settled: bool, frame: FrameIndex, fps: Fps) -> bool {
    !settled || blink_on(frame, fps)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
