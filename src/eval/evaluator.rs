use rayon::prelude::*;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{TermreelError, TermreelResult};
use crate::scene::composition::{Composition, CompositionId};
use crate::scene::model::Elements;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every element's rendering properties at one frame.
pub struct EvaluatedFrame {
    /// Composition that produced the frame.
    pub composition: CompositionId,
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// `frame / fps`, for hosts that schedule by time.
    pub time_secs: f64,
    /// Element id -> properties.
    pub elements: Elements,
}

impl EvaluatedFrame {
    /// Opacity of `id` including every ancestor.
    pub fn effective_opacity(&self, id: &str) -> Option<f64> {
        self.elements.effective_opacity(id)
    }
}

/// Stateless evaluator from composition timeline to per-frame properties.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp), fields(composition = %comp.id()))]
    /// Evaluate one frame. Fails only when `frame` is outside the composition.
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> TermreelResult<EvaluatedFrame> {
        if frame >= comp.duration() {
            return Err(TermreelError::evaluation(format!(
                "frame {} is out of bounds for '{}' ({} frames)",
                frame.0,
                comp.id(),
                comp.duration().0
            )));
        }

        let mut elements = Elements::new();
        comp.write(frame, &mut elements);
        tracing::trace!(elements = elements.len(), "frame evaluated");

        Ok(EvaluatedFrame {
            composition: comp.id(),
            frame,
            time_secs: comp.fps().frames_to_secs(frame.0),
            elements,
        })
    }

    #[tracing::instrument(skip(comp), fields(composition = %comp.id()))]
    /// Evaluate `range` in parallel; results are in timeline order.
    pub fn eval_range(
        comp: &Composition,
        range: FrameRange,
    ) -> TermreelResult<Vec<EvaluatedFrame>> {
        if range.end > comp.duration() {
            return Err(TermreelError::evaluation(format!(
                "range end {} exceeds '{}' duration {}",
                range.end.0,
                comp.id(),
                comp.duration().0
            )));
        }

        let frames: Vec<FrameIndex> = range.frames().collect();
        let out = frames
            .par_iter()
            .map(|&f| Self::eval_frame(comp, f))
            .collect::<TermreelResult<Vec<_>>>()?;
        tracing::debug!(frames = out.len(), "range evaluated");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
