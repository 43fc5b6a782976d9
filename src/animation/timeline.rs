use std::fmt;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TermreelError, TermreelResult};

/// Key type naming the phases of a timeline in declaration order.
///
/// `index` must return the key's position in `ORDER`; for a fieldless enum this is `self as usize`.
pub trait PhaseKey: Copy + Eq + fmt::Debug + 'static {
    /// All phases, in timeline order.
    const ORDER: &'static [Self];

    /// Stable name used in diagnostics and serialized summaries.
    fn name(self) -> &'static str;

    /// Position of this key in [`PhaseKey::ORDER`].
    fn index(self) -> usize;
}

/// Resolved phase: start marker plus declared duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker<K> {
    /// Phase key.
    pub key: K,
    /// First frame of the phase.
    pub start: FrameIndex,
    /// Declared phase length in frames.
    pub frames: u64,
}

impl<K> Marker<K> {
    /// First frame after the phase.
    pub fn end(&self) -> FrameIndex {
        FrameIndex(self.start.0.saturating_add(self.frames))
    }
}

/// Serializable view of one marker.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MarkerSummary {
    /// Phase name.
    pub name: &'static str,
    /// Start frame.
    pub start: u64,
    /// End frame (exclusive).
    pub end: u64,
}

/// Linear chain of phase markers computed by folding declared durations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline<K> {
    origin: FrameIndex,
    markers: Vec<Marker<K>>,
}

impl<K: PhaseKey> Timeline<K> {
    /// Fold the phase durations (in `K::ORDER`) into start markers beginning at `origin`.
    pub fn build(origin: FrameIndex, mut duration_of: impl FnMut(K) -> u64) -> Self {
        let markers: Vec<Marker<K>> = K::ORDER
            .iter()
            .scan(origin, |cursor, &key| {
                let marker = Marker {
                    key,
                    start: *cursor,
                    frames: duration_of(key),
                };
                *cursor = marker.end();
                Some(marker)
            })
            .collect();

        tracing::debug!(
            phases = markers.len(),
            end = markers.last().map_or(origin.0, |m| m.end().0),
            "timeline built"
        );
        Self { origin, markers }
    }

    /// Start frame of phase `key`.
    pub fn start(&self, key: K) -> FrameIndex {
        self.markers
            .get(key.index())
            .map_or(self.origin, |m| m.start)
    }

    /// End frame (exclusive) of phase `key`.
    pub fn end_of(&self, key: K) -> FrameIndex {
        self.markers
            .get(key.index())
            .map_or(self.origin, Marker::end)
    }

    /// Declared duration of phase `key`.
    pub fn frames(&self, key: K) -> u64 {
        self.markers.get(key.index()).map_or(0, |m| m.frames)
    }

    /// End of the last phase.
    pub fn end(&self) -> FrameIndex {
        self.markers.last().map_or(self.origin, Marker::end)
    }

    /// All markers in order.
    pub fn markers(&self) -> &[Marker<K>] {
        &self.markers
    }

    /// Check that phases are complete, correctly indexed, contiguous and free of overflow.
    pub fn validate(&self) -> TermreelResult<()> {
        if self.markers.len() != K::ORDER.len() {
            return Err(TermreelError::validation(format!(
                "timeline has {} markers, expected {}",
                self.markers.len(),
                K::ORDER.len()
            )));
        }
        for (i, m) in self.markers.iter().enumerate() {
            if m.start.0.checked_add(m.frames).is_none() {
                return Err(TermreelError::validation(format!(
                    "phase '{}' overflows the frame range",
                    m.key.name()
                )));
            }
            if m.key.index() != i {
                return Err(TermreelError::validation(format!(
                    "phase '{}' is declared at position {i} but indexes to {}",
                    m.key.name(),
                    m.key.index()
                )));
            }
        }
        for w in self.markers.windows(2) {
            if w[1].start < w[0].start || w[1].start != w[0].end() {
                return Err(TermreelError::validation(format!(
                    "phase '{}' must start where '{}' ends",
                    w[1].key.name(),
                    w[0].key.name()
                )));
            }
        }
        Ok(())
    }

    /// Serializable marker list.
    pub fn summary(&self) -> Vec<MarkerSummary> {
        self.markers
            .iter()
            .map(|m| MarkerSummary {
                name: m.key.name(),
                start: m.start.0,
                end: m.end().0,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
