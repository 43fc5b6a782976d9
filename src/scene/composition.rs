use std::fmt;
use std::str::FromStr;

use crate::animation::timeline::MarkerSummary;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{TermreelError, TermreelResult};
use crate::scene::config::SceneConfig;
use crate::scene::logo::write_logo_card;
use crate::scene::master::Master;
use crate::scene::model::Elements;
use crate::scene::promo::Promo;

/// Registered composition identifiers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum CompositionId {
    /// Terminal session followed by the promo sequence.
    #[serde(rename = "MacOSTerminal")]
    MacOsTerminal,
    /// Static logo card.
    Logo,
    /// Tilted stage playing the promo then the logo card.
    Master,
}

impl CompositionId {
    pub const ALL: [Self; 3] = [Self::MacOsTerminal, Self::Logo, Self::Master];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MacOsTerminal => "MacOSTerminal",
            Self::Logo => "Logo",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for CompositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompositionId {
    type Err = TermreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TermreelError::validation(format!("unknown composition '{s}'")))
    }
}

/// A composition as registered with the rendering host: id, fps, canvas, duration and scene.
#[derive(Clone, Debug)]
pub struct Composition {
    id: CompositionId,
    duration: FrameIndex,
    config: SceneConfig,
}

impl Composition {
    /// Build composition `id` from a validated configuration.
    pub fn new(id: CompositionId, config: SceneConfig) -> TermreelResult<Self> {
        config.validate()?;
        let duration = match id {
            CompositionId::MacOsTerminal => config.promo.duration_frames,
            CompositionId::Logo => config.master.logo_frames,
            CompositionId::Master => config
                .master
                .terminal_frames
                .saturating_add(config.master.logo_frames),
        };
        if duration == 0 {
            return Err(TermreelError::validation(format!(
                "composition '{id}' has no frames"
            )));
        }
        Ok(Self {
            id,
            duration: FrameIndex(duration),
            config,
        })
    }

    /// Every composition the crate registers, sharing one configuration.
    pub fn registry(config: &SceneConfig) -> TermreelResult<Vec<Self>> {
        CompositionId::ALL
            .into_iter()
            .map(|id| Self::new(id, config.clone()))
            .collect()
    }

    pub fn id(&self) -> CompositionId {
        self.id
    }

    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    /// Declared duration in frames.
    pub fn duration(&self) -> FrameIndex {
        self.duration
    }

    /// `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Phase markers of the composition's top-level timeline.
    pub fn markers(&self) -> Vec<MarkerSummary> {
        match self.id {
            CompositionId::MacOsTerminal => Promo::new(&self.config).timeline().summary(),
            CompositionId::Master => Master::new(&self.config).series().summary(),
            CompositionId::Logo => vec![MarkerSummary {
                name: "logo_card",
                start: 0,
                end: self.duration.0,
            }],
        }
    }

    /// Write all element properties for `frame`. Frames are not bounds-checked here.
    pub fn write(&self, frame: FrameIndex, out: &mut Elements) {
        match self.id {
            CompositionId::MacOsTerminal => Promo::new(&self.config).write(frame, out),
            CompositionId::Logo => write_logo_card(&self.config.master.logo_asset, out),
            CompositionId::Master => Master::new(&self.config).write(frame, out),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
