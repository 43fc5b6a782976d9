use crate::animation::spring::SpringMotion;
use crate::animation::timeline::{PhaseKey, Timeline};
use crate::foundation::core::{FrameIndex, Vec2};
use crate::scene::config::SceneConfig;
use crate::scene::logo::write_logo_card;
use crate::scene::model::{ElementProps, Elements, Tilt};
use crate::scene::promo::Promo;

/// Sequences played back to back by the master composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MasterPhase {
    Promo,
    LogoCard,
}

impl PhaseKey for MasterPhase {
    const ORDER: &'static [Self] = &[Self::Promo, Self::LogoCard];

    fn name(self) -> &'static str {
        match self {
            Self::Promo => "promo",
            Self::LogoCard => "logo_card",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Tilted stage sliding in, hosting the promo then the logo card.
#[derive(Clone, Debug)]
pub struct Master<'a> {
    cfg: &'a SceneConfig,
    series: Timeline<MasterPhase>,
}

impl<'a> Master<'a> {
    pub fn new(cfg: &'a SceneConfig) -> Self {
        let series = Timeline::build(FrameIndex(0), |phase| match phase {
            MasterPhase::Promo => cfg.master.terminal_frames,
            MasterPhase::LogoCard => cfg.master.logo_frames,
        });
        Self { cfg, series }
    }

    pub fn series(&self) -> &Timeline<MasterPhase> {
        &self.series
    }

    /// Sequence playing at `frame` and its local frame.
    pub fn active(&self, frame: FrameIndex) -> Option<(MasterPhase, FrameIndex)> {
        self.series
            .markers()
            .iter()
            .find(|m| m.start <= frame && frame < m.end())
            .map(|m| (m.key, FrameIndex(frame.0 - m.start.0)))
    }

    pub fn write(&self, frame: FrameIndex, out: &mut Elements) {
        let m = &self.cfg.master;
        let slide_in = SpringMotion {
            config: self.cfg.spring,
            start: FrameIndex(0),
            distance: 1.0,
        };
        let y = (1.0 - slide_in.offset(frame, self.cfg.fps)) * m.slide_distance;

        let mut child = Elements::new();
        match self.active(frame) {
            Some((MasterPhase::Promo, local)) => Promo::new(self.cfg).write(local, &mut child),
            Some((MasterPhase::LogoCard, _)) => write_logo_card(&m.logo_asset, &mut child),
            None => {}
        }
        child.adopt("stage");

        out.insert(
            "stage",
            ElementProps::new(0)
                .translate(Vec2::new(0.0, y))
                .tilt(Tilt {
                    x_deg: m.rotate_x_deg,
                    y_deg: m.rotate_y_deg,
                }),
        );
        out.extend(child);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/master.rs"]
mod tests;
