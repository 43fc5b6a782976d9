//! The terminal promo: install session, intro text, typed command, screenshot, features, outro.

use crate::animation::interp::fade;
use crate::animation::reveal::{TypedText, cursor_visible};
use crate::animation::spring::{SpringConfig, SpringMotion};
use crate::animation::timeline::{PhaseKey, Timeline};
use crate::foundation::core::{Fps, FrameIndex, Vec2};
use crate::scene::config::{PromoConfig, SceneConfig};
use crate::scene::model::{CursorProps, ElementProps, Elements};
use crate::scene::terminal::TerminalContent;

const TITLE_FADE_FRAMES: u64 = 20;
const INTRO_FADE_OUT_FRAMES: u64 = 10;
const COMMAND_FADE_FRAMES: u64 = 5;
const IMAGE_FADE_FRAMES: u64 = 5;
const FEATURE_FADE_OUT_FRAMES: u64 = 10;
const LOGO_FADE_FRAMES: u64 = 15;
const URL_DELAY_FRAMES: u64 = 12;
const URL_FADE_FRAMES: u64 = 15;

const TITLE_FONT_PX: f64 = 72.0;
const SUBTITLE_FONT_PX: f64 = 36.0;
const COMMAND_FONT_PX: f64 = 64.0;
const FEATURE_FONT_PX: f64 = 56.0;
const URL_FONT_PX: f64 = 36.0;
const COMMAND_CURSOR: (f64, f64) = (32.0, 72.0);

/// Phases of the promo, in timeline order. Each key names what starts at its marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PromoPhase {
    TerminalSession,
    OutputHold,
    TerminalExit,
    TitleFadeIn,
    SubtitleFadeIn,
    IntroHold,
    IntroFadeOut,
    CommandTyping,
    ImageDelay,
    ImageShow,
    ImageExit,
    FeatureReveal,
    FeatureHold,
    FeatureFadeOut,
    Outro,
}

impl PhaseKey for PromoPhase {
    const ORDER: &'static [Self] = &[
        Self::TerminalSession,
        Self::OutputHold,
        Self::TerminalExit,
        Self::TitleFadeIn,
        Self::SubtitleFadeIn,
        Self::IntroHold,
        Self::IntroFadeOut,
        Self::CommandTyping,
        Self::ImageDelay,
        Self::ImageShow,
        Self::ImageExit,
        Self::FeatureReveal,
        Self::FeatureHold,
        Self::FeatureFadeOut,
        Self::Outro,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::TerminalSession => "terminal_session",
            Self::OutputHold => "output_hold",
            Self::TerminalExit => "terminal_exit",
            Self::TitleFadeIn => "title_fade_in",
            Self::SubtitleFadeIn => "subtitle_fade_in",
            Self::IntroHold => "intro_hold",
            Self::IntroFadeOut => "intro_fade_out",
            Self::CommandTyping => "command_typing",
            Self::ImageDelay => "image_delay",
            Self::ImageShow => "image_show",
            Self::ImageExit => "image_exit",
            Self::FeatureReveal => "feature_reveal",
            Self::FeatureHold => "feature_hold",
            Self::FeatureFadeOut => "feature_fade_out",
            Self::Outro => "outro",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Build the promo timeline for `cfg` at `fps`.
pub fn promo_timeline(cfg: &PromoConfig, fps: Fps) -> Timeline<PromoPhase> {
    let typing = TypedText::new(
        &cfg.standalone_command,
        cfg.command_chars_per_second,
        FrameIndex(0),
    );
    Timeline::build(FrameIndex(0), |phase| match phase {
        PromoPhase::TerminalSession => cfg.output_complete_frame,
        PromoPhase::OutputHold => cfg.exit_delay_frames,
        PromoPhase::TerminalExit => cfg.title_delay_frames,
        PromoPhase::TitleFadeIn => cfg.subtitle_delay_frames,
        PromoPhase::SubtitleFadeIn => cfg.subtitle_fade_frames,
        PromoPhase::IntroHold => cfg.intro_hold_frames,
        PromoPhase::IntroFadeOut => cfg.command_delay_frames,
        PromoPhase::CommandTyping => typing.duration_frames(fps),
        PromoPhase::ImageDelay => cfg.image_delay_frames,
        PromoPhase::ImageShow => cfg.image_display_frames,
        PromoPhase::ImageExit => cfg.feature_delay_frames,
        PromoPhase::FeatureReveal => cfg.feature_reveal_frames(),
        PromoPhase::FeatureHold => cfg.feature_display_frames,
        PromoPhase::FeatureFadeOut => cfg.logo_delay_frames,
        PromoPhase::Outro => URL_DELAY_FRAMES + URL_FADE_FRAMES,
    })
}

/// Promo composition evaluator.
#[derive(Clone, Debug)]
pub struct Promo<'a> {
    cfg: &'a SceneConfig,
    timeline: Timeline<PromoPhase>,
}

impl<'a> Promo<'a> {
    pub fn new(cfg: &'a SceneConfig) -> Self {
        Self {
            cfg,
            timeline: promo_timeline(&cfg.promo, cfg.fps),
        }
    }

    pub fn timeline(&self) -> &Timeline<PromoPhase> {
        &self.timeline
    }

    fn spring(&self) -> SpringConfig {
        self.cfg.spring
    }

    /// Write every promo element for local `frame`.
    pub fn write(&self, frame: FrameIndex, out: &mut Elements) {
        self.write_intro(frame, out);
        self.write_command(frame, out);
        self.write_image(frame, out);
        self.write_features(frame, out);
        self.write_outro(frame, out);
        self.write_terminal(frame, out);
    }

    fn write_terminal(&self, frame: FrameIndex, out: &mut Elements) {
        let fps = self.cfg.fps;
        let exit = SpringMotion {
            config: self.spring(),
            start: self.timeline.start(PromoPhase::TerminalExit),
            distance: self.cfg.promo.terminal_exit_distance,
        };
        out.insert(
            "terminal",
            ElementProps::new(1)
                .label(self.cfg.terminal.title.as_str())
                .translate(Vec2::new(0.0, exit.offset(frame, fps))),
        );
        TerminalContent::new(&self.cfg.terminal).write(frame, fps, "terminal", out);
    }

    fn write_intro(&self, frame: FrameIndex, out: &mut Elements) {
        let p = &self.cfg.promo;
        let t = &self.timeline;
        let title_start = t.start(PromoPhase::TitleFadeIn);
        let subtitle_start = t.start(PromoPhase::SubtitleFadeIn);
        let fade_out_start = t.start(PromoPhase::IntroFadeOut);

        out.insert(
            "intro",
            ElementProps::new(0).opacity(fade(
                frame,
                fade_out_start,
                INTRO_FADE_OUT_FRAMES,
                1.0,
                0.0,
            )),
        );
        out.insert(
            "intro.title",
            ElementProps::new(0)
                .child_of("intro")
                .text(p.title.as_str())
                .font_size(TITLE_FONT_PX)
                .opacity(fade(frame, title_start, TITLE_FADE_FRAMES, 0.0, 1.0)),
        );
        out.insert(
            "intro.subtitle",
            ElementProps::new(1)
                .child_of("intro")
                .text(p.subtitle.as_str())
                .font_size(SUBTITLE_FONT_PX)
                .opacity(fade(frame, subtitle_start, p.subtitle_fade_frames, 0.0, 1.0)),
        );
    }

    fn write_command(&self, frame: FrameIndex, out: &mut Elements) {
        let fps = self.cfg.fps;
        let p = &self.cfg.promo;
        let start = self.timeline.start(PromoPhase::CommandTyping);
        let image_start = self.timeline.start(PromoPhase::ImageShow);

        let typed = TypedText::new(&p.standalone_command, p.command_chars_per_second, start);
        let fade_in = fade(frame, start, COMMAND_FADE_FRAMES, 0.0, 1.0);
        let fade_out = fade(frame, image_start, IMAGE_FADE_FRAMES, 1.0, 0.0);

        out.insert(
            "command",
            ElementProps::new(0)
                .text(typed.visible(frame, fps))
                .font_size(COMMAND_FONT_PX)
                .opacity(fade_in * fade_out)
                .cursor(CursorProps {
                    visible: cursor_visible(typed.is_complete(frame, fps), frame, fps),
                    width: COMMAND_CURSOR.0,
                    height: COMMAND_CURSOR.1,
                }),
        );
    }

    fn write_image(&self, frame: FrameIndex, out: &mut Elements) {
        let p = &self.cfg.promo;
        let image_start = self.timeline.start(PromoPhase::ImageShow);
        let exit = SpringMotion {
            config: self.spring(),
            start: self.timeline.start(PromoPhase::ImageExit),
            distance: p.image_exit_distance,
        };
        out.insert(
            "image",
            ElementProps::new(2)
                .asset(p.image_asset.as_str())
                .opacity(fade(frame, image_start, IMAGE_FADE_FRAMES, 0.0, 1.0))
                .translate(Vec2::new(exit.offset(frame, self.cfg.fps), 0.0)),
        );
    }

    fn write_features(&self, frame: FrameIndex, out: &mut Elements) {
        let p = &self.cfg.promo;
        let start = self.timeline.start(PromoPhase::FeatureReveal);
        let fade_out_start = self.timeline.start(PromoPhase::FeatureFadeOut);

        out.insert(
            "features",
            ElementProps::new(3).opacity(fade(
                frame,
                fade_out_start,
                FEATURE_FADE_OUT_FRAMES,
                1.0,
                0.0,
            )),
        );
        for (i, text) in p.features.iter().enumerate() {
            let offset = (i as u64).saturating_mul(p.feature_stagger_frames);
            let line_start = FrameIndex(start.0.saturating_add(offset));
            out.insert(
                format!("features.{i}"),
                ElementProps::new(i as i32)
                    .child_of("features")
                    .text(text.as_str())
                    .font_size(FEATURE_FONT_PX)
                    .opacity(fade(frame, line_start, p.feature_fade_frames, 0.0, 1.0)),
            );
        }
    }

    fn write_outro(&self, frame: FrameIndex, out: &mut Elements) {
        let p = &self.cfg.promo;
        let start = self.timeline.start(PromoPhase::Outro);
        let url_start = FrameIndex(start.0.saturating_add(URL_DELAY_FRAMES));

        out.insert("outro", ElementProps::new(4));
        out.insert(
            "outro.logo",
            ElementProps::new(0)
                .child_of("outro")
                .asset(p.logo_asset.as_str())
                .opacity(fade(frame, start, LOGO_FADE_FRAMES, 0.0, 1.0)),
        );
        out.insert(
            "outro.url",
            ElementProps::new(1)
                .child_of("outro")
                .text(p.url.as_str())
                .font_size(URL_FONT_PX)
                .opacity(fade(frame, url_start, URL_FADE_FRAMES, 0.0, 1.0)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/promo.rs"]
mod tests;
