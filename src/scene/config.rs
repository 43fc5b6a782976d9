use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::spring::SpringConfig;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{TermreelError, TermreelResult};
use crate::scene::master::Master;
use crate::scene::promo::promo_timeline;

/// Scene configuration shared by all compositions.
///
/// Every field has a default, so a JSON file only needs to name what it overrides.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Composition frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Spring used by every slide transition.
    pub spring: SpringConfig,
    /// Simulated terminal session.
    pub terminal: TerminalConfig,
    /// Promo sequence following the terminal session.
    pub promo: PromoConfig,
    /// Series wrapper (promo then logo).
    pub master: MasterConfig,
}

/// Simulated install session typed into the terminal window.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Window title.
    pub title: String,
    /// Prompt label drawn before the command and after the output.
    pub prompt: String,
    /// Command typed at the prompt.
    pub command: String,
    /// Typing rate.
    pub chars_per_second: u32,
    /// Pause between the end of typing and the first output line.
    pub output_delay_ms: u32,
    /// Interval between output lines.
    pub ms_per_line: u32,
    /// Output printed by the command.
    pub output_lines: Vec<String>,
    /// Font size before any output.
    pub font_size_start: f64,
    /// Font size once every output line is shown.
    pub font_size_end: f64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        let output_lines = [
            "",
            "rustxl Installation Script",
            "================================",
            "",
            "Detected OS: macos",
            "Detected Architecture: aarch64",
            "",
            "Download URL: https://github.com/only-using-ai/rustxl/releases/download/latest/xl-macos-arm64.tar.gz",
            "",
            "Downloading rustxl...",
            "Download complete! (1076107 bytes)",
            "",
            "Extracting archive...",
            "Extraction complete!",
            "",
            "Installing xl to /Users/willdech/.local/bin...",
            "",
            "Installation successful!",
            "",
            "The 'xl' command is now available.",
            "You can verify by running: xl --help",
        ];
        Self {
            title: "Terminal".to_owned(),
            prompt: "~ $".to_owned(),
            command: "curl -fsSL http://rustxl.com/install.sh | bash".to_owned(),
            chars_per_second: 54,
            output_delay_ms: 200,
            ms_per_line: 24,
            output_lines: output_lines.iter().map(|s| (*s).to_owned()).collect(),
            font_size_start: 32.0,
            font_size_end: 22.4,
        }
    }
}

/// Phase durations and content of the promo sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PromoConfig {
    /// Registered length of the standalone promo composition.
    pub duration_frames: u64,
    /// Frame at which the terminal session is considered finished.
    pub output_complete_frame: u64,
    /// Pause before the terminal slides out.
    pub exit_delay_frames: u64,
    /// Gap between terminal exit and the title fade.
    pub title_delay_frames: u64,
    /// Gap between title and subtitle fades.
    pub subtitle_delay_frames: u64,
    /// Subtitle fade-in length.
    pub subtitle_fade_frames: u64,
    /// Hold after the subtitle is fully shown.
    pub intro_hold_frames: u64,
    /// Gap between the intro fade-out and the standalone command.
    pub command_delay_frames: u64,
    /// Standalone command typed in the middle of the canvas.
    pub standalone_command: String,
    /// Standalone command typing rate.
    pub command_chars_per_second: u32,
    /// Gap between typing completion and the image.
    pub image_delay_frames: u64,
    /// How long the image stays before sliding out.
    pub image_display_frames: u64,
    /// Gap between image exit and the first feature line.
    pub feature_delay_frames: u64,
    /// Fade length of each feature line.
    pub feature_fade_frames: u64,
    /// Offset between consecutive feature lines.
    pub feature_stagger_frames: u64,
    /// Hold after the last feature line is fully shown.
    pub feature_display_frames: u64,
    /// Gap between the feature fade-out and the logo.
    pub logo_delay_frames: u64,
    /// Intro title.
    pub title: String,
    /// Intro subtitle.
    pub subtitle: String,
    /// Feature lines, faded in one after another.
    pub features: Vec<String>,
    /// URL shown under the logo.
    pub url: String,
    /// Logical name of the screenshot image.
    pub image_asset: String,
    /// Logical name of the logo image.
    pub logo_asset: String,
    /// Vertical travel of the terminal window when it slides out.
    pub terminal_exit_distance: f64,
    /// Horizontal travel of the image when it slides out.
    pub image_exit_distance: f64,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            duration_frames: 450,
            output_complete_frame: 60,
            exit_delay_frames: 3,
            title_delay_frames: 8,
            subtitle_delay_frames: 12,
            subtitle_fade_frames: 20,
            intro_hold_frames: 24,
            command_delay_frames: 15,
            standalone_command: "ls -Al | xl".to_owned(),
            command_chars_per_second: 40,
            image_delay_frames: 6,
            image_display_frames: 60,
            feature_delay_frames: 10,
            feature_fade_frames: 15,
            feature_stagger_frames: 12,
            feature_display_frames: 60,
            logo_delay_frames: 15,
            title: "Introducing XL.".to_owned(),
            subtitle: "Excel in your terminal".to_owned(),
            features: vec![
                "Formula support.".to_owned(),
                "VIM-like syntax.".to_owned(),
                "Written in Rust.".to_owned(),
            ],
            url: "https://rustxl.com/".to_owned(),
            image_asset: "ls-pipe.png".to_owned(),
            logo_asset: "logo.svg".to_owned(),
            terminal_exit_distance: 1200.0,
            image_exit_distance: -1400.0,
        }
    }
}

impl PromoConfig {
    /// Frames from the first feature fade start until the last feature is fully shown.
    pub fn feature_reveal_frames(&self) -> u64 {
        let n = self.features.len() as u64;
        n.saturating_sub(1)
            .saturating_mul(self.feature_stagger_frames)
            .saturating_add(self.feature_fade_frames)
    }
}

/// Series wrapper: tilted stage sliding in, promo followed by the logo card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MasterConfig {
    /// Frames given to the promo sequence.
    pub terminal_frames: u64,
    /// Frames given to the logo card.
    pub logo_frames: u64,
    /// Distance the stage travels while sliding in.
    pub slide_distance: f64,
    /// Stage tilt around the x axis.
    pub rotate_x_deg: f64,
    /// Stage tilt around the y axis.
    pub rotate_y_deg: f64,
    /// Logo card image.
    pub logo_asset: String,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            terminal_frames: 300,
            logo_frames: 150,
            slide_distance: 1200.0,
            rotate_x_deg: 20.0,
            rotate_y_deg: -20.0,
            logo_asset: "logo.svg".to_owned(),
        }
    }
}

impl SceneConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TermreelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TermreelError::serde(format!("parse scene config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TermreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TermreelError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values that would make the scenes meaningless.
    pub fn validate(&self) -> TermreelResult<()> {
        self.fps.validate()?;
        self.spring.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(TermreelError::validation("canvas must be non-empty"));
        }
        if self.terminal.chars_per_second == 0 {
            return Err(TermreelError::validation(
                "terminal.chars_per_second must be > 0",
            ));
        }
        if self.promo.command_chars_per_second == 0 {
            return Err(TermreelError::validation(
                "promo.command_chars_per_second must be > 0",
            ));
        }
        if self.promo.duration_frames == 0 {
            return Err(TermreelError::validation(
                "promo.duration_frames must be > 0",
            ));
        }
        match self
            .master
            .terminal_frames
            .checked_add(self.master.logo_frames)
        {
            None => {
                return Err(TermreelError::validation(
                    "master sequence length overflows the frame range",
                ));
            }
            Some(0) => {
                return Err(TermreelError::validation(
                    "master sequence must contain at least one frame",
                ));
            }
            Some(_) => {}
        }
        let features = self.promo.features.len() as u64;
        features
            .saturating_sub(1)
            .checked_mul(self.promo.feature_stagger_frames)
            .and_then(|n| n.checked_add(self.promo.feature_fade_frames))
            .ok_or_else(|| {
                TermreelError::validation("promo feature reveal overflows the frame range")
            })?;

        let promo = promo_timeline(&self.promo, self.fps);
        promo.validate()?;
        if promo.end().0 > self.promo.duration_frames {
            return Err(TermreelError::validation(format!(
                "promo timeline ends at frame {} but promo.duration_frames is {}",
                promo.end().0,
                self.promo.duration_frames
            )));
        }
        Master::new(self).series().validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
