use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TermreelError, TermreelResult};

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Attached mass.
    pub mass: f64,
}

impl Default for SpringConfig {
    /// Fast, overdamped spring with no bounce.
    fn default() -> Self {
        Self {
            damping: 30.0,
            stiffness: 200.0,
            mass: 0.5,
        }
    }
}

impl SpringConfig {
    /// Reject non-positive stiffness/mass and negative damping.
    pub fn validate(&self) -> TermreelResult<()> {
        if !(self.stiffness > 0.0 && self.stiffness.is_finite()) {
            return Err(TermreelError::validation("spring stiffness must be > 0"));
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(TermreelError::validation("spring mass must be > 0"));
        }
        if !(self.damping >= 0.0 && self.damping.is_finite()) {
            return Err(TermreelError::validation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta`; values `>= 1` never overshoot.
    pub fn damping_ratio(&self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }

    /// Step response from 0 to 1 after `secs` seconds, starting at rest.
    pub fn progress(&self, secs: f64) -> f64 {
        let t = secs.max(0.0);
        if t == 0.0 {
            return 0.0;
        }
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);

        let w0 = (k / m).sqrt();
        if w0 == 0.0 {
            return 0.0;
        }
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            let k = zeta / (1.0 - zeta * zeta).sqrt();
            1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
        } else {
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        }
    }

    /// Progress at `frame` for a spring released at `start`; zero before `start`.
    pub fn progress_at(&self, frame: FrameIndex, start: FrameIndex, fps: Fps) -> f64 {
        self.progress(fps.frames_to_secs(frame.since(start)))
    }
}

/// A spring-driven one-dimensional displacement released at a marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringMotion {
    /// Spring parameters.
    pub config: SpringConfig,
    /// Release frame.
    pub start: FrameIndex,
    /// Displacement in pixels at full progress.
    pub distance: f64,
}

impl SpringMotion {
    /// Displacement at `frame`.
    pub fn offset(&self, frame: FrameIndex, fps: Fps) -> f64 {
        self.config.progress_at(frame, self.start, fps) * self.distance
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
