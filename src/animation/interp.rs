use crate::foundation::core::{FrameIndex, Vec2};
use crate::foundation::error::{TermreelError, TermreelResult};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`. `t` may leave `[0, 1]` when extending.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Value produced for input `x` under [`Extrapolate::Identity`].
    fn from_input(x: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }

    fn from_input(x: f64) -> Self {
        x
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }

    fn from_input(x: f64) -> Self {
        Vec2::new(x, x)
    }
}

/// Behavior of a [`Span`] for inputs outside its input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest endpoint value.
    #[default]
    Clamp,
    /// Continue the line past the endpoint.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Linear mapping from an input interval to an output interval.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span<T> {
    /// Input interval `[start, end]`, usually frames.
    pub input: [f64; 2],
    /// Output values at `input[0]` and `input[1]`.
    pub output: [T; 2],
    /// Policy for inputs below `input[0]`.
    pub left: Extrapolate,
    /// Policy for inputs above `input[1]`.
    pub right: Extrapolate,
}

impl<T> Span<T>
where
    T: Lerp + Clone,
{
    /// Clamp-clamp span over an arbitrary input interval.
    pub fn clamped(start: f64, end: f64, from: T, to: T) -> Self {
        Self {
            input: [start, end],
            output: [from, to],
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }

    /// Clamp-clamp span over `[start, start + frames]`.
    pub fn over_frames(start: FrameIndex, frames: u64, from: T, to: T) -> Self {
        let s = start.0 as f64;
        Self::clamped(s, s + frames as f64, from, to)
    }

    /// Replace the left extrapolation policy.
    pub fn with_left(mut self, left: Extrapolate) -> Self {
        self.left = left;
        self
    }

    /// Replace the right extrapolation policy.
    pub fn with_right(mut self, right: Extrapolate) -> Self {
        self.right = right;
        self
    }

    /// Check that the input interval is finite and strictly increasing.
    pub fn validate(&self) -> TermreelResult<()> {
        let [a, b] = self.input;
        if !a.is_finite() || !b.is_finite() {
            return Err(TermreelError::validation("span bounds must be finite"));
        }
        if a >= b {
            return Err(TermreelError::validation(format!(
                "span input must be strictly increasing, got [{a}, {b}]"
            )));
        }
        Ok(())
    }

    /// Sample the span at input `x`.
    ///
    /// A degenerate span (`end <= start`) acts as a step at `start`.
    pub fn sample(&self, x: f64) -> T {
        let [a, b] = self.input;
        let [from, to] = &self.output;
        if b <= a {
            return if x < a { from.clone() } else { to.clone() };
        }

        let t = (x - a) / (b - a);
        let policy = if t < 0.0 {
            self.left
        } else if t > 1.0 {
            self.right
        } else {
            return T::lerp(from, to, t);
        };
        match policy {
            Extrapolate::Clamp => T::lerp(from, to, t.clamp(0.0, 1.0)),
            Extrapolate::Extend => T::lerp(from, to, t),
            Extrapolate::Identity => T::from_input(x),
        }
    }

    /// Sample the span at a frame index.
    pub fn at(&self, frame: FrameIndex) -> T {
        self.sample(frame.0 as f64)
    }
}

/// Clamped opacity fade over `[start, start + frames]`.
pub fn fade(frame: FrameIndex, start: FrameIndex, frames: u64, from: f64, to: f64) -> f64 {
    Span::over_frames(start, frames, from, to).at(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
