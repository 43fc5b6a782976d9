use std::collections::BTreeMap;

use crate::foundation::core::Vec2;

/// Text cursor block drawn after typed text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CursorProps {
    /// `false` during the "off" half of a blink.
    pub visible: bool,
    /// Block width in pixels.
    pub width: f64,
    /// Block height in pixels.
    pub height: f64,
}

/// 3D tilt applied to a stage element, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tilt {
    /// Rotation around the x axis.
    pub x_deg: f64,
    /// Rotation around the y axis.
    pub y_deg: f64,
}

/// Rendering properties of one element at one frame.
///
/// `opacity` is local to the element; the host multiplies it by the parent chain
/// (see [`Elements::effective_opacity`]).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementProps {
    /// Enclosing element, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Painter's order among siblings.
    pub z: i32,
    /// Local opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation in pixels.
    pub translate: Vec2,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt: Option<Tilt>,
    /// Static label (prompt, window title).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Displayed (possibly partial) text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Displayed output lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Distance between consecutive text lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Logical asset name resolved by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

impl ElementProps {
    /// Fully opaque, untranslated element at `z`.
    pub fn new(z: i32) -> Self {
        Self {
            parent: None,
            z,
            opacity: 1.0,
            translate: Vec2::ZERO,
            tilt: None,
            label: None,
            text: None,
            lines: None,
            cursor: None,
            font_size: None,
            line_height: None,
            asset: None,
        }
    }

    pub fn child_of(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_owned());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    pub fn tilt(mut self, tilt: Tilt) -> Self {
        self.tilt = Some(tilt);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn lines(mut self, lines: Vec<String>) -> Self {
        self.lines = Some(lines);
        self
    }

    pub fn cursor(mut self, cursor: CursorProps) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    pub fn line_height(mut self, px: f64) -> Self {
        self.line_height = Some(px);
        self
    }

    pub fn asset(mut self, name: impl Into<String>) -> Self {
        self.asset = Some(name.into());
        self
    }
}

/// Element id -> properties for one evaluated frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Elements(BTreeMap<String, ElementProps>);

impl Elements {
    /// Empty element set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element.
    pub fn insert(&mut self, id: impl Into<String>, props: ElementProps) {
        self.0.insert(id.into(), props);
    }

    /// Look up an element.
    pub fn get(&self, id: &str) -> Option<&ElementProps> {
        self.0.get(id)
    }

    /// Iterate elements ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementProps)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no element is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attach every root element to `parent`.
    pub fn adopt(&mut self, parent: &str) {
        for (id, props) in self.0.iter_mut() {
            if props.parent.is_none() && id != parent {
                props.parent = Some(parent.to_owned());
            }
        }
    }

    /// Move all elements of `other` into `self`.
    pub fn extend(&mut self, other: Elements) {
        self.0.extend(other.0);
    }

    /// Opacity of `id` multiplied by every ancestor's opacity.
    pub fn effective_opacity(&self, id: &str) -> Option<f64> {
        let mut props = self.0.get(id)?;
        let mut opacity = props.opacity;
        // Bounded walk: a malformed parent cycle cannot loop forever.
        for _ in 0..self.0.len() {
            let Some(parent) = props.parent.as_deref() else {
                return Some(opacity);
            };
            let Some(p) = self.0.get(parent) else {
                return Some(opacity);
            };
            opacity *= p.opacity;
            props = p;
        }
        Some(opacity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
