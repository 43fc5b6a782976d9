use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{TermreelError, TermreelResult};

/// DOM element identifier (the element's `id` or any stable handle the host chooses).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapsible navigation link list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavLinks {
    /// The list container.
    pub container: ElementId,
    /// Links inside the container.
    #[serde(default)]
    pub links: Vec<ElementId>,
}

/// Tab button with its `data-tab` target.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TabButton {
    pub id: ElementId,
    /// Id of the panel this button shows.
    pub tab: String,
    /// Whether the button carries the active class at load.
    #[serde(default)]
    pub active: bool,
}

/// Copy button with its `data-copy` payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CopyButton {
    pub id: ElementId,
    #[serde(default)]
    pub copy: Option<String>,
}

/// Anchor link and its raw `href`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub id: ElementId,
    pub href: String,
}

/// Element lookups resolved once at page load.
///
/// A missing entry disables the feature that needs it; nothing is re-queried later.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageDocument {
    pub navbar: Option<ElementId>,
    pub nav_toggle: Option<ElementId>,
    pub nav_links: Option<NavLinks>,
    pub tab_buttons: Vec<TabButton>,
    pub tab_panels: Vec<ElementId>,
    pub copy_buttons: Vec<CopyButton>,
    /// Cards revealed on first scroll into view.
    pub reveal_targets: Vec<ElementId>,
    pub hero_screenshot: Option<ElementId>,
    /// Same-page anchors (`href` beginning with `#`).
    pub anchors: Vec<Anchor>,
}

impl PageDocument {
    /// Parse a document snapshot from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TermreelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TermreelError::serde(format!("parse page document JSON: {e}")))
    }

    /// Parse a document snapshot from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TermreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TermreelError::validation(format!("open page document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Live layout queries answered by the host.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
    /// Top edge of `id` relative to the viewport, or `None` when it does not exist.
    fn element_top(&self, id: &ElementId) -> Option<f64>;
    /// Rendered navbar height, if there is a navbar.
    fn navbar_height(&self) -> Option<f64>;
}

/// Fixed layout snapshot, used for replays and tests.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StaticViewport {
    pub scroll_y: f64,
    pub navbar_height: Option<f64>,
    /// Element top offsets in document coordinates.
    pub element_offsets: BTreeMap<ElementId, f64>,
}

impl Viewport for StaticViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn element_top(&self, id: &ElementId) -> Option<f64> {
        self.element_offsets.get(id).map(|top| top - self.scroll_y)
    }

    fn navbar_height(&self) -> Option<f64> {
        self.navbar_height
    }
}
