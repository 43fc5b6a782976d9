use crate::page::document::{Anchor, ElementId, Viewport};
use crate::page::event::PageCommand;

/// Smooth scrolling for same-page anchor links.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    anchors: Vec<Anchor>,
    margin_px: f64,
}

impl SmoothScroll {
    /// Keeps only anchors whose `href` starts with `#`.
    pub fn new(anchors: Vec<Anchor>, margin_px: f64) -> Self {
        Self {
            anchors: anchors
                .into_iter()
                .filter(|a| a.href.starts_with('#'))
                .collect(),
            margin_px,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Scroll to the anchor's target so it sits just below the navbar.
    ///
    /// A bare `#` or a missing target leaves the default navigation alone.
    pub fn on_click(
        &self,
        path: &[ElementId],
        viewport: &dyn Viewport,
        out: &mut Vec<PageCommand>,
    ) {
        let Some(anchor) = self.anchors.iter().find(|a| path.contains(&a.id)) else {
            return;
        };
        let Some(target) = anchor.href.strip_prefix('#').filter(|t| !t.is_empty()) else {
            return;
        };
        let Some(top) = viewport.element_top(&ElementId::from(target)) else {
            tracing::debug!(href = %anchor.href, "anchor target not found");
            return;
        };
        let nav_height = viewport.navbar_height().unwrap_or(0.0);
        out.push(PageCommand::PreventDefault);
        out.push(PageCommand::ScrollTo {
            top: top + viewport.scroll_y() - nav_height - self.margin_px,
            smooth: true,
        });
        out.push(PageCommand::PushHistory {
            fragment: anchor.href.clone(),
        });
    }
}

/// Drop shadow under the navbar once the page is scrolled.
#[derive(Clone, Debug)]
pub struct NavbarShadow {
    navbar: ElementId,
    threshold_px: f64,
    shadow: String,
    shadowed: bool,
}

impl NavbarShadow {
    pub fn new(navbar: ElementId, threshold_px: f64, shadow: impl Into<String>) -> Self {
        Self {
            navbar,
            threshold_px,
            shadow: shadow.into(),
            shadowed: false,
        }
    }

    pub fn is_shadowed(&self) -> bool {
        self.shadowed
    }

    /// Emits a style change only when the shadow state flips.
    pub fn on_scroll(&mut self, y: f64, out: &mut Vec<PageCommand>) {
        let shadowed = y > self.threshold_px;
        if shadowed == self.shadowed {
            return;
        }
        self.shadowed = shadowed;
        let value = if shadowed { self.shadow.as_str() } else { "none" };
        out.push(PageCommand::set_style(&self.navbar, "box-shadow", value));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/scroll.rs"]
mod tests;
