use std::collections::BTreeSet;

use crate::page::document::ElementId;
use crate::page::event::PageCommand;

/// What happens to an element the first time it becomes visible enough.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealAction {
    /// Add a class (scroll-revealed cards).
    AddClass(String),
    /// Clear the hero screenshot's initial hidden styles.
    FadeIn,
}

/// One-shot intersection observer.
///
/// Every element is revealed at most once: it leaves the pending set and is unobserved as soon
/// as its visible ratio reaches the threshold.
#[derive(Clone, Debug)]
pub struct RevealObserver {
    threshold: f64,
    bottom_margin_px: f64,
    action: RevealAction,
    pending: BTreeSet<ElementId>,
}

impl RevealObserver {
    pub fn new(
        targets: impl IntoIterator<Item = ElementId>,
        threshold: f64,
        bottom_margin_px: f64,
        action: RevealAction,
    ) -> Self {
        Self {
            threshold,
            bottom_margin_px,
            action,
            pending: targets.into_iter().collect(),
        }
    }

    /// Hero screenshot: hidden and shifted down until 30% of it is on screen.
    pub fn hero(
        screenshot: ElementId,
        threshold: f64,
        offset_px: f64,
        transition: &str,
        out: &mut Vec<PageCommand>,
    ) -> Self {
        out.push(PageCommand::set_style(&screenshot, "opacity", "0"));
        out.push(PageCommand::set_style(
            &screenshot,
            "transform",
            format!("translateY({offset_px}px)"),
        ));
        out.push(PageCommand::set_style(&screenshot, "transition", transition));
        Self::new([screenshot], threshold, 0.0, RevealAction::FadeIn)
    }

    pub fn is_pending(&self, element: &ElementId) -> bool {
        self.pending.contains(element)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Start observing every pending element.
    pub fn observe_all(&self, out: &mut Vec<PageCommand>) {
        for element in &self.pending {
            out.push(PageCommand::Observe {
                element: element.clone(),
                threshold: self.threshold,
                bottom_margin_px: self.bottom_margin_px,
            });
        }
    }

    pub fn on_intersection(&mut self, element: &ElementId, ratio: f64, out: &mut Vec<PageCommand>) {
        if ratio <= 0.0 || ratio < self.threshold || !self.pending.remove(element) {
            return;
        }
        match &self.action {
            RevealAction::AddClass(class) => out.push(PageCommand::add_class(element, class)),
            RevealAction::FadeIn => {
                out.push(PageCommand::set_style(element, "opacity", "1"));
                out.push(PageCommand::set_style(element, "transform", "translateY(0)"));
            }
        }
        out.push(PageCommand::Unobserve {
            element: element.clone(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/reveal.rs"]
mod tests;
