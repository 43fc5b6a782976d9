use crate::page::document::{ElementId, TabButton};
use crate::page::event::PageCommand;

/// Tab buttons and the panels they switch between.
#[derive(Clone, Debug)]
pub struct Tabs {
    buttons: Vec<TabButton>,
    panels: Vec<ElementId>,
    class: String,
    active: Option<usize>,
}

impl Tabs {
    /// The first button marked active in the document starts out selected.
    pub fn new(buttons: Vec<TabButton>, panels: Vec<ElementId>, class: impl Into<String>) -> Self {
        let active = buttons.iter().position(|b| b.active);
        Self {
            buttons,
            panels,
            class: class.into(),
            active,
        }
    }

    pub fn active(&self) -> Option<&TabButton> {
        self.active.and_then(|i| self.buttons.get(i))
    }

    pub fn on_click(&mut self, path: &[ElementId], out: &mut Vec<PageCommand>) {
        if let Some(i) = self.buttons.iter().position(|b| path.contains(&b.id)) {
            self.select(i, out);
        }
    }

    /// ArrowLeft/ArrowRight move the selection cyclically and focus the new button.
    ///
    /// Ignored while no button is active.
    pub fn on_key(&mut self, key: &str, out: &mut Vec<PageCommand>) {
        let Some(current) = self.active else {
            return;
        };
        let n = self.buttons.len();
        let next = match key {
            "ArrowLeft" => (current + n - 1) % n,
            "ArrowRight" => (current + 1) % n,
            _ => return,
        };
        self.select(next, out);
        out.push(PageCommand::Focus {
            element: self.buttons[next].id.clone(),
        });
    }

    fn select(&mut self, index: usize, out: &mut Vec<PageCommand>) {
        self.active = Some(index);
        for b in &self.buttons {
            out.push(PageCommand::remove_class(&b.id, &self.class));
        }
        let target = &self.buttons[index];
        out.push(PageCommand::add_class(&target.id, &self.class));

        for panel in &self.panels {
            out.push(PageCommand::remove_class(panel, &self.class));
            if panel.as_str() == target.tab {
                out.push(PageCommand::add_class(panel, &self.class));
            }
        }
        tracing::debug!(tab = %target.tab, "tab selected");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/tabs.rs"]
mod tests;
