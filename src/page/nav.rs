use crate::page::document::{ElementId, NavLinks};
use crate::page::event::PageCommand;

/// Mobile navigation toggle.
///
/// Clicking the toggle flips the menu; clicking one of its links, or anywhere outside both the
/// toggle and the link list, closes it.
#[derive(Clone, Debug)]
pub struct NavToggle {
    toggle: ElementId,
    links: NavLinks,
    class: String,
    open: bool,
}

impl NavToggle {
    pub fn new(toggle: ElementId, links: NavLinks, class: impl Into<String>) -> Self {
        Self {
            toggle,
            links,
            class: class.into(),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_click(&mut self, path: &[ElementId], out: &mut Vec<PageCommand>) {
        if path.contains(&self.toggle) {
            self.set_open(!self.open, out);
        } else if path.iter().any(|el| self.links.links.contains(el))
            || !path.contains(&self.links.container)
        {
            self.set_open(false, out);
        }
    }

    fn set_open(&mut self, open: bool, out: &mut Vec<PageCommand>) {
        if open == self.open {
            return;
        }
        self.open = open;
        for el in [&self.toggle, &self.links.container] {
            out.push(if open {
                PageCommand::add_class(el, &self.class)
            } else {
                PageCommand::remove_class(el, &self.class)
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/nav.rs"]
mod tests;
