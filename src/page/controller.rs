use crate::page::config::PageConfig;
use crate::page::copy::CopyButtons;
use crate::page::document::{PageDocument, Viewport};
use crate::page::event::{PageCommand, PageEvent, TimerId};
use crate::page::konami::Konami;
use crate::page::nav::NavToggle;
use crate::page::reveal::{RevealAction, RevealObserver};
use crate::page::scroll::{NavbarShadow, SmoothScroll};
use crate::page::tabs::Tabs;

/// Interaction state of one loaded page.
///
/// Features whose elements are missing from the [`PageDocument`] are never registered and
/// ignore every event.
#[derive(Clone, Debug)]
pub struct Page {
    nav: Option<NavToggle>,
    tabs: Option<Tabs>,
    copy: Option<CopyButtons>,
    reveal: Option<RevealObserver>,
    hero: Option<RevealObserver>,
    smooth_scroll: Option<SmoothScroll>,
    navbar_shadow: Option<NavbarShadow>,
    konami: Option<Konami>,
}

impl Page {
    /// Register features for `doc` and return the commands that set up their initial state.
    pub fn init(doc: &PageDocument, config: PageConfig) -> (Self, Vec<PageCommand>) {
        let mut out = Vec::new();

        let nav = match (&doc.nav_toggle, &doc.nav_links) {
            (Some(toggle), Some(links)) => Some(NavToggle::new(
                toggle.clone(),
                links.clone(),
                config.active_class.as_str(),
            )),
            _ => None,
        };

        let tabs = (!doc.tab_buttons.is_empty()).then(|| {
            Tabs::new(
                doc.tab_buttons.clone(),
                doc.tab_panels.clone(),
                config.active_class.as_str(),
            )
        });

        let copy = (!doc.copy_buttons.is_empty()).then(|| {
            CopyButtons::new(
                doc.copy_buttons.clone(),
                config.copied_class.as_str(),
                config.copy_feedback_ms,
            )
        });

        let reveal = (!doc.reveal_targets.is_empty()).then(|| {
            let observer = RevealObserver::new(
                doc.reveal_targets.iter().cloned(),
                config.reveal_threshold,
                config.reveal_bottom_margin_px,
                RevealAction::AddClass(config.visible_class.clone()),
            );
            observer.observe_all(&mut out);
            observer
        });

        let hero = doc.hero_screenshot.as_ref().map(|screenshot| {
            let observer = RevealObserver::hero(
                screenshot.clone(),
                config.hero_threshold,
                config.hero_offset_px,
                &config.hero_transition,
                &mut out,
            );
            observer.observe_all(&mut out);
            observer
        });

        let smooth_scroll = Some(SmoothScroll::new(doc.anchors.clone(), config.scroll_margin_px))
            .filter(|s| !s.is_empty());

        let navbar_shadow = doc.navbar.as_ref().map(|navbar| {
            NavbarShadow::new(
                navbar.clone(),
                config.shadow_threshold_px,
                config.shadow.as_str(),
            )
        });

        let konami = (!config.konami_code.is_empty()).then(|| {
            Konami::new(
                config.konami_code.clone(),
                config.easter_egg_message.as_str(),
                config.overlay_enter_ms,
                config.overlay_visible_ms,
                config.overlay_exit_ms,
            )
        });

        let page = Self {
            nav,
            tabs,
            copy,
            reveal,
            hero,
            smooth_scroll,
            navbar_shadow,
            konami,
        };
        tracing::debug!(features = ?page.features(), "page initialized");
        (page, out)
    }

    /// Names of the registered features, in registration order.
    pub fn features(&self) -> Vec<&'static str> {
        [
            ("navigation", self.nav.is_some()),
            ("tabs", self.tabs.is_some()),
            ("copy", self.copy.is_some()),
            ("scroll_reveal", self.reveal.is_some()),
            ("hero", self.hero.is_some()),
            ("smooth_scroll", self.smooth_scroll.is_some()),
            ("navbar_shadow", self.navbar_shadow.is_some()),
            ("konami", self.konami.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.as_ref().is_some_and(NavToggle::is_open)
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.tabs
            .as_ref()
            .and_then(Tabs::active)
            .map(|b| b.tab.as_str())
    }

    pub fn konami_progress(&self) -> usize {
        self.konami.as_ref().map_or(0, Konami::progress)
    }

    pub fn navbar_shadowed(&self) -> bool {
        self.navbar_shadow
            .as_ref()
            .is_some_and(NavbarShadow::is_shadowed)
    }

    /// Handle one host event and return the resulting commands in order.
    pub fn handle(&mut self, event: &PageEvent, viewport: &dyn Viewport) -> Vec<PageCommand> {
        let mut out = Vec::new();
        match event {
            PageEvent::Click { path } => {
                if let Some(nav) = &mut self.nav {
                    nav.on_click(path, &mut out);
                }
                if let Some(tabs) = &mut self.tabs {
                    tabs.on_click(path, &mut out);
                }
                if let Some(copy) = &self.copy {
                    copy.on_click(path, &mut out);
                }
                if let Some(scroll) = &self.smooth_scroll {
                    scroll.on_click(path, viewport, &mut out);
                }
            }
            PageEvent::KeyDown { key, code } => {
                if let Some(tabs) = &mut self.tabs {
                    tabs.on_key(key, &mut out);
                }
                if let Some(konami) = &mut self.konami {
                    konami.on_key(code, &mut out);
                }
            }
            PageEvent::Scroll { y } => {
                if let Some(shadow) = &mut self.navbar_shadow {
                    shadow.on_scroll(*y, &mut out);
                }
            }
            PageEvent::Intersection { element, ratio } => {
                for observer in [&mut self.reveal, &mut self.hero].into_iter().flatten() {
                    observer.on_intersection(element, *ratio, &mut out);
                }
            }
            PageEvent::ClipboardWritten { button, error } => {
                if let Some(copy) = &mut self.copy {
                    copy.on_written(button, error.as_deref(), &mut out);
                }
            }
            PageEvent::TimerFired { timer } => match timer {
                TimerId::CopyReset { button, generation } => {
                    if let Some(copy) = &mut self.copy {
                        copy.on_reset(button, *generation, &mut out);
                    }
                }
                TimerId::OverlayExit { overlay } => {
                    if let Some(konami) = &mut self.konami {
                        konami.on_exit(*overlay, &mut out);
                    }
                }
                TimerId::OverlayRemove { overlay } => {
                    if let Some(konami) = &mut self.konami {
                        konami.on_remove(*overlay, &mut out);
                    }
                }
            },
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
