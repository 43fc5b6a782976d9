//! termreel drives the animated terminal promo and the docs-site interactions of a terminal
//! spreadsheet project.
//!
//! Two independent halves share the foundation types:
//!
//! - The timeline compositor evaluates a [`Composition`] at any [`FrameIndex`] into plain
//!   per-element properties ([`EvaluatedFrame`]). Evaluation is pure; a rendering host turns the
//!   properties into pixels.
//! - The page layer ([`Page`]) consumes host events ([`PageEvent`]) and answers with host
//!   commands ([`PageCommand`]) for the documentation site.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod eval;
pub(crate) mod page;
pub(crate) mod scene;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{TermreelError, TermreelResult};

pub use crate::animation::interp::{Extrapolate, Lerp, Span, fade};
pub use crate::animation::reveal::{LineReveal, TypedText, blink_on, cursor_visible};
pub use crate::animation::spring::{SpringConfig, SpringMotion};
pub use crate::animation::timeline::{Marker, MarkerSummary, PhaseKey, Timeline};

pub use crate::scene::composition::{Composition, CompositionId};
pub use crate::scene::config::{MasterConfig, PromoConfig, SceneConfig, TerminalConfig};
pub use crate::scene::logo::write_logo_card;
pub use crate::scene::master::{Master, MasterPhase};
pub use crate::scene::model::{CursorProps, ElementProps, Elements, Tilt};
pub use crate::scene::promo::{Promo, PromoPhase, promo_timeline};
pub use crate::scene::terminal::{TerminalContent, TerminalState};

pub use crate::eval::evaluator::{EvaluatedFrame, Evaluator};

pub use crate::page::config::{KONAMI_CODE, PageConfig};
pub use crate::page::controller::Page;
pub use crate::page::copy::CopyButtons;
pub use crate::page::document::{
    Anchor, CopyButton, ElementId, NavLinks, PageDocument, StaticViewport, TabButton, Viewport,
};
pub use crate::page::event::{Icon, PageCommand, PageEvent, TimerId};
pub use crate::page::konami::Konami;
pub use crate::page::nav::NavToggle;
pub use crate::page::reveal::{RevealAction, RevealObserver};
pub use crate::page::scroll::{NavbarShadow, SmoothScroll};
pub use crate::page::tabs::Tabs;
