use crate::page::document::ElementId;

/// Input delivered by the host, one at a time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Click; `path` lists the target first, then its ancestors.
    Click { path: Vec<ElementId> },
    /// Key press with the logical `key` and the physical `code`.
    KeyDown { key: String, code: String },
    /// Vertical scroll position changed.
    Scroll { y: f64 },
    /// Observed element's visible ratio changed.
    Intersection { element: ElementId, ratio: f64 },
    /// Completion of a [`PageCommand::WriteClipboard`].
    ClipboardWritten {
        button: ElementId,
        #[serde(default)]
        error: Option<String>,
    },
    /// A timer started with [`PageCommand::StartTimer`] elapsed.
    TimerFired { timer: TimerId },
}

/// Timers owned by page features.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimerId {
    /// Revert a copy button; stale generations are ignored.
    CopyReset { button: ElementId, generation: u64 },
    /// Start the easter-egg overlay exit transition.
    OverlayExit { overlay: u64 },
    /// Remove the easter-egg overlay after its exit transition.
    OverlayRemove { overlay: u64 },
}

/// Icon shown inside a copy button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Copy,
    Check,
}

/// Instruction for the host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageCommand {
    AddClass {
        element: ElementId,
        class: String,
    },
    RemoveClass {
        element: ElementId,
        class: String,
    },
    SetStyle {
        element: ElementId,
        property: String,
        value: String,
    },
    SetIcon {
        element: ElementId,
        icon: Icon,
    },
    /// Start reporting [`PageEvent::Intersection`] for `element`.
    Observe {
        element: ElementId,
        threshold: f64,
        /// Shrinks the viewport's bottom edge.
        bottom_margin_px: f64,
    },
    Unobserve {
        element: ElementId,
    },
    WriteClipboard {
        button: ElementId,
        text: String,
    },
    StartTimer {
        timer: TimerId,
        after_ms: u64,
    },
    /// Suppress the default action of the event being handled.
    PreventDefault,
    ScrollTo {
        top: f64,
        smooth: bool,
    },
    /// Push `fragment` to history without navigating.
    PushHistory {
        fragment: String,
    },
    Focus {
        element: ElementId,
    },
    ShowOverlay {
        overlay: u64,
        message: String,
        enter_ms: u64,
    },
    /// Play the overlay's exit transition.
    HideOverlay {
        overlay: u64,
        exit_ms: u64,
    },
    RemoveOverlay {
        overlay: u64,
    },
}

impl PageCommand {
    pub(crate) fn add_class(element: &ElementId, class: &str) -> Self {
        Self::AddClass {
            element: element.clone(),
            class: class.to_owned(),
        }
    }

    pub(crate) fn remove_class(element: &ElementId, class: &str) -> Self {
        Self::RemoveClass {
            element: element.clone(),
            class: class.to_owned(),
        }
    }

    pub(crate) fn set_style(element: &ElementId, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            element: element.clone(),
            property: property.to_owned(),
            value: value.into(),
        }
    }
}
