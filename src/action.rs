//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::DropMessage;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to the lab
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Registry Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    /// Expand or collapse the focused category
    ToggleCategory,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Drag & Drop
    // ─────────────────────────────────────────────────────────────────────────
    /// Pick up the focused gene
    GrabFocused,
    /// Pointer moved on or off the tank while dragging
    HoverTank(bool),
    /// Let go of the dragged gene
    ReleaseDrag,
    /// Abort the drag without dropping
    CancelDrag,
    /// Grab the focused gene and drop it straight into the tank
    QuickIntegrate,
    /// A payload landed on the tank
    Drop(DropMessage),

    // ─────────────────────────────────────────────────────────────────────────
    // Lab
    // ─────────────────────────────────────────────────────────────────────────
    /// Clear every gene from the tank
    WipeLab,
    /// Write the serum protocol file
    ExportSerum,
    ScrollLogUp,
    ScrollLogDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ToggleCategory => write!(f, "ToggleCategory"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::GrabFocused => write!(f, "GrabFocused"),
            Action::HoverTank(over) => write!(f, "HoverTank({})", over),
            Action::ReleaseDrag => write!(f, "ReleaseDrag"),
            Action::CancelDrag => write!(f, "CancelDrag"),
            Action::QuickIntegrate => write!(f, "QuickIntegrate"),
            Action::Drop(message) => write!(f, "Drop({})", message.item.id),
            Action::WipeLab => write!(f, "WipeLab"),
            Action::ExportSerum => write!(f, "ExportSerum"),
            Action::ScrollLogUp => write!(f, "ScrollLogUp"),
            Action::ScrollLogDown => write!(f, "ScrollLogDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
