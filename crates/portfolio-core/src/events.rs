//! Events that drive the view state.
//!
//! Timers and user input both end up here; the UI thread applies them one
//! at a time through [`ViewState::process_event`](crate::ViewState::process_event).

use crate::form::FormField;
use crate::nav::NavSection;
use crate::notify::ToastId;

/// A single change to the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The loading splash timer elapsed.
    LoadingFinished,
    /// The carousel timer fired.
    CarouselTick,
    /// The dark-mode button was clicked.
    ToggleDarkMode,
    /// The mobile menu button was clicked.
    ToggleMobileMenu,
    /// A navigation link was clicked.
    NavLinkActivated(NavSection),
    /// A contact form field was edited.
    FieldChanged { field: FormField, value: String },
    /// A toast finished its enter delay and is on screen.
    ToastShown(ToastId),
    /// A toast started its exit transition.
    ToastHiding(ToastId),
    /// A toast finished its exit transition.
    ToastRemoved(ToastId),
}
