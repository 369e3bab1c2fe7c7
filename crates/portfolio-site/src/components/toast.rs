//! On-screen toasts driven by the view state.

use dioxus::prelude::*;
use portfolio_core::{ToastPhase, ViewState};

/// Returns the classes for a toast in `phase`.
///
/// Pending and hiding toasts sit off screen; the stylesheet animates the
/// slide between the two positions.
pub fn toast_class(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Pending => "toast toast-pending",
        ToastPhase::Shown => "toast toast-shown",
        ToastPhase::Hiding => "toast toast-hiding",
    }
}

/// Fixed layer in the top right corner holding all live toasts.
#[component]
pub fn ToastLayer(state: Signal<ViewState>) -> Element {
    let toasts = state.read().toasts.clone();

    rsx! {
        div {
            class: "toast-layer",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast_class(toast.phase),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_shown_toast_is_on_screen_class() {
        assert!(toast_class(ToastPhase::Shown).contains("toast-shown"));
        assert!(!toast_class(ToastPhase::Pending).contains("toast-shown"));
        assert!(!toast_class(ToastPhase::Hiding).contains("toast-shown"));
    }
}
