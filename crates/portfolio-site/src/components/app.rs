//! Root portfolio view.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{SiteConfig, ToastNotifier, ViewEvent, ViewState, ViewTimers};
use tokio::sync::mpsc;

use crate::theme::ThemedRoot;

use super::{About, ContactSection, Footer, Hero, NavBar, ProjectGallery, Splash, ToastLayer};

/// Receiving end of the view's event channel, taken once by the event pump.
type EventSlot = Rc<RefCell<Option<mpsc::UnboundedReceiver<ViewEvent>>>>;

/// The whole portfolio page.
///
/// Takes no props; the site configuration comes from context. Owns the
/// view state and the event pump that applies timer and toast events.
/// The loading and carousel timers live inside the pump, so they are
/// released together with the view.
#[component]
pub fn PortfolioView() -> Element {
    let config = use_context::<SiteConfig>();
    let state = use_signal(|| ViewState::from_config(&config));

    let (tx, slot) = use_hook(|| {
        let (tx, rx) = mpsc::unbounded_channel::<ViewEvent>();
        let slot: EventSlot = Rc::new(RefCell::new(Some(rx)));
        (tx, slot)
    });

    let notifier = use_hook(|| ToastNotifier::new(tx.clone(), config.timing.toast_timeline()));
    use_context_provider(|| notifier.clone());

    // Event pump
    let timing = config.timing.clone();
    use_future(move || {
        let mut state = state;
        let timing = timing.clone();
        let tx = tx.clone();
        let slot = slot.clone();

        async move {
            let Some(mut rx) = slot.borrow_mut().take() else {
                return;
            };

            tracing::info!("Portfolio view mounted");
            let _timers = match ViewTimers::start(&timing, tx) {
                Ok(timers) => Some(timers),
                Err(e) => {
                    tracing::error!(error = %e, "View timers not started");
                    None
                }
            };

            while let Some(event) = rx.recv().await {
                tracing::trace!(?event, "Applying view event");
                state.write().process_event(event);
            }
        }
    });

    use_drop(|| {
        tracing::info!("Portfolio view unmounted");
    });

    let (loading, theme) = {
        let s = state.read();
        (s.loading, s.theme())
    };

    if loading {
        return rsx! {
            ThemedRoot {
                theme,
                Splash { name: config.profile.name.clone() }
            }
        };
    }

    rsx! {
        ThemedRoot {
            theme,
            div {
                class: "portfolio",

                BackgroundOrbs {}

                NavBar { state }

                main {
                    class: "page",
                    Hero {}
                    About { state }
                    ProjectGallery {}
                    ContactSection { state }
                }

                Footer {}

                ToastLayer { state }
            }
        }
    }
}

/// Slowly pulsing decoration behind the page.
#[component]
fn BackgroundOrbs() -> Element {
    rsx! {
        div {
            class: "page-bg",
            div { class: "orb orb-top" }
            div { class: "orb orb-bottom" }
            div { class: "orb orb-center" }
        }
    }
}
