//! State of the portfolio view.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::error::FormError;
use crate::events::ViewEvent;
use crate::form::{ContactForm, FormField, Submission};
use crate::nav::NavSection;
use crate::notify::{Notifier, Toast, ToastId, ToastPhase};
use crate::theme::Theme;

/// Message shown after the contact form is accepted.
pub const SUBMIT_CONFIRMATION: &str = "Message sent successfully!";

/// Everything the view mutates while mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Splash screen is up.
    pub loading: bool,

    pub dark_mode: bool,

    pub mobile_menu_open: bool,

    /// Current carousel image, always `< image_count`.
    pub carousel_index: usize,

    /// Contact form values.
    pub form: ContactForm,

    /// Live toasts, oldest first.
    pub toasts: Vec<Toast>,

    /// Accepted submissions since mount.
    pub submissions: u32,

    image_count: usize,
    toast_visible: Duration,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl ViewState {
    /// Creates the state a freshly mounted view starts with.
    pub fn new(image_count: usize, start_dark: bool, toast_visible: Duration) -> Self {
        Self {
            loading: true,
            dark_mode: start_dark,
            mobile_menu_open: false,
            carousel_index: 0,
            form: ContactForm::new(),
            toasts: Vec::new(),
            submissions: 0,
            image_count: image_count.max(1),
            toast_visible,
        }
    }

    /// Creates the initial state for a site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            config.catalog.image_count(),
            config.start_dark,
            config.timing.toast_visible(),
        )
    }

    /// Returns the number of images the carousel cycles through.
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Returns the theme matching the dark-mode flag.
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Applies a single event.
    pub fn process_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::LoadingFinished => {
                self.finish_loading();
            }
            ViewEvent::CarouselTick => {
                self.advance_carousel();
            }
            ViewEvent::ToggleDarkMode => {
                self.toggle_dark_mode();
            }
            ViewEvent::ToggleMobileMenu => {
                self.toggle_mobile_menu();
            }
            ViewEvent::NavLinkActivated(section) => self.navigate(section),
            ViewEvent::FieldChanged { field, value } => self.set_field(field, value),
            ViewEvent::ToastShown(id) => self.set_toast_phase(id, ToastPhase::Shown),
            ViewEvent::ToastHiding(id) => self.set_toast_phase(id, ToastPhase::Hiding),
            ViewEvent::ToastRemoved(id) => self.remove_toast(id),
        }
    }

    /// Drops the splash screen. Returns false if it was already gone.
    pub fn finish_loading(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        tracing::info!("Loading finished");
        true
    }

    /// Moves to the next carousel image and returns its index.
    pub fn advance_carousel(&mut self) -> usize {
        self.carousel_index = (self.carousel_index + 1) % self.image_count;
        self.carousel_index
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(theme = self.theme().css_value(), "Theme changed");
        self.dark_mode
    }

    /// Flips the mobile menu and returns the new value.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Following a nav link always closes the mobile menu.
    pub fn navigate(&mut self, section: NavSection) {
        tracing::debug!(section = section.anchor(), "Navigating");
        self.mobile_menu_open = false;
    }

    /// Overwrites one form field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Submits the contact form.
    ///
    /// Nothing is sent anywhere. An accepted form triggers one confirmation
    /// toast through `notifier` and is then cleared; a rejected form is
    /// left as it was.
    pub fn submit_contact<N>(&mut self, notifier: &N) -> Result<Submission, FormError>
    where
        N: Notifier + ?Sized,
    {
        if let Err(e) = self.form.validate() {
            tracing::warn!(error = %e, "Contact form rejected");
            return Err(e);
        }

        let toast = notifier.show(SUBMIT_CONFIRMATION, self.toast_visible);
        self.toasts.push(Toast::new(toast, SUBMIT_CONFIRMATION));
        self.submissions += 1;

        let form = std::mem::take(&mut self.form);
        tracing::info!(toast, "Contact form submitted");

        Ok(Submission { form, toast })
    }

    /// Returns a live toast by id.
    pub fn toast(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn set_toast_phase(&mut self, id: ToastId, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }

    fn remove_toast(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records `show` calls without scheduling anything.
    #[derive(Default)]
    struct RecordingNotifier {
        shown: RefCell<Vec<(String, Duration)>>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, message: &str, duration: Duration) -> ToastId {
            let mut shown = self.shown.borrow_mut();
            shown.push((message.to_string(), duration));
            shown.len() as ToastId
        }
    }

    fn fill_jane(state: &mut ViewState) {
        state.process_event(ViewEvent::FieldChanged {
            field: FormField::Name,
            value: "Jane".into(),
        });
        state.process_event(ViewEvent::FieldChanged {
            field: FormField::Email,
            value: "jane@x.com".into(),
        });
        state.process_event(ViewEvent::FieldChanged {
            field: FormField::Message,
            value: "Hello".into(),
        });
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert!(state.loading);
        assert!(!state.dark_mode);
        assert!(!state.mobile_menu_open);
        assert_eq!(state.carousel_index, 0);
        assert!(state.form.is_empty());
        assert!(state.toasts.is_empty());
        assert_eq!(state.image_count(), 4);
    }

    #[test]
    fn test_carousel_index_is_tick_count_mod_len() {
        for len in [1, 3, 4, 7] {
            let mut state = ViewState::new(len, false, Duration::from_millis(3000));
            for k in 1..=20 {
                state.process_event(ViewEvent::CarouselTick);
                assert_eq!(state.carousel_index, k % len);
            }
        }
    }

    #[test]
    fn test_loading_finishes_once() {
        let mut state = ViewState::default();
        assert!(state.finish_loading());
        assert!(!state.finish_loading());
        state.process_event(ViewEvent::LoadingFinished);
        assert!(!state.loading);
    }

    #[test]
    fn test_double_toggle_dark_mode() {
        let mut state = ViewState::default();
        let original = state.dark_mode;
        state.process_event(ViewEvent::ToggleDarkMode);
        assert_eq!(state.theme(), Theme::Dark);
        state.process_event(ViewEvent::ToggleDarkMode);
        assert_eq!(state.dark_mode, original);
    }

    #[test]
    fn test_start_dark_from_config() {
        let config = SiteConfig {
            start_dark: true,
            ..SiteConfig::default()
        };
        assert_eq!(ViewState::from_config(&config).theme(), Theme::Dark);
    }

    #[test]
    fn test_nav_link_closes_mobile_menu() {
        let mut state = ViewState::default();
        state.process_event(ViewEvent::ToggleMobileMenu);
        assert!(state.mobile_menu_open);

        state.process_event(ViewEvent::NavLinkActivated(NavSection::Projects));
        assert!(!state.mobile_menu_open);

        // Stays closed if it already was
        state.process_event(ViewEvent::NavLinkActivated(NavSection::Home));
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_editing_email_keeps_other_fields() {
        let mut state = ViewState::default();
        fill_jane(&mut state);
        state.process_event(ViewEvent::FieldChanged {
            field: FormField::Email,
            value: "jane@y.org".into(),
        });

        assert_eq!(state.form.name, "Jane");
        assert_eq!(state.form.email, "jane@y.org");
        assert_eq!(state.form.phone, "");
        assert_eq!(state.form.message, "Hello");
    }

    #[test]
    fn test_submit_resets_form_and_notifies_once() {
        let mut state = ViewState::default();
        let notifier = RecordingNotifier::default();
        fill_jane(&mut state);

        let submission = state.submit_contact(&notifier).unwrap();

        assert_eq!(submission.form.name, "Jane");
        assert_eq!(submission.form.email, "jane@x.com");
        assert!(state.form.is_empty());
        assert_eq!(
            *notifier.shown.borrow(),
            vec![(SUBMIT_CONFIRMATION.to_string(), Duration::from_millis(3000))]
        );
        assert_eq!(state.submissions, 1);

        let toast = state.toast(submission.toast).unwrap();
        assert_eq!(toast.phase, ToastPhase::Pending);
        assert_eq!(toast.message, SUBMIT_CONFIRMATION);
    }

    #[test]
    fn test_rejected_submit_keeps_form() {
        let mut state = ViewState::default();
        let notifier = RecordingNotifier::default();
        state.set_field(FormField::Name, "Jane");

        let err = state.submit_contact(&notifier).unwrap_err();

        assert_eq!(err, FormError::MissingField(FormField::Email));
        assert_eq!(state.form.name, "Jane");
        assert!(notifier.shown.borrow().is_empty());
        assert!(state.toasts.is_empty());
        assert_eq!(state.submissions, 0);
    }

    #[test]
    fn test_whitespace_only_fields_are_submitted() {
        let mut state = ViewState::default();
        let notifier = RecordingNotifier::default();
        state.set_field(FormField::Name, "   ");
        state.set_field(FormField::Email, "jane@x.com");
        state.set_field(FormField::Message, "Hello");

        let submission = state.submit_contact(&notifier).unwrap();

        assert_eq!(submission.form.name, "   ");
        assert!(state.form.is_empty());
        assert_eq!(notifier.shown.borrow().len(), 1);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_toast_phases() {
        let mut state = ViewState::default();
        let notifier = RecordingNotifier::default();
        fill_jane(&mut state);
        let id = state.submit_contact(&notifier).unwrap().toast;

        state.process_event(ViewEvent::ToastShown(id));
        assert_eq!(state.toast(id).unwrap().phase, ToastPhase::Shown);

        state.process_event(ViewEvent::ToastHiding(id));
        assert_eq!(state.toast(id).unwrap().phase, ToastPhase::Hiding);

        state.process_event(ViewEvent::ToastRemoved(id));
        assert!(state.toast(id).is_none());

        // Late events for a removed toast are ignored
        state.process_event(ViewEvent::ToastShown(id));
        assert!(state.toasts.is_empty());
    }
}
