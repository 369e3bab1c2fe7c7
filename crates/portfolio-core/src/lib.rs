//! Core of the portfolio site.
//!
//! Everything the portfolio view does besides drawing lives here: the
//! view's local state machine, the contact form, the static catalog of
//! skills and projects, site configuration, scheduled timer tasks and the
//! transient notification lifecycle. The desktop app in `portfolio-site`
//! only renders this state and forwards user input into it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod nav;
pub mod notify;
pub mod profile;
pub mod schedule;
pub mod state;
pub mod theme;

pub use catalog::{Catalog, Project, Skill};
pub use config::{SiteConfig, TimingConfig};
pub use error::{ConfigError, ConfigResult, FormError};
pub use events::ViewEvent;
pub use form::{ContactForm, FormField, Submission};
pub use nav::NavSection;
pub use notify::{Notifier, Toast, ToastId, ToastNotifier, ToastPhase, ToastTimeline};
pub use profile::{Profile, SocialKind, SocialLink};
pub use schedule::{ScheduledTask, ViewTimers};
pub use state::{ViewState, SUBMIT_CONFIRMATION};
pub use theme::Theme;
