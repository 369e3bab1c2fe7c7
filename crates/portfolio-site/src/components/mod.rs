//! UI components for the portfolio page.

mod about;
mod app;
mod contact;
mod footer;
mod hero;
pub mod icons;
mod nav;
mod projects;
mod section_header;
mod splash;
mod toast;

pub use about::*;
pub use app::*;
pub use contact::*;
pub use footer::*;
pub use hero::*;
pub use nav::*;
pub use projects::*;
pub use section_header::*;
pub use splash::*;
pub use toast::*;
