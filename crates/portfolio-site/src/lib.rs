//! Single-page personal portfolio.
//!
//! This crate provides a Dioxus desktop application rendering the
//! portfolio view on top of the state machine in `portfolio-core`.

pub mod components;
pub mod theme;

/// CSS styles embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
