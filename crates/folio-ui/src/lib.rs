//! Folio UI Components
//!
//! Dioxus components for the portfolio hero section.
//!
//! ## Layout
//!
//! - **components**: `HeroSection` and the pieces it is built from
//! - **hooks**: viewport monitor, motion gate and reveal sequencer bound to a
//!   component's lifetime
//! - **host**: whether signals come from a live webview or are fixed
//! - **render**: static HTML rendering for non-interactive hosts

pub mod components;
pub mod hooks;
pub mod host;
pub mod render;

pub use components::*;
pub use hooks::*;
pub use host::{use_host, Host, StaticHost};
pub use render::render_to_string;
