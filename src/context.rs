//! Hero configuration context for Folio.
//!
//! The configuration is resolved once in `main` and read by pages through
//! [`use_hero_config`].
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_hero_config();
//! rsx! { HeroSection { config } }
//! ```

use dioxus::prelude::*;
use folio_core::HeroConfig;

/// Get the hero configuration.
/// Uses the global config set from the command line, or defaults.
pub fn get_hero_config() -> HeroConfig {
    crate::get_hero_config()
}

/// Hook to access the hero configuration from context.
///
/// Falls back to [`get_hero_config`] when no provider is mounted.
pub fn use_hero_config() -> HeroConfig {
    use_hook(|| try_consume_context::<HeroConfig>().unwrap_or_else(get_hero_config))
}
