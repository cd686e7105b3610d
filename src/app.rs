use dioxus::prelude::*;
use folio_ui::Host;

use crate::context::get_hero_config;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Portfolio landing page with the hero section
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the hero configuration, the live webview host and
/// routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_hero_config);
    use_context_provider(|| Host::Interactive);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
