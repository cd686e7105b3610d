//! Non-interactive rendering of the hero to an HTML string.

use dioxus::prelude::*;
use folio_core::HeroConfig;

use crate::components::HeroSection;
use crate::host::{Host, StaticHost};

#[derive(Clone, PartialEq, Props)]
struct StaticHeroProps {
    config: HeroConfig,
    host: StaticHost,
}

#[component]
fn StaticHero(props: StaticHeroProps) -> Element {
    use_context_provider(|| Host::Static(props.host));
    rsx! {
        HeroSection { config: props.config.clone() }
    }
}

/// Render the hero section as it looks right after mount on `host`.
///
/// Only the first render is produced and the dom is dropped before any
/// effect runs. The reveal timer the hero would arm at mount therefore never
/// starts, and with motion allowed the content blocks are absent. Static
/// hosts never register a resize listener or load the globe.
pub fn render_to_string(config: HeroConfig, host: StaticHost) -> String {
    let mut dom = VirtualDom::new_with_props(StaticHero, StaticHeroProps { config, host });
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}
