//! Home page - the portfolio landing hero.

use dioxus::prelude::*;
use folio_ui::HeroSection;

use crate::context::use_hero_config;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let config = use_hero_config();

    rsx! {
        main { class: "landing",
            HeroSection { config }
        }
    }
}
