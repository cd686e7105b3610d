//! Hero Section
//!
//! Greeting, name, tagline, bio and resume link, revealed with a staggered
//! fade-up cascade after `nav_delay`, plus a decorative globe on wider
//! screens.
//!
//! - Reduced motion: every block renders immediately, unwrapped.
//! - Otherwise: nothing until the reveal timer fires, then each block fades
//!   up `(i + 1) * stagger_step` after the previous.

use dioxus::prelude::*;
use folio_core::{globe_visible, HeroConfig};

use super::{ContentBlockView, FadeUp, GlobeView};
use crate::hooks::{use_motion_gate, use_reveal_sequencer, use_viewport_monitor};

/// Properties for the HeroSection component
#[derive(Clone, PartialEq, Props)]
pub struct HeroSectionProps {
    /// Timing, breakpoint, content and globe settings. Read at mount.
    pub config: HeroConfig,
}

/// The portfolio landing hero.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HeroSection { config: HeroConfig::default() }
/// }
/// ```
#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let config = props.config;
    let monitor = use_viewport_monitor(config.mobile_breakpoint);
    let gate = use_motion_gate(config.reduced_motion);
    let sequencer = use_reveal_sequencer(gate, config.timing());

    let is_mobile = monitor.read().is_mobile();
    let blocks = sequencer
        .read()
        .as_ref()
        .map(|seq| seq.blocks())
        .unwrap_or_default();

    let content = config.content.clone();
    let rendered = blocks.into_iter().map(move |revealed| {
        let key = revealed.block.index();
        let body = rsx! {
            ContentBlockView { block: revealed.block, content: content.clone() }
        };
        match revealed.transition {
            Some(transition) => rsx! {
                FadeUp { key: "{key}", transition, {body} }
            },
            None => rsx! {
                div { key: "{key}", class: "hero-block", {body} }
            },
        }
    });

    rsx! {
        section { class: "hero", id: "hero",
            {rendered}
            if globe_visible(is_mobile) {
                GlobeView { spec: config.globe.clone() }
            }
        }
    }
}
