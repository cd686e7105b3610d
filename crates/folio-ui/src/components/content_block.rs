//! Markup for each hero content block.

use dioxus::prelude::*;
use folio_core::{ContentBlock, HeroContent};

#[derive(Clone, PartialEq, Props)]
pub struct ContentBlockViewProps {
    pub block: ContentBlock,
    pub content: HeroContent,
}

#[component]
pub fn ContentBlockView(props: ContentBlockViewProps) -> Element {
    let text = props.content.text(props.block).to_string();

    match props.block {
        ContentBlock::Greeting => rsx! { h1 { "{text}" } },
        ContentBlock::Name => rsx! { h2 { class: "big-heading", "{text}" } },
        ContentBlock::Tagline => rsx! { h3 { "{text}" } },
        ContentBlock::Bio => rsx! { p { "{text}" } },
        ContentBlock::ResumeLink => {
            let href = props.content.resume.href.clone();
            rsx! {
                a {
                    class: "email-link",
                    href: "{href}",
                    target: "_blank",
                    rel: "noreferrer",
                    "{text}"
                }
            }
        }
    }
}
