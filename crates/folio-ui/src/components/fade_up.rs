//! Fade-up enter transition wrapper
//!
//! Applies `<prefix>-enter` on mount, adds `<prefix>-enter-active` on the
//! next frame so the browser animates towards it, and settles on
//! `<prefix>-enter-done` once the transition duration has passed.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{Transition, TransitionStage};

/// Time given to the webview to paint the start classes.
const FRAME: Duration = Duration::from_millis(16);

/// Properties for the FadeUp component
#[derive(Clone, PartialEq, Props)]
pub struct FadeUpProps {
    /// Class prefix, duration and stagger delay of this block
    pub transition: Transition,
    pub children: Element,
}

/// Wraps one content block in a class-based enter transition.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FadeUp { transition,
///         h1 { "Hi, this is" }
///     }
/// }
/// ```
#[component]
pub fn FadeUp(props: FadeUpProps) -> Element {
    let mut stage = use_signal(TransitionStage::default);
    let duration = props.transition.duration;

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(FRAME).await;
            stage.set(TransitionStage::EnterActive);
            tokio::time::sleep(duration).await;
            stage.set(TransitionStage::EnterDone);
        });
    });

    let class = stage().class_names(props.transition.class_prefix);
    let style = props.transition.style();

    rsx! {
        div { class: "{class}", style: "{style}", {props.children} }
    }
}
