//! Globe Visualization
//!
//! Decorative 3D globe. The widget's code is fetched only when this component
//! mounts; until it is built the container holds an empty placeholder, and a
//! failed load leaves the placeholder in place. Unmounting mid-load cancels
//! the pending build as well as destroying a built widget.

use dioxus::prelude::*;
use folio_core::{GlobeLoad, GlobeSpec};

use crate::host::{globe_destroy_js, globe_mount_js, next_dom_id, use_host, Host};

/// Properties for the GlobeView component
#[derive(Clone, PartialEq, Props)]
pub struct GlobeViewProps {
    /// Widget configuration (texture, background, size)
    pub spec: GlobeSpec,
}

/// Renders the globe container and loads the widget into it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if !is_mobile {
///         GlobeView { spec: GlobeSpec::default() }
///     }
/// }
/// ```
#[component]
pub fn GlobeView(props: GlobeViewProps) -> Element {
    let host = use_host();
    let mount_id = use_hook(|| next_dom_id("folio-globe"));
    let script = use_hook(|| globe_mount_js(&mount_id, &props.spec));
    let mut load = use_signal(GlobeLoad::default);

    use_effect(move || {
        if host != Host::Interactive || !load.write().begin() {
            return;
        }
        let script = script.clone();
        spawn(async move {
            let result = match document::eval(&script).await {
                Ok(value) if value.as_bool() == Some(true) => Ok(()),
                Ok(value) if value.as_bool() == Some(false) => {
                    Err("globe container detached before the widget loaded".to_string())
                }
                Ok(other) => Err(format!("unexpected widget result: {}", other)),
                Err(e) => Err(format!("{:?}", e)),
            };
            load.write().finish(result);
        });
    });

    let destroy_id = mount_id.clone();
    use_drop(move || {
        if host != Host::Interactive {
            return;
        }
        let needs_teardown = load.try_peek().map(|state| state.needs_teardown()).unwrap_or(true);
        if needs_teardown {
            let _ = document::eval(&globe_destroy_js(&destroy_id));
            tracing::debug!("Globe widget destroyed");
        }
    });

    let state = load();
    let canvas_class = if state.shows_placeholder() {
        "globe-canvas globe-placeholder"
    } else {
        "globe-canvas"
    };

    rsx! {
        div { class: "globe-container", "aria-hidden": "true",
            div { id: "{mount_id}", class: "{canvas_class}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_host_shows_placeholder() {
        let html = dioxus::ssr::render_element(rsx! {
            GlobeView { spec: GlobeSpec::default() }
        });
        assert!(html.contains(r#"class="globe-container""#), "{html}");
        assert!(html.contains("globe-placeholder"), "{html}");
    }
}
