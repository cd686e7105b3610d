//! Rendering host and the JavaScript snippets sent to a live webview.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use folio_core::GlobeSpec;

/// Where the hero is being rendered.
///
/// Provided through context by the application root. Without a provider the
/// hero assumes a non-interactive host with no display or accessibility
/// signals.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Host {
    /// Live webview: widths, motion preference and the globe widget come
    /// from JavaScript
    Interactive,
    /// Static HTML or tests: fixed signals, no resize listener, no globe load
    Static(StaticHost),
}

/// Signals assumed by a non-interactive host.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct StaticHost {
    pub viewport_width: Option<f64>,
    pub prefers_reduced_motion: Option<bool>,
}

impl Default for Host {
    fn default() -> Self {
        Host::Static(StaticHost::default())
    }
}

/// Host from context, or the non-interactive default.
pub fn use_host() -> Host {
    use_hook(|| try_consume_context::<Host>().unwrap_or_default())
}

static NEXT_DOM_ID: AtomicU64 = AtomicU64::new(1);

/// Unique id for per-instance DOM nodes and window-level handles.
pub(crate) fn next_dom_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_DOM_ID.fetch_add(1, Ordering::Relaxed))
}

pub(crate) const REDUCED_MOTION_QUERY: &str =
    "return window.matchMedia('(prefers-reduced-motion: reduce)').matches;";

/// Reports the current width, then every width seen by a resize listener
/// stored under `key`.
pub(crate) fn viewport_listen_js(key: &str) -> String {
    let key = js_string(key);
    format!(
        r#"
const handler = () => dioxus.send(window.innerWidth);
window.__folioResize = window.__folioResize || {{}};
window.__folioResize[{key}] = handler;
window.addEventListener('resize', handler);
handler();
"#
    )
}

pub(crate) fn viewport_unlisten_js(key: &str) -> String {
    let key = js_string(key);
    format!(
        r#"
const handlers = window.__folioResize || {{}};
if (handlers[{key}]) {{
  window.removeEventListener('resize', handlers[{key}]);
  delete handlers[{key}];
}}
"#
    )
}

/// Fetches the globe widget on first use and builds it inside `#mount_id`.
pub(crate) fn globe_mount_js(mount_id: &str, spec: &GlobeSpec) -> String {
    let id = js_string(mount_id);
    let script_url = js_string(&spec.script_url);
    let image_url = js_string(&spec.image_url);
    let background = js_string(&spec.background_color);
    let (width, height) = (spec.width, spec.height);
    format!(
        r#"
const el = document.getElementById({id});
if (!el) {{
  throw new Error('globe container missing');
}}
if (!window.Globe) {{
  await new Promise((resolve, reject) => {{
    const script = document.createElement('script');
    script.src = {script_url};
    script.onload = resolve;
    script.onerror = () => reject(new Error('globe widget failed to load'));
    document.head.appendChild(script);
  }});
}}
window.__folioGlobesCancelled = window.__folioGlobesCancelled || {{}};
if (!el.isConnected || window.__folioGlobesCancelled[{id}]) {{
  delete window.__folioGlobesCancelled[{id}];
  return false;
}}
window.__folioGlobes = window.__folioGlobes || {{}};
window.__folioGlobes[{id}] = window.Globe()(el)
  .globeImageUrl({image_url})
  .backgroundColor({background})
  .width({width})
  .height({height});
return true;
"#
    )
}

/// Destroys a built widget, or marks a build still waiting on the widget
/// code as cancelled so it never constructs.
pub(crate) fn globe_destroy_js(mount_id: &str) -> String {
    let id = js_string(mount_id);
    format!(
        r#"
const globes = window.__folioGlobes || {{}};
const globe = globes[{id}];
if (globe) {{
  if (typeof globe._destructor === 'function') {{
    globe._destructor();
  }}
  delete globes[{id}];
}} else {{
  window.__folioGlobesCancelled = window.__folioGlobesCancelled || {{}};
  window.__folioGlobesCancelled[{id}] = true;
}}
"#
    )
}

/// Quote a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
