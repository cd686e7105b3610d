//! Motion preference hook.

use dioxus::prelude::*;
use folio_core::MotionGate;

use crate::host::{use_host, Host, REDUCED_MOTION_QUERY};

/// Resolve the reduced-motion gate once per component instance.
///
/// `None` while a live webview is still answering the media query. With an
/// override, or on a static host, the gate is resolved before first render.
pub fn use_motion_gate(override_value: Option<bool>) -> Signal<Option<MotionGate>> {
    let host = use_host();

    let mut gate = use_signal(|| match host {
        Host::Static(signals) => Some(MotionGate::resolve(
            override_value,
            signals.prefers_reduced_motion,
        )),
        Host::Interactive if override_value.is_some() => {
            Some(MotionGate::resolve(override_value, None))
        }
        Host::Interactive => None,
    });

    use_effect(move || {
        if gate.peek().is_some() {
            return;
        }
        spawn(async move {
            let platform_signal = match document::eval(REDUCED_MOTION_QUERY).await {
                Ok(value) => value.as_bool(),
                Err(e) => {
                    tracing::warn!("Reduced-motion query failed, allowing motion: {:?}", e);
                    None
                }
            };
            gate.set(Some(MotionGate::resolve(None, platform_signal)));
        });
    });

    gate
}
