//! Viewport monitor hook.

use dioxus::prelude::*;
use folio_core::ViewportMonitor;

use crate::host::{next_dom_id, use_host, viewport_listen_js, viewport_unlisten_js, Host};

/// Track whether the viewport is narrower than `breakpoint`.
///
/// In a live webview the initial width is read at mount and a resize
/// listener keeps the flag current until the component is dropped. The
/// listener is removed on drop whenever its installation was sent, even if
/// the first width never arrived. Static hosts get a single measurement and
/// no listener.
pub fn use_viewport_monitor(breakpoint: u32) -> Signal<ViewportMonitor> {
    let host = use_host();
    let listener_key = use_hook(|| next_dom_id("folio-viewport"));

    let mut monitor = use_signal(|| {
        let mut monitor = ViewportMonitor::new(breakpoint);
        if let Host::Static(signals) = host {
            monitor.snapshot(signals.viewport_width);
        }
        monitor
    });

    let key = listener_key.clone();
    use_effect(move || {
        if host != Host::Interactive {
            return;
        }
        if !monitor.write().request_listener() {
            return;
        }
        let key = key.clone();
        spawn(async move {
            let mut eval = document::eval(&viewport_listen_js(&key));

            let initial = match eval.recv::<f64>().await {
                Ok(width) => Some(width),
                Err(e) => {
                    tracing::warn!("Viewport width unavailable, assuming desktop: {:?}", e);
                    None
                }
            };
            // The listener stays requested on failure, so drop still removes it.
            if !monitor.write().attach(initial) {
                return;
            }
            tracing::debug!(width = ?initial, "Viewport listener registered");

            loop {
                match eval.recv::<f64>().await {
                    Ok(width) => {
                        if monitor.write().observe(width) {
                            tracing::debug!(width, mobile = monitor.peek().is_mobile(), "Viewport class changed");
                        }
                    }
                    Err(e) => {
                        tracing::debug!("Resize channel closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(move || {
        let was_listening = match monitor.try_write() {
            Ok(mut monitor) => monitor.detach(),
            Err(_) => true,
        };
        if was_listening && host == Host::Interactive {
            let _ = document::eval(&viewport_unlisten_js(&listener_key));
            tracing::debug!("Viewport listener removed");
        }
    });

    monitor
}
