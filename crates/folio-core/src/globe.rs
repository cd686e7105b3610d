//! Globe visualization parameters and load state.
//!
//! The globe is an opaque external widget. Folio only decides whether it is
//! shown, what it is configured with, and what stands in for it while its
//! code loads.

use serde::{Deserialize, Serialize};

/// Fixed configuration handed to the globe widget.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSpec {
    /// Texture applied to the sphere
    pub image_url: String,
    /// Canvas background
    pub background_color: String,
    pub width: u32,
    pub height: u32,
    /// Where the widget's code is fetched from on demand
    pub script_url: String,
}

impl Default for GlobeSpec {
    fn default() -> Self {
        Self {
            image_url: "//unpkg.com/three-globe/example/img/earth-blue-marble.jpg".to_string(),
            background_color: "rgba(0, 0, 0, 0)".to_string(),
            width: 300,
            height: 300,
            script_url: "https://unpkg.com/globe.gl".to_string(),
        }
    }
}

/// Load state of the globe widget.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum GlobeLoad {
    /// Nothing requested yet
    #[default]
    Unloaded,
    /// Widget code is being fetched
    Loading,
    /// Widget constructed in its container
    Ready,
    /// Fetch or construction failed; the placeholder stays
    Failed(String),
}

impl GlobeLoad {
    /// Move to `Loading`. Returns false when a load was already requested.
    pub fn begin(&mut self) -> bool {
        if *self != GlobeLoad::Unloaded {
            return false;
        }
        *self = GlobeLoad::Loading;
        true
    }

    /// Record the load result. Ignored unless a load is in flight.
    pub fn finish(&mut self, result: Result<(), String>) {
        if *self != GlobeLoad::Loading {
            return;
        }
        *self = match result {
            Ok(()) => GlobeLoad::Ready,
            Err(reason) => {
                tracing::warn!("Globe widget failed to load: {}", reason);
                GlobeLoad::Failed(reason)
            }
        };
    }

    /// Whether the empty placeholder is shown instead of the widget.
    pub fn shows_placeholder(&self) -> bool {
        !matches!(self, GlobeLoad::Ready)
    }

    /// Whether a widget may exist host-side and must be destroyed when the
    /// globe unmounts. A load in flight counts: the host builds the widget
    /// once its code arrives.
    pub fn needs_teardown(&self) -> bool {
        matches!(self, GlobeLoad::Loading | GlobeLoad::Ready)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, GlobeLoad::Ready)
    }
}

/// The globe subtree is rendered only for non-mobile viewports.
pub fn globe_visible(is_mobile: bool) -> bool {
    !is_mobile
}
