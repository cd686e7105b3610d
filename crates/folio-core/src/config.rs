//! Hero configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::HeroContent;
use crate::error::{FolioError, FolioResult};
use crate::globe::GlobeSpec;
use crate::sequencer::RevealTiming;
use crate::transition::StaggerPolicy;
use crate::viewport::MOBILE_BREAKPOINT;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Delay before the content is revealed (ms)
    pub nav_delay_ms: u64,
    /// Duration of each block's enter transition (ms)
    pub loader_delay_ms: u64,
    /// Stagger step between blocks (ms)
    pub stagger_step_ms: u64,
    /// Widths strictly below this are treated as mobile
    pub mobile_breakpoint: u32,
    /// Forces the reduced-motion decision instead of asking the platform
    pub reduced_motion: Option<bool>,
    pub content: HeroContent,
    pub globe: GlobeSpec,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            nav_delay_ms: 1000,
            loader_delay_ms: 2000,
            stagger_step_ms: 100,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            reduced_motion: None,
            content: HeroContent::default(),
            globe: GlobeSpec::default(),
        }
    }
}

impl HeroConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded hero config");
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> FolioResult<Self> {
        let config: HeroConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.mobile_breakpoint == 0 {
            return Err(FolioError::InvalidConfig(
                "mobile_breakpoint must be positive".to_string(),
            ));
        }
        if self.stagger_step_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "stagger_step_ms must be positive".to_string(),
            ));
        }
        if self.globe.width == 0 || self.globe.height == 0 {
            return Err(FolioError::InvalidConfig(format!(
                "globe dimensions must be positive, got {}x{}",
                self.globe.width, self.globe.height
            )));
        }
        if self.content.resume.href.trim().is_empty() {
            return Err(FolioError::InvalidConfig(
                "content.resume.href must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timing(&self) -> RevealTiming {
        RevealTiming {
            nav_delay: Duration::from_millis(self.nav_delay_ms),
            loader_delay: Duration::from_millis(self.loader_delay_ms),
            stagger: StaggerPolicy::new(Duration::from_millis(self.stagger_step_ms)),
        }
    }
}
