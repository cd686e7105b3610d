//! Folio Core Library
//!
//! Toolkit-independent logic behind the portfolio hero section.
//!
//! ## Overview
//!
//! The hero shows five content blocks and a decorative globe. Three concerns
//! decide what is on screen at any moment:
//!
//! - **Viewport Monitor** ([`ViewportMonitor`]): is the display narrower than
//!   the mobile breakpoint? Hides the globe when it is.
//! - **Motion Preference Gate** ([`MotionGate`]): resolved once from the
//!   reduced-motion signal; disables the entrance animation.
//! - **Staggered Reveal Sequencer** ([`RevealSequencer`]): waits `nav_delay`,
//!   then reveals the blocks with a fade-up cascade.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{HeroConfig, MotionGate, RevealSequencer, RevealTimer, TimerOutcome};
//!
//! let config = HeroConfig::default();
//! let mut seq = RevealSequencer::new(MotionGate::allow_motion(), config.timing());
//!
//! if let Some(delay) = seq.start() {
//!     if RevealTimer::new(delay).wait().await == TimerOutcome::Expired {
//!         seq.expire();
//!     }
//! }
//! assert_eq!(seq.blocks().len(), 5);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod globe;
pub mod motion;
pub mod sequencer;
pub mod timer;
pub mod transition;
pub mod viewport;

// Re-exports
pub use config::HeroConfig;
pub use content::{ContentBlock, HeroContent, ResumeLink};
pub use error::{FolioError, FolioResult};
pub use globe::{globe_visible, GlobeLoad, GlobeSpec};
pub use motion::{MotionGate, MotionSource};
pub use sequencer::{RevealPhase, RevealSequencer, RevealTiming, RevealedBlock};
pub use timer::{RevealTimer, TimerCanceller, TimerOutcome};
pub use transition::{StaggerPolicy, Transition, TransitionStage, FADE_UP};
pub use viewport::{is_mobile_width, ListenerState, ViewportMonitor, MOBILE_BREAKPOINT};
