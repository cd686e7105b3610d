//! Staggered Reveal Sequencer
//!
//! With motion enabled the hero starts `Hidden`, arms a single timer at mount
//! (`Revealing`) and becomes `Revealed` when it fires. With reduced motion it
//! is `Revealed` from construction and no timer ever exists.
//!
//! ```text
//!   motion:  Hidden --start()--> Revealing --expire()--> Revealed
//!   reduced:                                             Revealed
//! ```

use std::time::Duration;

use crate::content::ContentBlock;
use crate::motion::MotionGate;
use crate::transition::{StaggerPolicy, Transition, FADE_UP};

/// Timing constants consumed by the sequencer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RevealTiming {
    /// Delay between mount and the reveal
    pub nav_delay: Duration,
    /// Duration of each block's enter transition
    pub loader_delay: Duration,
    /// Per-position entrance delay
    pub stagger: StaggerPolicy,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            nav_delay: Duration::from_millis(1000),
            loader_delay: Duration::from_millis(2000),
            stagger: StaggerPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealPhase {
    /// Mounted, timer not armed yet
    Hidden,
    /// Timer armed, waiting for `nav_delay`
    Revealing,
    /// Terminal
    Revealed,
}

/// A block as it should be rendered right now.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RevealedBlock {
    pub block: ContentBlock,
    /// `None` when motion is disabled: render bare, no wrapper
    pub transition: Option<Transition>,
}

/// Reveal state owned by one hero instance.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealSequencer {
    timing: RevealTiming,
    animated: bool,
    phase: RevealPhase,
    mounted: bool,
    torn_down: bool,
}

impl RevealSequencer {
    pub fn new(gate: MotionGate, timing: RevealTiming) -> Self {
        let animated = gate.animations_enabled();
        Self {
            timing,
            animated,
            phase: if animated {
                RevealPhase::Hidden
            } else {
                RevealPhase::Revealed
            },
            mounted: false,
            torn_down: false,
        }
    }

    /// Called once at mount. Returns the delay to arm the one-shot timer
    /// with, or `None` when no timer may exist (reduced motion, already
    /// started, or torn down).
    pub fn start(&mut self) -> Option<Duration> {
        if self.torn_down || self.phase != RevealPhase::Hidden {
            return None;
        }
        self.phase = RevealPhase::Revealing;
        tracing::debug!(delay_ms = self.timing.nav_delay.as_millis() as u64, "Reveal timer armed");
        Some(self.timing.nav_delay)
    }

    /// Timer expiry. Sets the mounted flag; returns false if nothing changed.
    pub fn expire(&mut self) -> bool {
        if self.torn_down {
            tracing::warn!("Reveal timer fired after teardown; ignoring");
            return false;
        }
        if self.phase != RevealPhase::Revealing {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        self.mounted = true;
        tracing::debug!("Hero content revealed");
        true
    }

    /// Component teardown. Returns true when a pending timer must be
    /// cancelled by the caller.
    pub fn teardown(&mut self) -> bool {
        let pending = !self.torn_down && self.phase == RevealPhase::Revealing;
        self.torn_down = true;
        pending
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The mounted flag. Only ever set by [`RevealSequencer::expire`].
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Blocks to render in the current state, in order.
    ///
    /// Reduced motion: all five, unwrapped. Motion before the timer fires:
    /// none. Motion after: all five with staggered fade-up transitions.
    pub fn blocks(&self) -> Vec<RevealedBlock> {
        if !self.animated {
            return ContentBlock::ALL
                .iter()
                .map(|&block| RevealedBlock {
                    block,
                    transition: None,
                })
                .collect();
        }
        if !self.mounted {
            return Vec::new();
        }
        ContentBlock::ALL
            .iter()
            .map(|&block| RevealedBlock {
                block,
                transition: Some(Transition {
                    class_prefix: FADE_UP,
                    duration: self.timing.loader_delay,
                    delay: self.timing.stagger.delay(block.index()),
                }),
            })
            .collect()
    }
}
