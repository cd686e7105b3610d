//! Class-based enter transitions and the per-block stagger.

use std::time::Duration;

/// Class prefix of the hero's fade-up entrance.
pub const FADE_UP: &str = "fadeup";

/// Entrance delay per block position.
///
/// Block `i` waits `(i + 1) * step`, so the first block already trails the
/// mount by one step and the cascade extends to any number of blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StaggerPolicy {
    step: Duration,
}

impl StaggerPolicy {
    pub fn new(step: Duration) -> Self {
        Self { step }
    }

    pub fn delay(&self, index: usize) -> Duration {
        let slots = u32::try_from(index + 1).unwrap_or(u32::MAX);
        self.step.saturating_mul(slots)
    }

    pub fn step(&self) -> Duration {
        self.step
    }
}

impl Default for StaggerPolicy {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

/// Transition attached to one revealed block.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transition {
    /// CSS class prefix (`fadeup`)
    pub class_prefix: &'static str,
    /// How long the enter animation runs
    pub duration: Duration,
    /// `transition-delay` for this block
    pub delay: Duration,
}

impl Transition {
    /// Inline style carrying the stagger delay.
    pub fn style(&self) -> String {
        format!("transition-delay: {}ms", self.delay.as_millis())
    }
}

/// Stage of an enter transition.
///
/// `Enter` applies the start classes, `EnterActive` is set on the next frame
/// so the browser animates towards it, `EnterDone` once the duration passed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransitionStage {
    #[default]
    Enter,
    EnterActive,
    EnterDone,
}

impl TransitionStage {
    /// Classes for this stage under `prefix`.
    pub fn class_names(&self, prefix: &str) -> String {
        match self {
            TransitionStage::Enter => format!("{prefix}-enter"),
            TransitionStage::EnterActive => format!("{prefix}-enter {prefix}-enter-active"),
            TransitionStage::EnterDone => format!("{prefix}-enter-done"),
        }
    }

    /// Next stage, saturating at `EnterDone`.
    pub fn advance(self) -> Self {
        match self {
            TransitionStage::Enter => TransitionStage::EnterActive,
            TransitionStage::EnterActive | TransitionStage::EnterDone => TransitionStage::EnterDone,
        }
    }
}
