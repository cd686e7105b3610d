//! Motion Preference Gate
//!
//! Resolved once at mount from the reduced-motion accessibility signal and
//! never re-evaluated.

/// Where the resolved preference came from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MotionSource {
    /// Forced by configuration or the command line
    Override,
    /// Read from the platform's reduced-motion query
    Platform,
    /// No signal available; motion allowed
    Fallback,
}

/// Immutable reduced-motion decision for one hero instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MotionGate {
    prefers_reduced_motion: bool,
    source: MotionSource,
}

impl MotionGate {
    /// Resolve the gate.
    ///
    /// An override wins over the platform signal. With neither, motion is
    /// allowed.
    pub fn resolve(override_value: Option<bool>, platform_signal: Option<bool>) -> Self {
        let gate = match (override_value, platform_signal) {
            (Some(value), _) => Self {
                prefers_reduced_motion: value,
                source: MotionSource::Override,
            },
            (None, Some(value)) => Self {
                prefers_reduced_motion: value,
                source: MotionSource::Platform,
            },
            (None, None) => Self::allow_motion(),
        };
        tracing::debug!(
            reduced = gate.prefers_reduced_motion,
            source = ?gate.source,
            "Motion preference resolved"
        );
        gate
    }

    /// Gate used when no accessibility context exists.
    pub fn allow_motion() -> Self {
        Self {
            prefers_reduced_motion: false,
            source: MotionSource::Fallback,
        }
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.prefers_reduced_motion
    }

    pub fn animations_enabled(&self) -> bool {
        !self.prefers_reduced_motion
    }

    pub fn source(&self) -> MotionSource {
        self.source
    }
}

impl Default for MotionGate {
    fn default() -> Self {
        Self::allow_motion()
    }
}
