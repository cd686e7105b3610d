//! Property-based tests for the viewport monitor and reveal sequencer
//!
//! Uses proptest to check the flags against arbitrary event sequences.

use folio_core::{
    is_mobile_width, HeroConfig, MotionGate, RevealPhase, RevealSequencer, StaggerPolicy,
    ViewportMonitor,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Viewport widths, dense around the breakpoint
fn width_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => 0.0f64..4000.0,
        2 => 470.0f64..490.0,
        1 => Just(479.0),
        1 => Just(480.0),
    ]
}

/// Events a hero instance can receive after mount
#[derive(Debug, Clone)]
enum HeroEvent {
    Resize(f64),
    TimerFired,
    Rerender,
}

fn events_strategy(max_events: usize) -> impl Strategy<Value = Vec<HeroEvent>> {
    prop::collection::vec(
        prop_oneof![
            4 => width_strategy().prop_map(HeroEvent::Resize),
            1 => Just(HeroEvent::TimerFired),
            2 => Just(HeroEvent::Rerender),
        ],
        0..max_events,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The mobile flag always reflects the last observed width
    #[test]
    fn mobile_flag_matches_last_width(initial in width_strategy(), widths in prop::collection::vec(width_strategy(), 0..50)) {
        let mut monitor = ViewportMonitor::default();
        monitor.attach(Some(initial));
        let mut last = initial;
        for width in widths {
            monitor.observe(width);
            last = width;
        }
        prop_assert_eq!(monitor.is_mobile(), last < 480.0);
        prop_assert_eq!(monitor.is_mobile(), is_mobile_width(last, 480));
    }

    /// Once the mounted flag is set it is never cleared
    #[test]
    fn mounted_flag_never_reverts(events in events_strategy(60)) {
        let mut seq = RevealSequencer::new(MotionGate::allow_motion(), HeroConfig::default().timing());
        let mut monitor = ViewportMonitor::default();
        monitor.attach(Some(1024.0));
        seq.start();

        let mut seen_mounted = false;
        for event in events {
            match event {
                HeroEvent::Resize(width) => { monitor.observe(width); }
                HeroEvent::TimerFired => { seq.expire(); }
                HeroEvent::Rerender => { let _ = seq.blocks(); }
            }
            if seen_mounted {
                prop_assert!(seq.is_mounted());
                prop_assert_eq!(seq.phase(), RevealPhase::Revealed);
                prop_assert_eq!(seq.blocks().len(), 5);
            }
            seen_mounted |= seq.is_mounted();
        }
    }

    /// Reduced motion shows every block no matter what happens afterwards
    #[test]
    fn reduced_motion_always_shows_everything(events in events_strategy(30)) {
        let mut seq = RevealSequencer::new(MotionGate::resolve(Some(true), None), HeroConfig::default().timing());
        prop_assert_eq!(seq.start(), None);
        for event in events {
            if let HeroEvent::TimerFired = event {
                seq.expire();
            }
            prop_assert_eq!(seq.blocks().len(), 5);
            prop_assert!(!seq.is_mounted());
        }
    }

    /// Stagger delays are strictly increasing by one step
    #[test]
    fn stagger_strictly_increasing(step_ms in 1u64..1000, count in 1usize..20) {
        let policy = StaggerPolicy::new(std::time::Duration::from_millis(step_ms));
        for index in 1..count {
            prop_assert_eq!(policy.delay(index) - policy.delay(index - 1), policy.step());
        }
    }
}
