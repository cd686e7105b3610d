//! Reveal sequencer hook.

use dioxus::prelude::*;
use folio_core::{MotionGate, RevealSequencer, RevealTimer, RevealTiming, TimerCanceller, TimerOutcome};

/// Drive a [`RevealSequencer`] for this component instance.
///
/// The sequencer is created as soon as the motion gate resolves. On mount it
/// arms the one-shot reveal timer when motion is allowed, on any host whose
/// effects run; dropping the component tears the sequencer down and cancels
/// a pending timer.
pub fn use_reveal_sequencer(
    gate: Signal<Option<MotionGate>>,
    timing: RevealTiming,
) -> Signal<Option<RevealSequencer>> {
    let mut sequencer =
        use_signal(|| (*gate.peek()).map(|resolved| RevealSequencer::new(resolved, timing)));
    let mut canceller: Signal<Option<TimerCanceller>> = use_signal(|| None);

    use_effect(move || {
        let Some(resolved) = gate() else {
            return;
        };

        let delay = {
            let mut slot = sequencer.write();
            let seq = slot.get_or_insert_with(|| RevealSequencer::new(resolved, timing));
            seq.start()
        };
        let Some(delay) = delay else {
            return;
        };

        let timer = RevealTimer::new(delay);
        canceller.set(Some(timer.canceller()));
        spawn(async move {
            if timer.wait().await == TimerOutcome::Expired {
                if let Some(seq) = sequencer.write().as_mut() {
                    seq.expire();
                }
            }
        });
    });

    use_drop(move || {
        let pending = match sequencer.try_write() {
            Ok(mut slot) => slot.as_mut().map(|seq| seq.teardown()).unwrap_or(false),
            Err(_) => true,
        };
        if pending {
            if let Ok(slot) = canceller.try_peek() {
                if let Some(timer) = slot.as_ref() {
                    timer.cancel();
                    tracing::debug!("Pending reveal timer cancelled on teardown");
                }
            }
        }
    });

    sequencer
}
