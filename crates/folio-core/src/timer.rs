//! Cancellable one-shot reveal timer.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// How a [`RevealTimer`] finished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerOutcome {
    Expired,
    Cancelled,
}

/// One-shot timer owned by a component instance.
///
/// The owner keeps a [`TimerCanceller`] and cancels it on teardown. A
/// cancelled timer never reports `Expired`, even if its deadline passed in
/// the same tick.
#[derive(Debug)]
pub struct RevealTimer {
    delay: Duration,
    token: CancellationToken,
}

impl RevealTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            token: CancellationToken::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn canceller(&self) -> TimerCanceller {
        TimerCanceller(self.token.clone())
    }

    /// Wait for expiry or cancellation.
    pub async fn wait(self) -> TimerOutcome {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => TimerOutcome::Cancelled,
            _ = tokio::time::sleep(self.delay) => {
                if self.token.is_cancelled() {
                    TimerOutcome::Cancelled
                } else {
                    TimerOutcome::Expired
                }
            }
        }
    }
}

/// Handle used to cancel a pending [`RevealTimer`].
#[derive(Clone, Debug)]
pub struct TimerCanceller(CancellationToken);

impl TimerCanceller {
    pub fn cancel(&self) {
        self.0.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn expires_after_delay() {
        let timer = RevealTimer::new(Duration::from_millis(1000));
        assert_eq!(timer.delay(), Duration::from_millis(1000));
        assert_eq!(timer.wait().await, TimerOutcome::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_before_wait() {
        let timer = RevealTimer::new(Duration::from_millis(1000));
        let canceller = timer.canceller();
        canceller.cancel();
        assert!(canceller.is_cancelled());
        assert_eq!(timer.wait().await, TimerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_mid_flight() {
        let timer = RevealTimer::new(Duration::from_millis(1000));
        let canceller = timer.canceller();
        let handle = tokio::spawn(timer.wait());

        tokio::time::sleep(Duration::from_millis(400)).await;
        canceller.cancel();

        assert_eq!(handle.await.unwrap(), TimerOutcome::Cancelled);
    }
}
