//! Recurring notification poll on a background thread.
//!
//! The poll runs once immediately, then every `interval` (plus jitter). After
//! a failure the delay doubles per consecutive failure up to `max_backoff`,
//! and drops back to the base interval on the next success. Stopping wakes
//! the thread at once and joins it.

use super::feed::{Notification, NotificationFeed};
use rand::Rng;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Poll timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollerConfig {
    /// Base delay between polls
    pub interval: Duration,
    /// Random spread as a fraction of the delay, 0.0 to 1.0
    pub jitter: f64,
    /// Upper bound of the delay after repeated failures
    pub max_backoff: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            jitter: 0.1,
            max_backoff: Duration::from_secs(300),
        }
    }
}

/// Result of one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    Updated(Vec<Notification>),
    Failed(String),
}

/// Delay bookkeeping between polls.
#[derive(Debug, Clone)]
pub struct PollSchedule {
    config: PollerConfig,
    failures: u32,
}

impl PollSchedule {
    pub const fn new(config: PollerConfig) -> Self {
        Self {
            config,
            failures: 0,
        }
    }

    pub const fn failures(&self) -> u32 {
        self.failures
    }

    /// Delay before the next poll, without jitter.
    pub fn base_delay(&self) -> Duration {
        let factor = 2u32.saturating_pow(self.failures.min(16));
        let delay = self.config.interval.saturating_mul(factor);
        if self.failures == 0 {
            delay
        } else {
            delay.min(self.config.max_backoff.max(self.config.interval))
        }
    }

    pub fn on_success(&mut self) -> Duration {
        self.failures = 0;
        self.base_delay()
    }

    pub fn on_failure(&mut self) -> Duration {
        self.failures = self.failures.saturating_add(1);
        self.base_delay()
    }

    /// Spread `delay` by up to `jitter` in either direction.
    pub fn jittered(&self, delay: Duration) -> Duration {
        apply_jitter(delay, self.config.jitter, &mut rand::rng())
    }
}

/// Scale `delay` by a factor drawn from `[1 - ratio, 1 + ratio]`.
pub fn apply_jitter<R: Rng + ?Sized>(delay: Duration, ratio: f64, rng: &mut R) -> Duration {
    let ratio = ratio.clamp(0.0, 1.0);
    if ratio == 0.0 {
        return delay;
    }
    delay.mul_f64(1.0 + rng.random_range(-ratio..=ratio))
}

/// Handle to a running poll thread.
pub struct Poller {
    stop_tx: Option<Sender<()>>,
    events: Receiver<PollEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start polling `feed` on its own thread.
    pub fn spawn<F>(feed: F, config: PollerConfig) -> Self
    where
        F: NotificationFeed + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let (event_tx, events) = mpsc::channel();
        let handle = thread::spawn(move || run_poll_loop(&feed, config, &stop_rx, &event_tx));
        Self {
            stop_tx: Some(stop_tx),
            events,
            handle: Some(handle),
        }
    }

    /// Next pending event, if any.
    pub fn try_recv(&self) -> Option<PollEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<PollEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(&mut self) {
        // Dropping the sender wakes the thread's wait with `Disconnected`.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("Notification poll thread panicked");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_poll_loop(
    feed: &dyn NotificationFeed,
    config: PollerConfig,
    stop_rx: &Receiver<()>,
    event_tx: &Sender<PollEvent>,
) {
    let mut schedule = PollSchedule::new(config);
    loop {
        let (event, delay) = match feed.fetch() {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Polled notifications");
                (PollEvent::Updated(items), schedule.on_success())
            }
            Err(e) => {
                let delay = schedule.on_failure();
                tracing::warn!(
                    failures = schedule.failures(),
                    retry_in = ?delay,
                    "Notification poll failed: {e}"
                );
                (PollEvent::Failed(e.to_string()), delay)
            }
        };
        if event_tx.send(event).is_err() {
            return;
        }

        match stop_rx.recv_timeout(schedule.jittered(delay)) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(interval_ms: u64, max_ms: u64) -> PollerConfig {
        PollerConfig {
            interval: Duration::from_millis(interval_ms),
            jitter: 0.0,
            max_backoff: Duration::from_millis(max_ms),
        }
    }

    #[test]
    fn test_backoff_grows_and_caps() {
        let mut schedule = PollSchedule::new(config(100, 500));
        assert_eq!(schedule.base_delay(), Duration::from_millis(100));
        assert_eq!(schedule.on_failure(), Duration::from_millis(200));
        assert_eq!(schedule.on_failure(), Duration::from_millis(400));
        assert_eq!(schedule.on_failure(), Duration::from_millis(500));
        assert_eq!(schedule.on_failure(), Duration::from_millis(500));
    }

    #[test]
    fn test_backoff_resets_on_success() {
        let mut schedule = PollSchedule::new(config(100, 1000));
        schedule.on_failure();
        schedule.on_failure();
        assert_eq!(schedule.on_success(), Duration::from_millis(100));
        assert_eq!(schedule.failures(), 0);
    }

    #[test]
    fn test_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let delay = Duration::from_secs(10);
        assert_eq!(apply_jitter(delay, 0.0, &mut rng), delay);
        for _ in 0..200 {
            let jittered = apply_jitter(delay, 0.1, &mut rng);
            assert!(jittered >= Duration::from_secs(9) && jittered <= Duration::from_secs(11));
        }
        let wide = apply_jitter(delay, 5.0, &mut rng);
        assert!(wide <= Duration::from_secs(20));
    }

    #[test]
    fn test_jitter_spreads_delays() {
        let mut rng = StdRng::seed_from_u64(42);
        let delay = Duration::from_secs(30);
        let delays: std::collections::HashSet<Duration> = (0..20)
            .map(|_| apply_jitter(delay, 0.5, &mut rng))
            .collect();
        assert!(delays.len() > 1);
    }

    #[test]
    fn test_schedule_jitter_stays_in_range() {
        let schedule = PollSchedule::new(PollerConfig {
            interval: Duration::from_secs(10),
            jitter: 0.2,
            max_backoff: Duration::from_secs(60),
        });
        for _ in 0..50 {
            let delay = schedule.jittered(Duration::from_secs(10));
            assert!(delay >= Duration::from_secs(8) && delay <= Duration::from_secs(12));
        }
    }
}
