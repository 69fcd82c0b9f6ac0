//! Countdown timer for one round
//!
//! Each run is a spawned task that emits `Tick` once per second from the round length
//! down to 0, then `Expired`. Cancellation is cooperative: the task watches a stop
//! signal between ticks, so a tick already sent stays sent, but nothing is sent after
//! the signal is seen.

use super::events::{Epoch, EventSender, GameEvent};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, warn};

/// Lifecycle of the round timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
}

struct Countdown {
    stop: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Restartable countdown that reports through the controller's event channel
pub struct RoundTimer {
    seconds: u32,
    tick: Duration,
    events: EventSender,
    state: TimerState,
    countdown: Option<Countdown>,
}

impl RoundTimer {
    #[must_use]
    pub fn new(seconds: u32, events: EventSender) -> Self {
        Self {
            seconds,
            tick: Duration::from_secs(1),
            events,
            state: TimerState::Idle,
            countdown: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Start a fresh countdown tagged with `epoch`
    ///
    /// Any previous countdown is stopped and awaited first, so two runs never tick
    /// at the same time.
    pub async fn start(&mut self, epoch: Epoch) {
        self.halt_previous().await;

        let (stop, stop_rx) = watch::channel(false);
        let handle = tokio::spawn(countdown(
            epoch,
            self.seconds,
            self.tick,
            self.events.clone(),
            stop_rx,
        ));

        self.countdown = Some(Countdown { stop, handle });
        self.state = TimerState::Running;
        debug!(epoch, seconds = self.seconds, "Round timer started");
    }

    /// Ask the running countdown to stop at its next opportunity
    pub fn cancel(&mut self) {
        if let Some(countdown) = &self.countdown {
            countdown.stop.send_replace(true);
        }
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
    }

    /// Record that the controller consumed this run's `Expired` event
    pub fn mark_expired(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
    }

    /// Cancel and wait for the countdown task to finish
    pub async fn shutdown(&mut self) {
        self.cancel();
        self.halt_previous().await;
    }

    async fn halt_previous(&mut self) {
        let Some(previous) = self.countdown.take() else {
            return;
        };

        previous.stop.send_replace(true);
        if let Err(e) = previous.handle.await {
            warn!("Round timer task ended abnormally: {e}");
        }
    }
}

async fn countdown(
    epoch: Epoch,
    seconds: u32,
    tick: Duration,
    events: EventSender,
    mut stop: watch::Receiver<bool>,
) {
    let mut ticker = time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for remaining in (0..=seconds).rev() {
        tokio::select! {
            biased;
            _ = stop.changed() => {
                debug!(epoch, remaining, "Round timer cancelled");
                return;
            }
            _ = ticker.tick() => {}
        }

        if *stop.borrow() {
            return;
        }
        if events.send(GameEvent::Tick { epoch, remaining }).is_err() {
            return;
        }
    }

    debug!(epoch, "Round timer expired");
    let _ = events.send(GameEvent::Expired { epoch });
}
