use std::time::Duration;

use prep_core::model::CallState;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::settings::SessionSettings;

//
// ─── TIMER EVENTS ──────────────────────────────────────────────────────────────
//

/// Message sent by a call's background timers to the session owner.
///
/// `generation` identifies the call that spawned the timer so events from a
/// released timer set can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { generation: u64 },
    AutoStop { generation: u64 },
}

impl TimerEvent {
    #[must_use]
    pub fn generation(self) -> u64 {
        match self {
            Self::Tick { generation } | Self::AutoStop { generation } => generation,
        }
    }
}

/// Receiving end of the timer channel. The session owner drains it and feeds
/// each event back into the session.
#[derive(Debug)]
pub struct TimerEvents {
    rx: mpsc::UnboundedReceiver<TimerEvent>,
}

impl TimerEvents {
    /// Wait for the next event. `None` once the session is gone.
    pub async fn recv(&mut self) -> Option<TimerEvent> {
        self.rx.recv().await
    }

    /// Next already-delivered event, if any.
    pub fn try_recv(&mut self) -> Option<TimerEvent> {
        self.rx.try_recv().ok()
    }
}

pub(crate) fn timer_channel() -> (mpsc::UnboundedSender<TimerEvent>, TimerEvents) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, TimerEvents { rx })
}

//
// ─── TIMER HANDLE ──────────────────────────────────────────────────────────────
//

/// Background timers of one live call. Dropping the handle aborts both tasks.
#[derive(Debug)]
struct CallTimers {
    tick: JoinHandle<()>,
    auto_stop: Option<JoinHandle<()>>,
}

impl CallTimers {
    fn spawn(
        runtime: &Handle,
        generation: u64,
        settings: SessionSettings,
        tx: &mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        let period = settings.tick_interval();
        let tick_tx = tx.clone();
        let tick = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tick_tx.send(TimerEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        });

        let auto_stop = settings.auto_end_after().map(|delay: Duration| {
            let stop_tx = tx.clone();
            runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = stop_tx.send(TimerEvent::AutoStop { generation });
            })
        });

        Self { tick, auto_stop }
    }
}

impl Drop for CallTimers {
    fn drop(&mut self) {
        self.tick.abort();
        if let Some(auto_stop) = &self.auto_stop {
            auto_stop.abort();
        }
    }
}

//
// ─── SIMULATOR ─────────────────────────────────────────────────────────────────
//

/// Outcome of feeding a timer event into the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Ticked(u64),
    Stopped,
    Ignored,
}

/// Fake interview call: a state, an elapsed-seconds counter, and the timers
/// that drive it.
#[derive(Debug)]
pub struct CallSimulator {
    state: CallState,
    elapsed_secs: u64,
    generation: u64,
    settings: SessionSettings,
    timers: Option<CallTimers>,
    tx: mpsc::UnboundedSender<TimerEvent>,
}

impl CallSimulator {
    pub(crate) fn new(settings: SessionSettings, tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: CallState::Idle,
            elapsed_secs: 0,
            generation: 0,
            settings,
            timers: None,
            tx,
        }
    }

    #[must_use]
    pub fn state(&self) -> CallState {
        self.state
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Whether a timer set is currently held.
    #[must_use]
    pub fn has_live_timers(&self) -> bool {
        self.timers.is_some()
    }

    /// Idle -> Active. Resets the counter and spawns the timers.
    ///
    /// Returns `false` (no-op) unless the call is idle, or when no Tokio
    /// runtime is available to drive the timers.
    pub fn start(&mut self) -> bool {
        if !self.state.can_start() {
            warn!(state = ?self.state, "start ignored");
            return false;
        }
        let Ok(runtime) = Handle::try_current() else {
            warn!("start ignored: no tokio runtime to drive the call timers");
            return false;
        };
        let timers = CallTimers::spawn(&runtime, self.generation + 1, self.settings, &self.tx);
        self.generation += 1;
        self.elapsed_secs = 0;
        self.state = CallState::Active;
        self.timers = Some(timers);
        info!(
            generation = self.generation,
            auto_end_after = ?self.settings.auto_end_after(),
            "call started"
        );
        true
    }

    /// Active -> Ended. Releases the timers. Returns `false` (no-op) unless
    /// the call is active.
    pub fn stop(&mut self) -> bool {
        if !self.state.can_stop() {
            warn!(state = ?self.state, "stop ignored");
            return false;
        }
        self.release_timers();
        self.state = CallState::Ended;
        info!(
            generation = self.generation,
            elapsed_secs = self.elapsed_secs,
            "call ended"
        );
        true
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) -> TimerOutcome {
        if event.generation() != self.generation || !self.state.is_active() {
            warn!(?event, current = self.generation, "stale timer event dropped");
            return TimerOutcome::Ignored;
        }
        match event {
            TimerEvent::Tick { .. } => {
                self.elapsed_secs = self.elapsed_secs.saturating_add(1);
                TimerOutcome::Ticked(self.elapsed_secs)
            }
            TimerEvent::AutoStop { .. } => {
                info!(generation = self.generation, "auto end delay reached");
                if self.stop() {
                    TimerOutcome::Stopped
                } else {
                    TimerOutcome::Ignored
                }
            }
        }
    }

    /// Drop any live timers without changing the call state.
    pub fn release_timers(&mut self) {
        self.timers = None;
    }

    /// Back to a fresh idle call. The generation keeps counting so late
    /// events from the previous call stay stale.
    pub(crate) fn reset(&mut self) {
        self.release_timers();
        self.state = CallState::Idle;
        self.elapsed_secs = 0;
    }
}
