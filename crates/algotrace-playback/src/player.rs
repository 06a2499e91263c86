//! Timer-driven playback on the tokio runtime.
//!
//! [`AutoPlayer`] owns a [`PlaybackController`] behind an async mutex and
//! keeps at most one tick task alive. After every operation the task is
//! reconciled with the controller's armed token: a task whose token is no
//! longer armed is aborted, and a newly armed token gets a task that sleeps
//! [`PlaybackController::tick_delay`] before delivering it. Tasks hold only
//! a weak reference to the player, so dropping the player stops them.

use std::sync::{Arc, Weak};

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use algotrace_core::Timeline;

use crate::config::PlaybackConfig;
use crate::controller::{PlaybackController, PlaybackState, TickOutcome, TickToken};
use crate::speed::Speed;

struct Shared {
    controller: PlaybackController,
    timer: Option<(TickToken, JoinHandle<()>)>,
    disposed: bool,
}

impl Shared {
    fn cancel_timer(&mut self) {
        if let Some((token, handle)) = self.timer.take() {
            tracing::debug!(generation = token.generation(), "aborting tick task");
            handle.abort();
        }
    }
}

struct Inner {
    shared: Mutex<Shared>,
    updates: watch::Sender<PlaybackState>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.shared.get_mut().cancel_timer();
    }
}

impl Inner {
    /// Brings the tick task in line with the controller and publishes state.
    fn reconcile(self: &Arc<Self>, shared: &mut Shared) {
        let armed = shared.controller.armed();
        if shared.timer.as_ref().map(|(t, _)| *t) != armed {
            shared.cancel_timer();
            if let Some(token) = armed {
                let delay = shared.controller.tick_delay();
                let weak = Arc::downgrade(self);
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    fire(weak, token).await;
                });
                shared.timer = Some((token, handle));
            }
        }
        self.updates.send_replace(shared.controller.state());
    }
}

async fn fire(weak: Weak<Inner>, token: TickToken) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut shared = inner.shared.lock().await;

    // This task is finishing; forget its handle instead of aborting it.
    if shared.timer.as_ref().is_some_and(|(t, _)| *t == token) {
        shared.timer = None;
    }

    match shared.controller.on_tick(token) {
        TickOutcome::Advanced { index, .. } => tracing::debug!(index, "tick advanced"),
        TickOutcome::Finished { index } => tracing::debug!(index, "tick reached the end"),
        TickOutcome::Stale => return,
    }
    inner.reconcile(&mut shared);
}

/// Auto-advancing playback for one trace at a time.
pub struct AutoPlayer {
    inner: Arc<Inner>,
}

impl AutoPlayer {
    pub fn new(timeline: &impl Timeline, config: PlaybackConfig) -> Self {
        let controller = PlaybackController::with_config(timeline, config);
        let (updates, _) = watch::channel(controller.state());
        AutoPlayer {
            inner: Arc::new(Inner {
                shared: Mutex::new(Shared {
                    controller,
                    timer: None,
                    disposed: false,
                }),
                updates,
            }),
        }
    }

    /// Receives every state change, including timer-driven advances.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.inner.updates.subscribe()
    }

    pub async fn state(&self) -> PlaybackState {
        self.inner.shared.lock().await.controller.state()
    }

    pub async fn step_forward(&self) -> usize {
        self.apply(PlaybackController::step_forward).await
    }

    pub async fn step_backward(&self) -> usize {
        self.apply(PlaybackController::step_backward).await
    }

    pub async fn seek(&self, index: usize) -> usize {
        self.apply(|c| c.seek(index)).await
    }

    pub async fn reset(&self) {
        self.apply(PlaybackController::reset).await
    }

    /// Starts or pauses. Returns whether playback is now running.
    pub async fn toggle_play(&self) -> bool {
        self.apply(|c| c.toggle_play().is_some()).await
    }

    pub async fn set_speed(&self, speed: Speed) {
        self.apply(|c| c.set_speed(speed)).await
    }

    /// Swaps in a new trace, cancelling any scheduled tick.
    pub async fn load(&self, timeline: &impl Timeline) {
        let len = timeline.len();
        self.apply(|c| c.load(&TimelineLen(len))).await
    }

    /// Stops playback for good. Later operations are ignored.
    pub async fn dispose(&self) {
        let mut shared = self.inner.shared.lock().await;
        shared.controller.reset();
        shared.cancel_timer();
        shared.disposed = true;
        self.inner.updates.send_replace(shared.controller.state());
    }

    async fn apply<T: Default>(&self, op: impl FnOnce(&mut PlaybackController) -> T) -> T {
        let mut shared = self.inner.shared.lock().await;
        if shared.disposed {
            tracing::debug!("operation on disposed player ignored");
            return T::default();
        }
        let out = op(&mut shared.controller);
        self.inner.reconcile(&mut shared);
        out
    }
}

struct TimelineLen(usize);

impl Timeline for TimelineLen {
    fn len(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use algotrace_gen::{generate, sample::default_input, Algorithm, InputLimits};

    fn trace(algorithm: Algorithm) -> algotrace_gen::DynTrace {
        generate(&default_input(algorithm), &InputLimits::default()).unwrap()
    }

    fn player(len: usize) -> AutoPlayer {
        AutoPlayer::new(
            &TimelineLen(len),
            PlaybackConfig::with_base_interval(Duration::from_millis(1000)),
        )
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn advances_once_per_interval() {
        let p = player(4);
        assert!(p.toggle_play().await);
        wait(999).await;
        assert_eq!(p.state().await.current_index, 0);
        wait(2).await;
        assert_eq!(p.state().await.current_index, 1);
        wait(1000).await;
        assert_eq!(p.state().await.current_index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_the_last_step() {
        let p = player(3);
        p.toggle_play().await;
        wait(10_000).await;
        let state = p.state().await;
        assert_eq!(state.current_index, 2);
        assert!(!state.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn speed_change_applies_from_next_tick() {
        let p = player(10);
        p.toggle_play().await;
        wait(100).await;
        p.set_speed(Speed::Double).await;
        // The first tick was scheduled at 1x.
        wait(850).await;
        assert_eq!(p.state().await.current_index, 0);
        wait(100).await;
        assert_eq!(p.state().await.current_index, 1);
        // Later ticks run at 2x.
        wait(510).await;
        assert_eq!(p.state().await.current_index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn load_cancels_the_pending_tick() {
        let p = AutoPlayer::new(&trace(Algorithm::MaxArea), PlaybackConfig::default());
        p.toggle_play().await;
        wait(500).await;
        p.load(&trace(Algorithm::BinarySearch)).await;
        wait(5_000).await;
        let state = p.state().await;
        assert_eq!(state.current_index, 0);
        assert!(!state.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_holds_position() {
        let p = player(10);
        p.toggle_play().await;
        wait(1_500).await;
        assert!(!p.toggle_play().await);
        wait(10_000).await;
        assert_eq!(p.state().await.current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_timer_advances() {
        let p = player(3);
        let mut rx = p.subscribe();
        p.toggle_play().await;
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_playing);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().current_index, 1);
        rx.changed().await.unwrap();
        let last = *rx.borrow_and_update();
        assert_eq!(last.current_index, 2);
        assert!(!last.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_stops_everything() {
        let p = player(5);
        p.toggle_play().await;
        p.dispose().await;
        wait(10_000).await;
        assert_eq!(p.state().await.current_index, 0);
        assert_eq!(p.step_forward().await, 0);
        assert!(!p.toggle_play().await);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_while_playing() {
        let p = player(5);
        p.toggle_play().await;
        assert_eq!(p.step_forward().await, 1);
        assert_eq!(p.step_backward().await, 0);
        assert_eq!(p.step_backward().await, 0);
        assert_eq!(p.seek(4).await, 4);
        assert!(!p.state().await.is_playing);
    }
}
