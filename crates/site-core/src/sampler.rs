//! Throttled, frame-coalesced sampling of pointer and scroll signals.
//!
//! Raw pointer-move events can arrive at hundreds per second. Each stream runs
//! them through a [`RateLimiter`] and then coalesces whatever survives into a
//! single publish per display frame, so the decorative layers re-evaluate at
//! most once per accepted sample and never more than once per frame.
//!
//! Nothing here touches a display surface. Frame alignment is delegated to a
//! [`FrameScheduler`]; the browser front-end backs it with
//! `requestAnimationFrame`, tests use [`ManualScheduler`].

use crate::config::SiteConfig;
use crate::state::ViewportSignals;
use glam::Vec2;
use std::time::Duration;

/// Drops samples that arrive sooner than `min_interval` after the last
/// accepted one. Timestamps are offsets from any fixed origin.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_accepted: Option<Duration>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn last_accepted(&self) -> Option<Duration> {
        self.last_accepted
    }

    /// Returns `Some(value)` if the sample should be published, `None` if it
    /// is dropped.
    pub fn accept<T>(&mut self, at: Duration, value: T) -> Option<T> {
        self.admit(at).then_some(value)
    }

    /// Records `at` as the last accepted timestamp when the interval has
    /// elapsed. The first sample is always admitted.
    pub fn admit(&mut self, at: Duration) -> bool {
        let ok = match self.last_accepted {
            None => true,
            Some(last) => at.saturating_sub(last) >= self.min_interval,
        };
        if ok {
            self.last_accepted = Some(at);
        }
        ok
    }
}

/// Single-slot "run once at the next display refresh" primitive.
pub trait FrameScheduler {
    type Token;

    /// Requests one callback at the next frame. `None` when no frame source
    /// is available.
    fn request_frame(&mut self) -> Option<Self::Token>;

    fn cancel_frame(&mut self, token: Self::Token);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamPhase {
    Idle,
    /// A sample is held but no frame could be requested yet.
    SamplePending,
    PublishScheduled,
    TornDown,
}

/// One throttled signal (pointer or scroll) and its pending publish.
pub struct SignalStream<T, S: FrameScheduler> {
    name: &'static str,
    limiter: RateLimiter,
    scheduler: S,
    pending: Option<T>,
    token: Option<S::Token>,
    current: T,
    phase: StreamPhase,
    published: u64,
}

impl<T: Clone, S: FrameScheduler> SignalStream<T, S> {
    pub fn new(name: &'static str, initial: T, min_interval: Duration, scheduler: S) -> Self {
        Self {
            name,
            limiter: RateLimiter::new(min_interval),
            scheduler,
            pending: None,
            token: None,
            current: initial,
            phase: StreamPhase::Idle,
            published: 0,
        }
    }

    /// Feeds one raw event.
    ///
    /// An admitted sample replaces any scheduled publish with a fresh one. A
    /// throttled sample is dropped, except that it overwrites the value of a
    /// publish that has not run yet, so the frame carries the latest sample.
    pub fn on_event(&mut self, at: Duration, value: T) -> StreamPhase {
        if self.phase == StreamPhase::TornDown {
            return self.phase;
        }
        if self.limiter.admit(at) {
            self.pending = Some(value);
            self.phase = StreamPhase::SamplePending;
            if let Some(old) = self.token.take() {
                self.scheduler.cancel_frame(old);
            }
            if let Some(token) = self.scheduler.request_frame() {
                self.token = Some(token);
                self.phase = StreamPhase::PublishScheduled;
            }
            log::trace!("[{}] accepted sample at {:?}", self.name, at);
        } else if self.pending.is_some() {
            self.pending = Some(value);
        }
        self.phase
    }

    /// Runs the scheduled publish. Returns the value to hand downstream, or
    /// `None` if nothing was pending or the stream is torn down.
    pub fn on_frame(&mut self) -> Option<T> {
        if self.phase == StreamPhase::TornDown {
            return None;
        }
        self.token = None;
        let value = self.pending.take()?;
        self.current = value.clone();
        self.phase = StreamPhase::Idle;
        self.published += 1;
        Some(value)
    }

    /// Cancels any pending publish and stops accepting events. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(token) = self.token.take() {
            self.scheduler.cancel_frame(token);
        }
        self.pending = None;
        if self.phase != StreamPhase::TornDown {
            log::debug!(
                "[{}] torn down after {} publishes",
                self.name,
                self.published
            );
        }
        self.phase = StreamPhase::TornDown;
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    pub fn published_count(&self) -> u64 {
        self.published
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Pointer and scroll streams for one displayed page. The two streams share
/// nothing but their owner.
pub struct ViewportSampler<S: FrameScheduler> {
    pub pointer: SignalStream<Vec2, S>,
    pub scroll: SignalStream<f32, S>,
}

impl<S: FrameScheduler> ViewportSampler<S> {
    pub fn new(config: &SiteConfig, pointer_frames: S, scroll_frames: S) -> Self {
        Self {
            pointer: SignalStream::new(
                "pointer",
                Vec2::ZERO,
                config.pointer_interval,
                pointer_frames,
            ),
            scroll: SignalStream::new("scroll", 0.0, config.scroll_interval, scroll_frames),
        }
    }

    pub fn signals(&self) -> ViewportSignals {
        ViewportSignals {
            pointer: *self.pointer.current(),
            scroll: *self.scroll.current(),
        }
    }

    /// Publishes the pointer stream's pending sample, returning the new
    /// signal pair if anything changed hands.
    pub fn publish_pointer(&mut self) -> Option<ViewportSignals> {
        self.pointer.on_frame().map(|_| self.signals())
    }

    pub fn publish_scroll(&mut self) -> Option<ViewportSignals> {
        self.scroll.on_frame().map(|_| self.signals())
    }

    pub fn teardown(&mut self) {
        self.pointer.teardown();
        self.scroll.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.pointer.phase() == StreamPhase::TornDown && self.scroll.phase() == StreamPhase::TornDown
    }
}

/// Frame source driven by hand. Holds at most one outstanding request, like
/// `requestAnimationFrame` used as a single-slot task.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_token: u32,
    outstanding: Option<u32>,
    requested: u32,
    cancelled: u32,
    unavailable: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler that never grants a frame.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Consumes the outstanding request, if any. The caller then runs the
    /// stream's `on_frame`.
    pub fn fire(&mut self) -> bool {
        self.outstanding.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }

    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Token = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.unavailable {
            return None;
        }
        self.next_token = self.next_token.wrapping_add(1);
        self.outstanding = Some(self.next_token);
        self.requested += 1;
        Some(self.next_token)
    }

    fn cancel_frame(&mut self, token: u32) {
        if self.outstanding == Some(token) {
            self.outstanding = None;
            self.cancelled += 1;
        }
    }
}
