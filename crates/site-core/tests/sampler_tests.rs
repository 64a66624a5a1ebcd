// Host-side tests for the throttled viewport sampler.
// Frames are driven by hand through ManualScheduler.

use glam::Vec2;
use site_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn sampler() -> ViewportSampler<ManualScheduler> {
    ViewportSampler::new(
        &SiteConfig::default(),
        ManualScheduler::new(),
        ManualScheduler::new(),
    )
}

/// Replays a 60 Hz display over `events`, firing frames every ~16.67 ms.
/// Returns how many pointer publishes happened.
fn run_pointer_with_frames(s: &mut ViewportSampler<ManualScheduler>, events: &[(u64, Vec2)]) -> u32 {
    let frame_us = 16_667u64;
    let mut next_frame_us = frame_us;
    let mut publishes = 0;
    for (t_ms, pos) in events {
        let t_us = t_ms * 1_000;
        while next_frame_us <= t_us {
            if s.pointer.scheduler_mut().fire() && s.publish_pointer().is_some() {
                publishes += 1;
            }
            next_frame_us += frame_us;
        }
        s.pointer.on_event(ms(*t_ms), *pos);
    }
    if s.pointer.scheduler_mut().fire() && s.publish_pointer().is_some() {
        publishes += 1;
    }
    publishes
}

#[test]
fn no_events_keeps_initial_signals() {
    let s = sampler();
    assert_eq!(s.signals(), ViewportSignals::default());
    assert_eq!(s.signals().pointer, Vec2::ZERO);
    assert_eq!(s.signals().scroll, 0.0);
    assert_eq!(s.pointer.phase(), StreamPhase::Idle);
    assert_eq!(s.scroll.phase(), StreamPhase::Idle);
}

#[test]
fn burst_within_ten_ms_publishes_once_with_last_coordinates() {
    let mut s = sampler();
    for i in 0..10u64 {
        let p = Vec2::new(100.0 + i as f32, 50.0 + 2.0 * i as f32);
        s.pointer.on_event(ms(1_000 + i), p);
    }
    assert_eq!(s.pointer.scheduler().requested(), 1);
    assert!(s.pointer.scheduler_mut().fire());
    let published = s.publish_pointer().expect("one publish");
    assert_eq!(published.pointer, Vec2::new(109.0, 68.0));
    assert!(!s.pointer.scheduler_mut().fire());
    assert_eq!(s.publish_pointer(), None);
    assert_eq!(s.pointer.published_count(), 1);
}

#[test]
fn pointer_publish_rate_is_capped() {
    let mut s = sampler();
    // One event per millisecond for two seconds.
    let events: Vec<(u64, Vec2)> = (0..2_000u64)
        .map(|t| (t, Vec2::new(t as f32, (t % 300) as f32)))
        .collect();
    let publishes = run_pointer_with_frames(&mut s, &events);
    assert!(publishes <= 40, "published {publishes} times in 2s");
    assert!(publishes >= 30, "throttle too aggressive: {publishes}");
}

#[test]
fn scroll_is_capped_independently_of_pointer() {
    let mut s = sampler();
    let mut scroll_publishes = 0;
    for t in 0..1_000u64 {
        s.pointer.on_event(ms(t), Vec2::splat(t as f32));
        s.scroll.on_event(ms(t), t as f32);
        if t % 16 == 15 {
            if s.scroll.scheduler_mut().fire() && s.publish_scroll().is_some() {
                scroll_publishes += 1;
            }
            if s.pointer.scheduler_mut().fire() {
                s.publish_pointer();
            }
        }
    }
    assert!(scroll_publishes <= 20, "scroll published {scroll_publishes} times");
    assert!(s.pointer.published_count() <= 20);
    assert!(scroll_publishes > 0);
}

#[test]
fn streams_do_not_share_throttle_state() {
    let mut s = sampler();
    s.pointer.on_event(ms(0), Vec2::ONE);
    assert_eq!(s.scroll.on_event(ms(1), 10.0), StreamPhase::PublishScheduled);
    assert!(s.scroll.scheduler_mut().fire());
    let after_scroll = s.publish_scroll().expect("scroll publish");
    assert_eq!(after_scroll.scroll, 10.0);
    assert_eq!(after_scroll.pointer, Vec2::ZERO);
}

#[test]
fn teardown_stops_publishing() {
    let mut s = sampler();
    s.pointer.on_event(ms(0), Vec2::new(1.0, 2.0));
    s.scroll.on_event(ms(0), 40.0);
    s.teardown();
    assert!(s.is_torn_down());
    assert!(!s.pointer.scheduler().is_pending());
    assert!(!s.scroll.scheduler().is_pending());

    for t in 1..500u64 {
        s.pointer.on_event(ms(t * 10), Vec2::splat(t as f32));
        s.scroll.on_event(ms(t * 10), t as f32);
    }
    assert_eq!(s.publish_pointer(), None);
    assert_eq!(s.publish_scroll(), None);
    assert_eq!(s.signals(), ViewportSignals::default());
}

#[test]
fn events_after_the_interval_are_accepted_again() {
    let mut s = sampler();
    s.scroll.on_event(ms(0), 1.0);
    s.scroll.scheduler_mut().fire();
    s.publish_scroll();
    assert_eq!(s.scroll.on_event(ms(20), 2.0), StreamPhase::Idle);
    assert_eq!(s.scroll.on_event(ms(50), 3.0), StreamPhase::PublishScheduled);
    s.scroll.scheduler_mut().fire();
    assert_eq!(s.publish_scroll().map(|v| v.scroll), Some(3.0));
}

#[test]
fn limiter_accept_hands_back_value() {
    let mut l = RateLimiter::new(SAMPLE_INTERVAL);
    assert_eq!(l.accept(ms(0), "a"), Some("a"));
    assert_eq!(l.accept(ms(10), "b"), None);
    assert_eq!(l.accept(ms(60), "c"), Some("c"));
    assert_eq!(l.min_interval(), SAMPLE_INTERVAL);
}
