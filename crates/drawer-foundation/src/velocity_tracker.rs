//! Pointer velocity for fling release.
//!
//! Uses the impulse strategy: the velocity is derived from the kinetic
//! energy the recent samples imparted, which is less sensitive to a single
//! jittery sample than a linear fit.

use drawer_ui_graphics::Point;
use smallvec::SmallVec;

const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute.
const HORIZON_MS: u64 = 100;

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    position: Point,
}

type Window = SmallVec<[Sample; HISTORY_SIZE]>;

/// Recent positions of one pointer, oldest first.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: Window,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: u64, position: Point) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.remove(0);
        }
        self.samples.push(Sample { time_ms, position });
    }

    /// Velocity in px/s on each axis, capped to `max`.
    ///
    /// Zero with fewer than two samples inside the horizon, or when the
    /// pointer rested longer than [`ASSUME_STOPPED_MS`] before its last
    /// sample.
    pub fn velocity(&self, max: f32) -> (f32, f32) {
        if !max.is_finite() || max <= 0.0 {
            return (0.0, 0.0);
        }
        let window = self.recent_window();
        if window.len() < 2 {
            return (0.0, 0.0);
        }
        let per_second = |per_ms: f32| {
            if per_ms.is_nan() {
                0.0
            } else {
                (per_ms * 1000.0).clamp(-max, max)
            }
        };
        (
            per_second(impulse_velocity(&window, |p| p.x)),
            per_second(impulse_velocity(&window, |p| p.y)),
        )
    }

    /// Samples newest first, cut at the horizon or at the first resting gap.
    fn recent_window(&self) -> Window {
        let mut window = Window::new();
        let Some(&newest) = self.samples.last() else {
            return window;
        };
        let mut previous = newest;
        for &sample in self.samples.iter().rev() {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || previous.time_ms.abs_diff(sample.time_ms) > ASSUME_STOPPED_MS {
                break;
            }
            window.push(sample);
            previous = sample;
        }
        window
    }
}

/// Velocity in px/ms along `axis` from samples ordered newest first.
fn impulse_velocity(window: &[Sample], axis: impl Fn(Point) -> f32) -> f32 {
    let newest = window[0].time_ms;
    let age = |sample: &Sample| newest.saturating_sub(sample.time_ms) as f32;
    let oldest = window.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let (older, newer) = (&window[i], &window[i - 1]);
        let dt = age(older) - age(newer);
        if dt == 0.0 {
            continue;
        }

        let v = (axis(newer.position) - axis(older.position)) / dt;
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v - v_prev) * v.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
