//! Time-based interpolation of a 2D integer position.

use crate::{AnimationSpec, Lerp};

/// Interpolates a position from a start point toward a final point over an
/// [`AnimationSpec`].
///
/// The scroller does not own a clock: callers pass the current time in
/// milliseconds to [`Scroller::start_scroll`] and
/// [`Scroller::compute_scroll_offset`], which keeps animation deterministic
/// under a manual test clock.
#[derive(Debug, Clone)]
pub struct Scroller {
    start_x: i32,
    start_y: i32,
    final_x: i32,
    final_y: i32,
    curr_x: i32,
    curr_y: i32,
    start_time_millis: u64,
    spec: AnimationSpec,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

impl Scroller {
    pub fn new() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            final_x: 0,
            final_y: 0,
            curr_x: 0,
            curr_y: 0,
            start_time_millis: 0,
            spec: AnimationSpec::default(),
            finished: true,
        }
    }

    /// Starts moving from `(start_x, start_y)` by `(dx, dy)`.
    pub fn start_scroll(
        &mut self,
        start_x: i32,
        start_y: i32,
        dx: i32,
        dy: i32,
        spec: AnimationSpec,
        now_millis: u64,
    ) {
        self.start_x = start_x;
        self.start_y = start_y;
        self.curr_x = start_x;
        self.curr_y = start_y;
        self.final_x = start_x + dx;
        self.final_y = start_y + dy;
        self.start_time_millis = now_millis;
        self.spec = spec;
        self.finished = false;
    }

    /// Advances the current position to `now_millis`.
    ///
    /// Returns `false` if the animation had already finished before this
    /// call; the call that reaches the final position still returns `true`.
    pub fn compute_scroll_offset(&mut self, now_millis: u64) -> bool {
        if self.finished {
            return false;
        }

        let elapsed = now_millis.saturating_sub(self.start_time_millis);
        if elapsed < self.spec.duration_millis {
            let progress = self.spec.progress(elapsed);
            self.curr_x = self.start_x.lerp(&self.final_x, progress);
            self.curr_y = self.start_y.lerp(&self.final_y, progress);
        } else {
            self.curr_x = self.final_x;
            self.curr_y = self.final_y;
            self.finished = true;
        }
        true
    }

    /// Stops the animation, jumping to the final position.
    pub fn abort_animation(&mut self) {
        self.curr_x = self.final_x;
        self.curr_y = self.final_y;
        self.finished = true;
    }

    /// Stops the animation where it is.
    pub fn force_finished(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn curr_x(&self) -> i32 {
        self.curr_x
    }

    pub fn curr_y(&self) -> i32 {
        self.curr_y
    }

    pub fn final_x(&self) -> i32 {
        self.final_x
    }

    pub fn final_y(&self) -> i32 {
        self.final_y
    }

    pub fn duration_millis(&self) -> u64 {
        self.spec.duration_millis
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
