//! Minimal tween engine for shader-uniform animation.
//!
//! Transitions are plain time-bounded jobs stepped from the frame loop;
//! there are no timers to leak, and cancelling is dropping the job.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    ExpoOut,
    ExpoInOut,
}

impl Ease {
    /// Evaluate the curve at normalized time `t`. Clamped so the output hits
    /// 0 at `t <= 0` and exactly 1 at `t >= 1` with no overshoot.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Ease::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

/// One scalar animation job. The start value is captured from the live
/// target when the delay expires, so a restarted transition continues from
/// wherever the value currently is.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    to: f32,
    duration: f32,
    delay: f32,
    ease: Ease,
    elapsed: f32,
    from: Option<f32>,
}

impl Tween {
    pub fn new(to: f32, duration: f32, delay: f32, ease: Ease) -> Self {
        Self {
            to,
            duration,
            delay,
            ease,
            elapsed: 0.0,
            from: None,
        }
    }

    /// Advance by `dt` seconds and return the new value for the animated
    /// slot. Before the delay expires this is `current`, unchanged; at
    /// completion it is exactly `to`.
    pub fn step(&mut self, dt: f32, current: f32) -> f32 {
        self.elapsed += dt;
        if self.elapsed < self.delay {
            return current;
        }
        let from = *self.from.get_or_insert(current);
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed - self.delay) / self.duration
        };
        if t >= 1.0 {
            return self.to;
        }
        from + (self.to - from) * self.ease.apply(t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed - self.delay >= self.duration
    }
}

/// A retargetable eased 2-D value, used to smooth the mouse-parallax offset.
/// Retargeting restarts the curve from the current interpolated value.
#[derive(Clone, Copy, Debug)]
pub struct Eased2 {
    from: Vec2,
    to: Vec2,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

impl Eased2 {
    pub fn new(initial: Vec2, duration: f32, ease: Ease) -> Self {
        Self {
            from: initial,
            to: initial,
            duration,
            ease,
            elapsed: duration,
        }
    }

    pub fn retarget(&mut self, target: Vec2) {
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn step(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn value(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, self.ease.apply(t))
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }
}
