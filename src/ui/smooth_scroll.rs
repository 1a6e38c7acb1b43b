//! Row-level smooth scroll with exponential ease-out.
//!
//! When the scroll target moves, the displacement between old and new target
//! is injected as a row offset that decays toward zero each tick, so cards
//! slide a few terminal rows per frame instead of jumping.

/// Row-offset smooth scroll animator.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Current row displacement.  Positive = content shifted down from
    /// its target (scroll-down); negative = shifted up (scroll-up).
    row_offset: f64,
    /// Previous scroll target in rows (to detect changes).
    prev_target: usize,
    /// Damping: `offset *= (1 - speed)` each tick.
    /// Higher speed = faster settle.  Good range: 0.25–0.45 at 10 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            row_offset: 0.0,
            prev_target: 0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed the current scroll target (in rows).  A change injects the
    /// corresponding displacement.
    pub fn set_target(&mut self, target_rows: usize) {
        if target_rows != self.prev_target {
            self.row_offset += target_rows as f64 - self.prev_target as f64;
            self.prev_target = target_rows;
        }
    }

    /// Decay the offset toward zero.  Call once per tick.
    pub fn tick(&mut self) {
        self.row_offset *= 1.0 - self.speed;
        if self.row_offset.abs() < 0.4 {
            self.row_offset = 0.0;
        }
    }

    /// Current row displacement (integer rows).
    pub fn row_offset(&self) -> i16 {
        self.row_offset.round() as i16
    }

    /// True while the animation still has visible motion.
    pub fn is_animating(&self) -> bool {
        self.row_offset != 0.0
    }
}
