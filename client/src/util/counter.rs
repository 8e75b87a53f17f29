//! Count-up animation for hero statistics.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Interval between counter increments.
pub const COUNT_TICK_MS: u32 = 35;

const COUNT_STEPS: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    current: u32,
    step: u32,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self {
            target,
            current: 0,
            step: target.div_ceil(COUNT_STEPS).max(1),
        }
    }

    /// Advance one increment. Returns `false` once the target is reached.
    pub fn tick(&mut self) -> bool {
        if self.current >= self.target {
            return false;
        }
        self.current = self.current.saturating_add(self.step).min(self.target);
        true
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }
}
