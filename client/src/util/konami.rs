//! Konami code detection.

#[cfg(test)]
#[path = "konami_test.rs"]
mod konami_test;

use std::collections::VecDeque;

/// `KeyboardEvent.key` values of the sequence.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// How long the unlock banner stays on screen.
pub const BANNER_MS: u32 = 4_000;

/// Rolling buffer of the most recent keys.
#[derive(Clone, Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    /// Record a key. Returns `true` when the last ten keys spell the code;
    /// the buffer is cleared so the code must be entered again to refire.
    pub fn push(&mut self, key: &str) -> bool {
        let key = if key.chars().count() == 1 {
            key.to_lowercase()
        } else {
            key.to_owned()
        };
        self.recent.push_back(key);
        while self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE).all(|(got, want)| got == want);
        if matched {
            self.recent.clear();
        }
        matched
    }

    #[must_use]
    pub fn buffered(&self) -> usize {
        self.recent.len()
    }
}
