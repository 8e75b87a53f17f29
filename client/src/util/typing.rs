//! Character-by-character text reveal for the hero tagline.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay between revealed characters in the hero.
pub const TYPING_TICK_MS: u32 = 40;

/// Reveals `text` one `char` at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    /// Byte offset of the end of the revealed prefix.
    end: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &'static str) -> Self {
        Self { text, end: 0 }
    }

    /// Reveal the next character. Returns `false` once nothing is left to
    /// reveal, so the driving interval can stop.
    pub fn tick(&mut self) -> bool {
        match self.text[self.end..].chars().next() {
            Some(ch) => {
                self.end += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn displayed(&self) -> &'static str {
        &self.text[..self.end]
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.end == self.text.len()
    }
}
