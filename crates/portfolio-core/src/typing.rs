//! Typewriter reveal of the hero subtitle.

/// Yields a fixed text one character per tick.
///
/// The caller appends each character to whatever the target element already
/// shows, so existing text stays as a prefix.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    position: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            position: 0,
        }
    }

    /// Next character to append, `None` once the text is exhausted.
    pub fn tick(&mut self) -> Option<char> {
        let next = self.chars.get(self.position).copied()?;
        self.position += 1;
        Some(next)
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Characters revealed so far.
    pub fn typed(&self) -> String {
        self.chars[..self.position].iter().collect()
    }

    pub fn remaining(&self) -> usize {
        self.chars.len() - self.position
    }
}
