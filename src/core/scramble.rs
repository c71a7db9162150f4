use rand::Rng;

use super::constants::*;

/// Progressive text reveal: each tick uncovers one more character of the real
/// text and trails it with a short run of random noise characters, so the
/// string appears to decrypt in place.
pub struct ScrambleEngine {
    chars: Vec<char>,
    noise_chars: Vec<char>,
    revealed: usize,
    done: bool,
}

impl ScrambleEngine {
    pub fn new(text: &str) -> Self {
        ScrambleEngine {
            chars: text.chars().collect(),
            noise_chars: SCRAMBLE_CHARSET.chars().collect(),
            revealed: 0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Advances one reveal step and returns the string to display. Once the
    /// whole text is revealed this is a terminal no-op returning the plain
    /// text.
    pub fn tick(&mut self, rng: &mut impl Rng) -> String {
        if self.revealed >= self.chars.len() {
            self.done = true;
            return self.full_text();
        }
        self.revealed += 1;
        let noise_len = (self.chars.len() - self.revealed).min(SCRAMBLE_NOISE_MAX);
        let mut out: String = self.chars[..self.revealed].iter().collect();
        for _ in 0..noise_len {
            out.push(self.noise_chars[rng.gen_range(0..self.noise_chars.len())]);
        }
        if self.revealed == self.chars.len() {
            self.done = true;
        }
        out
    }
}
