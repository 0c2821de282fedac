use rand::RngCore;

/// Replays a fixed, cycling sequence of raw words.
pub struct MockRng {
    words: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(words: Vec<u64>) -> Self {
        MockRng { words, index: 0 }
    }

    /// Each draw in `[0, 1)` comes back out of `rng.random::<f64>()`, which
    /// keeps the top 53 bits of a word.
    pub fn from_draws(draws: &[f64]) -> Self {
        let scale = (1u64 << 53) as f64;
        let words = draws
            .iter()
            .map(|draw| ((draw * scale) as u64) << 11)
            .collect();

        MockRng::new(words)
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.index];
        self.index = (self.index + 1) % self.words.len();
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
