use rand::prelude::*;

use crate::*;

/// Draws unique colors from a fixed pool.
///
/// The pool is only ever borrowed, so every call samples from the full pool.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaletteSampler<'a> {
    pool: &'a [Color],
}

impl<'a> PaletteSampler<'a> {
    pub const fn new(pool: &'a [Color]) -> Self {
        Self { pool }
    }

    /// Picks `count` distinct colors in random order, uniformly without replacement.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the pool size; callers bound `count` through
    /// [`GameConfig::validate`] first.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: TileCount) -> Vec<Color> {
        let count = usize::from(count);
        assert!(
            count <= self.pool.len(),
            "requested {count} colors from a pool of {}",
            self.pool.len()
        );

        let mut scratch = self.pool.to_vec();
        let (picked, _) = scratch.partial_shuffle(rng, count);
        let picked = picked.to_vec();
        log::trace!("sampled colors: {:?}", picked);
        picked
    }
}
