use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the composer's random picks.
pub trait Chooser {
    /// Picks an index in `0..len`. Never called with `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible picks: the same seed yields the same plan.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl Chooser for FirstChooser {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}

pub(crate) fn pick<'a, T>(chooser: &mut dyn Chooser, items: &[&'a T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }

    items.get(chooser.choose_index(items.len())).copied()
}
