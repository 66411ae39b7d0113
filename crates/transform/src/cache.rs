//! Weight cache for batch filtering of equally long series.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::weights::FfdWeights;

/// Cache of weight vectors for one `(threshold, lim)` pair.
///
/// Every column of a table shares the same length, so weights for a grid
/// order are generated once and reused read-only across columns (and
/// threads). Orders are keyed by their bit pattern.
#[derive(Debug, Clone)]
pub struct WeightCache {
    threshold: f64,
    lim: usize,
    cache: HashMap<u64, FfdWeights>,
}

impl WeightCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(threshold: f64, lim: usize) -> Self {
        Self {
            threshold,
            lim,
            cache: HashMap::new(),
        }
    }

    /// Creates a cache filled for every order in `orders`.
    #[must_use]
    pub fn precompute(threshold: f64, lim: usize, orders: &[f64]) -> Self {
        let mut cache = Self::new(threshold, lim);
        for &d in orders {
            cache.get_or_compute(d);
        }
        cache
    }

    /// Truncation threshold of the cached weights.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Series length the cached weights were generated for.
    #[must_use]
    pub fn lim(&self) -> usize {
        self.lim
    }

    /// Checks if weights for `d` are cached.
    #[must_use]
    pub fn contains(&self, d: f64) -> bool {
        self.cache.contains_key(&d.to_bits())
    }

    /// Gets cached weights for `d`, if present.
    #[must_use]
    pub fn get(&self, d: f64) -> Option<&FfdWeights> {
        self.cache.get(&d.to_bits())
    }

    /// Gets or generates weights for `d`.
    pub fn get_or_compute(&mut self, d: f64) -> &FfdWeights {
        let (threshold, lim) = (self.threshold, self.lim);
        self.cache
            .entry(d.to_bits())
            .or_insert_with(|| FfdWeights::generate(d, threshold, lim))
    }

    /// Weights for `d` and a series of length `lim`.
    ///
    /// Borrows from the cache on a hit (same `lim`, order present);
    /// otherwise generates fresh weights without touching the cache.
    #[must_use]
    pub fn weights_for(&self, d: f64, lim: usize) -> Cow<'_, FfdWeights> {
        match self.get(d) {
            Some(weights) if lim == self.lim => Cow::Borrowed(weights),
            _ => Cow::Owned(FfdWeights::generate(d, self.threshold, lim)),
        }
    }

    /// Returns the number of cached weight vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
