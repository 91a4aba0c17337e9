//! Weighted categorical draws.
//!
//! One primitive shared by the answer sampler and the demographic draws:
//! cumulative weight sums, one uniform integer draw, binary search.

use rand::Rng;

use crate::error::SynthError;

#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    items: Vec<T>,
    cumulative: Vec<u32>,
}

impl<T> WeightedTable<T> {
    /// Build from `(item, weight)` pairs. Zero-weight items are kept but can
    /// never be drawn.
    pub fn new(pairs: impl IntoIterator<Item = (T, u32)>) -> Result<Self, SynthError> {
        let mut items = Vec::new();
        let mut cumulative = Vec::new();
        let mut total: u32 = 0;
        for (item, weight) in pairs {
            total = total
                .checked_add(weight)
                .ok_or(SynthError::EmptyDistribution)?;
            items.push(item);
            cumulative.push(total);
        }
        if total == 0 {
            return Err(SynthError::EmptyDistribution);
        }
        Ok(Self { items, cumulative })
    }

    pub fn total(&self) -> u32 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the drawn item. Consumes exactly one value from `rng`.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let ticket = rng.gen_range(0..self.total());
        // First bucket whose cumulative sum exceeds the ticket.
        self.cumulative.partition_point(|&c| c <= ticket)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[self.sample_index(rng)]
    }
}
