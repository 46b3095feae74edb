use std::collections::TryReserveError;

use thiserror::Error;
use tracing::debug;

use crate::evidence::category::{CategoryMask, EvidenceCategory};
use crate::evidence::config::EvidenceStoreConfig;
use crate::evidence::pair::{CategoryParser, EvidencePair, PairParser};
use crate::evidence::prefix;

/// Errors that can occur while collecting evidence.
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// The store already holds as many pairs as it was created for.
    #[error("Evidence store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Slots for the store could not be allocated.
    #[error("Allocation error: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type for evidence operations.
pub type EvidenceResult<T> = Result<T, EvidenceError>;

/// Fixed-capacity, insertion-ordered collection of evidence pairs.
///
/// Keys and values are borrowed from the caller for `'a`. Parsed values are
/// computed lazily by `P` the first time an iteration visits a pair and are
/// kept for every later iteration.
#[derive(Debug)]
pub struct EvidenceStore<'a, P = CategoryParser> {
    pairs: Vec<EvidencePair<'a>>,
    capacity: usize,
    parser: P,
}

impl<'a> EvidenceStore<'a, CategoryParser> {
    /// Create a store that accepts up to `capacity` pairs.
    ///
    /// Room for `capacity` pairs is reserved up front, but no slots exist
    /// until pairs are added: `get` returns `None` for every index of a
    /// fresh store.
    pub fn new(capacity: usize) -> Self {
        Self::with_parser(capacity, CategoryParser)
    }

    /// Create a store, reporting allocation failure instead of aborting.
    pub fn try_new(capacity: usize) -> EvidenceResult<Self> {
        Self::try_with_parser(capacity, CategoryParser)
    }

    /// Create a store sized from configuration.
    pub fn from_config(config: &EvidenceStoreConfig) -> Self {
        Self::new(config.capacity)
    }
}

impl<'a, P: PairParser> EvidenceStore<'a, P> {
    /// Create a store that parses values with `parser`.
    pub fn with_parser(capacity: usize, parser: P) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            capacity,
            parser,
        }
    }

    /// Create a store that parses values with `parser`, reporting
    /// allocation failure instead of aborting.
    pub fn try_with_parser(capacity: usize, parser: P) -> EvidenceResult<Self> {
        let mut pairs = Vec::new();
        pairs.try_reserve_exact(capacity)?;
        Ok(Self {
            pairs,
            capacity,
            parser,
        })
    }

    /// Append a pair.
    ///
    /// Returns `None` and drops the evidence when the store is full.
    pub fn add_string(
        &mut self,
        category: EvidenceCategory,
        field: &'a str,
        original_value: &'a str,
    ) -> Option<&EvidencePair<'a>> {
        if self.is_full() {
            debug!(
                field,
                category = %category,
                capacity = self.capacity,
                "evidence store full, dropping pair"
            );
            return None;
        }
        self.pairs
            .push(EvidencePair::new(category, field, original_value));
        self.pairs.last()
    }

    /// Append a pair, failing when the store is full.
    pub fn try_add_string(
        &mut self,
        category: EvidenceCategory,
        field: &'a str,
        original_value: &'a str,
    ) -> EvidenceResult<&EvidencePair<'a>> {
        let capacity = self.capacity;
        self.add_string(category, field, original_value)
            .ok_or(EvidenceError::CapacityExceeded { capacity })
    }

    /// Append a pair from a prefixed key such as `header.User-Agent`.
    ///
    /// The prefix picks the category and is stripped from the stored field.
    /// Keys without a known prefix are stored whole as
    /// [`EvidenceCategory::Ignore`].
    pub fn add_key(&mut self, key: &'a str, value: &'a str) -> Option<&EvidencePair<'a>> {
        let (category, field) = prefix::split_key(key);
        self.add_string(category, field, value)
    }

    /// Visit the pairs whose category is contained in `mask`.
    ///
    /// Pairs are visited in insertion order. Each visited pair is parsed
    /// first if it has not been already. Iteration stops after the callback
    /// returns `false`. Returns the number of pairs visited, counting the
    /// one that stopped the iteration.
    pub fn iterate<F>(&mut self, mask: CategoryMask, mut callback: F) -> usize
    where
        F: FnMut(&EvidencePair<'a>) -> bool,
    {
        let mut visited = 0;
        for pair in self.pairs.iter_mut() {
            if !pair.category.is_in(mask) {
                continue;
            }
            if pair.parsed_value.is_none() {
                pair.parsed_value =
                    Some(self.parser.parse(pair.category, pair.field, pair.original_value));
            }
            visited += 1;
            if !callback(pair) {
                break;
            }
        }
        visited
    }

    /// Pairs in insertion order, parsed or not.
    pub fn pairs(&self) -> &[EvidencePair<'a>] {
        &self.pairs
    }

    /// Pair at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&EvidencePair<'a>> {
        self.pairs.get(index)
    }

    /// Number of pairs added so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair has been added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Maximum number of pairs the store accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pairs that can still be added.
    pub fn remaining(&self) -> usize {
        self.capacity - self.pairs.len()
    }

    /// Whether further pairs would be dropped.
    pub fn is_full(&self) -> bool {
        self.pairs.len() >= self.capacity
    }

    /// Parser used for values on first visit.
    pub fn parser(&self) -> &P {
        &self.parser
    }
}
