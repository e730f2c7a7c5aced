//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use moneyquest_core::rng::DeterministicRng;

/// A no-op RNG that always picks index 0. Suitable for tests that do not
/// depend on which template is selected.
#[derive(Debug, Clone, Copy)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// An RNG that returns indices from a predetermined sequence. Panics if
/// the sequence is exhausted. Used in tests that need specific, repeatable
/// template selections (e.g. the losing invest branch).
#[derive(Debug)]
pub struct SequenceRng {
    indices: Vec<usize>,
    position: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given indices. Each index must
    /// be in range for the template set it will be used against.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_index(&mut self, _len: usize) -> usize {
        let index = self.indices[self.position];
        self.position += 1;
        index
    }
}
