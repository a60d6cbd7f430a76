//! The fixed-capacity registry of expression-input slots.
//!
//! The front end creates every slot eagerly when the session starts: ten key/value pairs for
//! substituting values into a calculation, and ten single slots naming the variables to
//! propagate errors of. Slots are addressed by position and live for the whole session; a user
//! "deleting" one simply clears its content, which excludes it from the active queries below.

/// The number of slot positions of each kind created when a session starts.
pub const SLOT_CAPACITY: usize = 10;

/// A key/value pair of slots, used to substitute a value for a variable in a calculation.
///
/// A pair takes part in a calculation only while both sides hold content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSlot {
    key: String,
    value: String,
}

impl PairSlot {
    /// Whether both sides of this pair are non-empty.
    pub fn is_active(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// The index-addressed collection of expression-input slots owned by a session.
///
/// Positions are `0..SLOT_CAPACITY`. A position is unoccupied until the corresponding `add_*`
/// call creates its slot; edits addressed to an unoccupied or out-of-range position are dropped,
/// since no editing widget exists to produce them.
#[derive(Debug)]
pub struct FieldRegistry {
    pairs: [Option<PairSlot>; SLOT_CAPACITY],
    singles: [Option<String>; SLOT_CAPACITY],
}

impl FieldRegistry {
    /// Creates a registry with every position unoccupied.
    pub fn new() -> Self {
        Self {
            pairs: std::array::from_fn(|_| None),
            singles: std::array::from_fn(|_| None),
        }
    }

    /// Creates the single slot at the given position, initially empty.
    ///
    /// Creating a slot that already exists leaves it untouched.
    pub fn add_slot(&mut self, id: usize) {
        if let Some(slot) = self.singles.get_mut(id) {
            slot.get_or_insert_with(String::new);
        }
    }

    /// Creates the key/value pair slot at the given position, initially empty on both sides.
    ///
    /// Creating a slot that already exists leaves it untouched.
    pub fn add_pair_slot(&mut self, id: usize) {
        if let Some(slot) = self.pairs.get_mut(id) {
            slot.get_or_insert_with(PairSlot::default);
        }
    }

    /// Replaces the content of the single slot at the given position.
    pub fn set_variable(&mut self, id: usize, latex: impl Into<String>) {
        if let Some(Some(slot)) = self.singles.get_mut(id) {
            *slot = latex.into();
        }
    }

    /// Replaces the key side of the pair slot at the given position.
    pub fn set_key(&mut self, id: usize, latex: impl Into<String>) {
        if let Some(Some(pair)) = self.pairs.get_mut(id) {
            pair.key = latex.into();
        }
    }

    /// Replaces the value side of the pair slot at the given position.
    pub fn set_value(&mut self, id: usize, latex: impl Into<String>) {
        if let Some(Some(pair)) = self.pairs.get_mut(id) {
            pair.value = latex.into();
        }
    }

    /// The contents of every occupied, non-empty single slot, in position order.
    pub fn active_values(&self) -> Vec<&str> {
        self.singles
            .iter()
            .flatten()
            .filter(|content| !content.is_empty())
            .map(|content| content.as_str())
            .collect()
    }

    /// The `(key, value)` contents of every pair slot whose sides are both occupied and
    /// non-empty, in position order.
    pub fn active_pairs(&self) -> Vec<(&str, &str)> {
        self.pairs
            .iter()
            .flatten()
            .filter(|pair| pair.is_active())
            .map(|pair| (pair.key.as_str(), pair.value.as_str()))
            .collect()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}
