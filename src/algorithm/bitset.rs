use bitvec::prelude::*;
use std::fmt;

use crate::spatial::tile::CropId;

/// Set of crop ids
///
/// Used for growth policy flags such as the perennial list. The default set
/// covers every [`CropId`]; a set created with a smaller capacity grows on
/// insert, so no id is ever dropped.
#[derive(Clone, Debug)]
pub struct CropSet {
    bits: BitVec,
}

impl CropSet {
    /// Default capacity, one bit per possible crop id
    pub const DEFAULT_CAPACITY: usize = 1 << u16::BITS;

    /// Create an empty set with room for ids below `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set containing the given crops
    pub fn from_crops(crops: &[CropId]) -> Self {
        let mut set = Self::new(Self::DEFAULT_CAPACITY);
        for &crop in crops {
            set.insert(crop);
        }
        set
    }

    /// Insert a crop id, growing the set if it is beyond the capacity
    pub fn insert(&mut self, crop: CropId) {
        let index = crop.index();
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        self.bits.set(index, true);
    }

    /// Remove a crop id
    pub fn remove(&mut self, crop: CropId) {
        if crop.index() < self.bits.len() {
            self.bits.set(crop.index(), false);
        }
    }

    /// Test crop membership
    pub fn contains(&self, crop: CropId) -> bool {
        self.bits.get(crop.index()).as_deref() == Some(&true)
    }

    /// Test if no crops are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count crops in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all members in ascending order
    pub fn to_vec(&self) -> Vec<CropId> {
        self.bits
            .iter_ones()
            .filter_map(|index| u16::try_from(index).ok().map(CropId))
            .collect()
    }
}

impl PartialEq for CropSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits.iter_ones().eq(other.bits.iter_ones())
    }
}

impl Eq for CropSet {}

impl Default for CropSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl fmt::Display for CropSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.to_vec().iter().map(ToString::to_string).collect();
        write!(f, "CropSet({})", names.join(", "))
    }
}
