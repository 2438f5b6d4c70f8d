//! Tests for `CropSet` membership and capacity handling

#[cfg(test)]
mod tests {
    use farmtile::algorithm::bitset::CropSet;
    use farmtile::spatial::tile::CropId;

    // Verifies new CropSet is empty with count 0
    // Verified by initializing set with all bits set to 1
    #[test]
    fn test_new_set() {
        let set = CropSet::new(10);
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
    }

    // Tests insertion, containment and removal
    // Verified by removing the bit-setting logic from insert
    #[test]
    fn test_insert_contains_remove() {
        let mut set = CropSet::default();
        set.insert(CropId::GRAPE);
        assert!(set.contains(CropId::GRAPE));
        assert!(!set.contains(CropId::WHEAT));
        assert_eq!(set.count(), 1);

        set.remove(CropId::GRAPE);
        assert!(set.is_empty());
    }

    // Tests ids beyond a small capacity grow the set instead of being dropped
    // Verified by ignoring out-of-range ids on insert
    #[test]
    fn test_out_of_capacity() {
        let mut set = CropSet::new(4);
        assert!(!set.contains(CropId(10)));
        set.insert(CropId(10));
        assert!(set.contains(CropId(10)));
        assert_eq!(set.to_vec(), vec![CropId(10)]);
        assert_eq!(set, CropSet::from_crops(&[CropId(10)]));
    }

    // Tests the default set holds the largest crop id
    // Verified by restoring a 64-bit default capacity without growth
    #[test]
    fn test_default_covers_every_id() {
        let mut set = CropSet::default();
        set.insert(CropId(64));
        set.insert(CropId(u16::MAX));
        assert!(set.contains(CropId(64)));
        assert!(set.contains(CropId(u16::MAX)));
        assert_eq!(set.count(), 2);
        assert_eq!(set.to_vec(), vec![CropId(64), CropId(u16::MAX)]);
    }

    // Tests members come back in ascending order
    // Verified by collecting from a HashSet
    #[test]
    fn test_from_crops_to_vec() {
        let set = CropSet::from_crops(&[CropId::GRAPE, CropId::WHEAT, CropId::TOMATO]);
        assert_eq!(
            set.to_vec(),
            vec![CropId::WHEAT, CropId::TOMATO, CropId::GRAPE]
        );
        assert_eq!(set.to_string(), "CropSet(wheat, tomato, grape)");
    }
}
