//! Tests for subset matching, table ordering and mask resolution

#[cfg(test)]
mod tests {
    use farmtile::algorithm::patterns::{
        FARMLAND_TABLE, FULLY_SURROUNDED, ISOLATED, PatternEntry, SpriteCoord, WATER_TABLE,
        resolve,
    };

    // Tests a mask matches a pattern when it contains every required bit
    // Verified by requiring exact equality in matches
    #[test]
    fn test_entry_matches_superset() {
        let entry = PatternEntry {
            name: "T_B",
            required: 0b0100_0010,
            sprite: SpriteCoord::new(0, 2),
        };
        assert!(entry.matches(0b0100_0010));
        assert!(entry.matches(0b1100_0011));
        assert!(!entry.matches(0b0100_0000));
        assert_eq!(entry.specificity(), 2);
    }

    // Tests both shape tables list entries from most to fewest required directions
    // Verified by moving the single-direction T entry to the front
    #[test]
    fn test_tables_most_specific_first() {
        assert!(FARMLAND_TABLE.is_most_specific_first());
        assert!(WATER_TABLE.is_most_specific_first());
        assert_eq!(FARMLAND_TABLE.entries.len(), 46);
    }

    // Tests entry names agree with their required bits
    // Verified by mislabelling the R_B entry as L_B
    #[test]
    fn test_entry_names_match_bits() {
        for entry in FARMLAND_TABLE.entries {
            assert_eq!(
                farmtile::spatial::neighbors::describe_mask(entry.required),
                entry.name
            );
        }
    }

    // Tests a fully surrounded plot gets the full sprite, not an edge
    // Verified by ordering entries from fewest to most directions
    #[test]
    fn test_full_mask_resolves_to_full_sprite() {
        assert_eq!(resolve(0xFF, &FARMLAND_TABLE), FULLY_SURROUNDED);
        assert_eq!(FULLY_SURROUNDED, SpriteCoord::new(2, 1));
    }

    // Tests edge and corner shapes of a plot resolve to their sprites
    // Verified by returning the last matching entry instead of the first
    #[test]
    fn test_edge_masks() {
        assert_eq!(FARMLAND_TABLE.resolve(0b0001_1111), SpriteCoord::new(2, 0));
        assert_eq!(FARMLAND_TABLE.resolve(0b1111_1000), SpriteCoord::new(2, 2));
        assert_eq!(FARMLAND_TABLE.resolve(0b0110_1011), SpriteCoord::new(1, 1));
        assert_eq!(FARMLAND_TABLE.resolve(0b1101_0110), SpriteCoord::new(3, 1));
        assert_eq!(FARMLAND_TABLE.resolve(0b0000_1011), SpriteCoord::new(1, 0));
    }

    // Tests single and paired neighbours resolve to the matching strip sprites
    // Verified by removing the T_B entry
    #[test]
    fn test_strip_masks() {
        assert_eq!(WATER_TABLE.resolve(0b0000_0010), SpriteCoord::new(0, 1));
        assert_eq!(WATER_TABLE.resolve(0b0100_0000), SpriteCoord::new(0, 3));
        assert_eq!(WATER_TABLE.resolve(0b0100_0010), SpriteCoord::new(0, 2));
        assert_eq!(WATER_TABLE.resolve(0b0101_0000), SpriteCoord::new(6, 2));
    }

    // Tests empty and diagonal-only masks fall back to the isolated sprite
    // Verified by returning the first entry for unmatched masks
    #[test]
    fn test_unmatched_masks_use_default() {
        assert_eq!(FARMLAND_TABLE.resolve(0), ISOLATED);
        assert!(FARMLAND_TABLE.first_match(0).is_none());
        assert_eq!(FARMLAND_TABLE.resolve(0b1000_0000), ISOLATED);
        assert_eq!(FARMLAND_TABLE.resolve(0b1010_0101), ISOLATED);
    }

    // Tests every mask resolves to some sprite without panicking
    // Verified by indexing the entry list with the mask value
    #[test]
    fn test_all_masks_resolve() {
        let defaults = (0..=u8::MAX)
            .filter(|&mask| FARMLAND_TABLE.resolve(mask) == ISOLATED)
            .count();
        assert!(defaults >= 16);
        assert!(defaults < 256);
    }
}
