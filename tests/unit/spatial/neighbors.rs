//! Tests for direction bit layout and neighbour mask computation

#[cfg(test)]
mod tests {
    use farmtile::spatial::grid::TileGrid;
    use farmtile::spatial::neighbors::{
        Direction, describe_mask, farmland_mask, mask_of, neighbor_mask, soil_mask,
        watered_mask,
    };
    use farmtile::spatial::tile::Tile;

    // Tests bits run TL first down to BR last
    // Verified by swapping the Left and Right bits
    #[test]
    fn test_direction_bit_order() {
        let bits: Vec<u8> = Direction::ALL.iter().map(|d| d.bit()).collect();
        assert_eq!(bits, vec![128, 64, 32, 16, 8, 4, 2, 1]);
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::BottomRight.offset(), (1, 1));
    }

    // Tests mask_of folds every listed direction
    // Verified by dropping the first element in the recursion
    #[test]
    fn test_mask_of() {
        assert_eq!(mask_of(&[]), 0);
        assert_eq!(mask_of(&[Direction::Top, Direction::Bottom]), 0b0100_0010);
        assert_eq!(mask_of(&Direction::ALL), 0xFF);
    }

    // Tests a dirt interior cell sees soil in all eight directions
    // Verified by skipping diagonal offsets
    #[test]
    fn test_soil_mask_interior() {
        let grid = TileGrid::new(20, 10);
        assert_eq!(soil_mask(&grid, 5, 5), 0xFF);
    }

    // Tests border grass masks depend on where the dirt interior lies
    // Verified by treating void neighbours as soil
    #[test]
    fn test_soil_mask_on_border() {
        let grid = TileGrid::new(20, 10);
        assert_eq!(soil_mask(&grid, 0, 0), 0b0000_0001);
        assert_eq!(soil_mask(&grid, 5, 0), 0b0000_0111);
        assert_eq!(soil_mask(&grid, 0, 5), 0b0010_1001);
        assert_eq!(soil_mask(&grid, 19, 5), 0b1001_0100);
        assert_eq!(soil_mask(&grid, 5, 9), 0b1110_0000);
    }

    // Tests farmland mask only counts farmland neighbours
    // Verified by counting dirt as farmland
    #[test]
    fn test_farmland_mask() {
        let mut grid = TileGrid::new(10, 10);
        grid.set(4, 3, Tile::farmland());
        grid.set(5, 4, Tile::farmland());
        assert_eq!(farmland_mask(&grid, 4, 4), 0b0100_1000);
        assert_eq!(farmland_mask(&grid, 8, 8), 0);
    }

    // Tests a single watered plot shows as the bottom neighbour of the cell above
    // Verified by reversing the vertical offsets
    #[test]
    fn test_watered_mask_single_neighbor() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(1, 1, Tile::farmland().with_water());
        assert_eq!(watered_mask(&grid, 1, 0), 0b0000_0010);
    }

    // Tests a custom predicate sees void beyond the edge
    // Verified by skipping out-of-bounds neighbours entirely
    #[test]
    fn test_neighbor_mask_sees_void() {
        let grid = TileGrid::new(3, 3);
        let void_mask = neighbor_mask(&grid, 0, 0, |tile| *tile == Tile::void());
        assert_eq!(void_mask, 0b1111_0100);
    }

    // Tests cells at the i32 limits read every neighbour as void
    // Verified by adding the offsets without overflow checks
    #[test]
    fn test_extreme_coordinates_read_void() {
        let grid = TileGrid::default();
        assert_eq!(farmland_mask(&grid, i32::MAX, 0), 0);
        assert_eq!(soil_mask(&grid, 0, i32::MIN), 0);
        assert_eq!(neighbor_mask(&grid, i32::MIN, i32::MIN, |_| false), 0);
        assert_eq!(
            neighbor_mask(&grid, i32::MAX, i32::MAX, |tile| *tile == Tile::void()),
            0xFF
        );
        assert_eq!(
            neighbor_mask(&grid, i32::MIN, i32::MAX, |tile| *tile == Tile::void()),
            0xFF
        );
    }

    // Tests masks describe themselves by direction labels
    // Verified by joining labels in reverse order
    #[test]
    fn test_describe_mask() {
        assert_eq!(describe_mask(0b0101_1010), "T_L_R_B");
        assert_eq!(describe_mask(0), "");
    }
}
