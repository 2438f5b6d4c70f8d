//! Tests for tool transitions, rejections and action parsing

#[cfg(test)]
mod tests {
    use farmtile::FarmError;
    use farmtile::algorithm::bitset::CropSet;
    use farmtile::algorithm::tools::{
        Tool, ToolAction, harvest, next_tile, plant, remove_farmland, till, water,
    };
    use farmtile::spatial::grid::TileGrid;
    use farmtile::spatial::tile::{CropId, Terrain, Tile};

    fn grape_perennial() -> CropSet {
        CropSet::from_crops(&[CropId::GRAPE])
    }

    // Tests the hoe turns dirt into dry, empty farmland
    // Verified by setting watered on tilled soil
    #[test]
    fn test_till_dirt() {
        let mut grid = TileGrid::new(5, 5);
        let outcome = till(&mut grid, 2, 2);
        assert!(outcome.is_ok());
        assert_eq!(grid.get(2, 2), Tile::farmland());
    }

    // Tests the hoe refuses grass, farmland and void
    // Verified by letting the hoe overwrite grass
    #[test]
    fn test_till_rejections() {
        let mut grid = TileGrid::new(5, 5);
        assert!(matches!(
            till(&mut grid, 0, 0),
            Err(FarmError::ToolRejected {
                terrain: Terrain::Grass,
                ..
            })
        ));
        assert!(till(&mut grid, 2, 2).is_ok());
        assert!(till(&mut grid, 2, 2).is_err());
        assert!(till(&mut grid, 9, 9).is_err());
        assert_eq!(grid.get(0, 0), Tile::grass());
    }

    // Tests watering sets only the flag and keeps the crop
    // Verified by resetting the growth stage on water
    #[test]
    fn test_water_keeps_crop() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(2, 2, Tile::planted(CropId::WHEAT, false, 2));
        assert!(water(&mut grid, 2, 2).is_ok());
        assert_eq!(grid.get(2, 2), Tile::planted(CropId::WHEAT, true, 2));
        assert!(water(&mut grid, 1, 1).is_err());
    }

    // Tests the pickaxe discards water and crop
    // Verified by keeping the watered flag when reverting
    #[test]
    fn test_remove_farmland() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(2, 2, Tile::planted(CropId::TOMATO, true, 3));
        assert!(remove_farmland(&mut grid, 2, 2).is_ok());
        assert_eq!(grid.get(2, 2), Tile::dirt());
        assert!(remove_farmland(&mut grid, 2, 2).is_err());
    }

    // Tests planting needs empty farmland and keeps the water flag
    // Verified by allowing planting over an existing crop
    #[test]
    fn test_plant() {
        let mut grid = TileGrid::new(5, 5);
        assert!(plant(&mut grid, 2, 2, CropId::WHEAT).is_err());

        grid.set(2, 2, Tile::farmland().with_water());
        assert!(plant(&mut grid, 2, 2, CropId::WHEAT).is_ok());
        assert_eq!(grid.get(2, 2), Tile::planted(CropId::WHEAT, true, 0));

        assert!(plant(&mut grid, 2, 2, CropId::TOMATO).is_err());
        assert_eq!(grid.get(2, 2).crop, Some(CropId::WHEAT));
    }

    // Tests harvest clears annual crops and reports them
    // Verified by keeping every crop on harvest
    #[test]
    fn test_harvest_annual() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(2, 2, Tile::planted(CropId::WHEAT, true, 3));

        let outcome = harvest(&mut grid, 2, 2, &grape_perennial());
        assert_eq!(outcome.ok().and_then(|o| o.harvested), Some(CropId::WHEAT));
        assert_eq!(grid.get(2, 2), Tile::farmland().with_water());
    }

    // Tests harvest keeps perennial crops and restarts them at stage 0
    // Verified by ignoring the perennial set
    #[test]
    fn test_harvest_perennial() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(2, 2, Tile::planted(CropId::GRAPE, false, 3));

        assert!(harvest(&mut grid, 2, 2, &grape_perennial()).is_ok());
        assert_eq!(grid.get(2, 2), Tile::planted(CropId::GRAPE, false, 0));
    }

    // Tests immature or missing crops cannot be harvested
    // Verified by dropping the maturity check
    #[test]
    fn test_harvest_rejections() {
        let mut grid = TileGrid::new(5, 5);
        grid.set(1, 1, Tile::planted(CropId::WHEAT, true, 2));
        grid.set(2, 2, Tile::farmland());

        assert!(harvest(&mut grid, 1, 1, &CropSet::default()).is_err());
        assert!(harvest(&mut grid, 2, 2, &CropSet::default()).is_err());
        assert_eq!(grid.get(1, 1), Tile::planted(CropId::WHEAT, true, 2));
    }

    // Tests next_tile leaves the caller's tile untouched on rejection
    // Verified by mutating the input tile in place
    #[test]
    fn test_next_tile_is_pure() {
        let tile = Tile::grass();
        let result = next_tile(Tool::WateringCan, &tile, 0, 0, &CropSet::default());
        assert!(result.is_err());
        assert_eq!(tile, Tile::grass());
    }

    // Tests action strings parse into tools and positions
    // Verified by swapping x and y in the parser
    #[test]
    fn test_parse_actions() {
        let parsed: Result<ToolAction, _> = "till:3,4".parse();
        assert_eq!(
            parsed.ok(),
            Some(ToolAction {
                tool: Tool::Hoe,
                x: 3,
                y: 4
            })
        );

        let planted: Result<ToolAction, _> = "plant:1,2:grape".parse();
        assert_eq!(planted.ok().map(|a| a.tool), Some(Tool::Seed(CropId::GRAPE)));

        let numeric: Result<ToolAction, _> = "plant:1,2:7".parse();
        assert_eq!(numeric.ok().map(|a| a.tool), Some(Tool::Seed(CropId(7))));
    }

    // Tests malformed action strings are rejected
    // Verified by ignoring trailing fields
    #[test]
    fn test_parse_rejections() {
        for text in ["dig:1,1", "till:1", "till:a,1", "plant:1,1", "water:1,1:extra"] {
            assert!(text.parse::<ToolAction>().is_err(), "{text} should not parse");
        }
    }

    // Tests actions print back in their parse form
    // Verified by printing plant actions without the crop
    #[test]
    fn test_action_display() {
        let action = ToolAction {
            tool: Tool::Seed(CropId::TOMATO),
            x: 5,
            y: 6,
        };
        assert_eq!(action.to_string(), "plant:5,6:1");
        assert_eq!(action.to_string().parse::<ToolAction>().ok(), Some(action));
    }
}
