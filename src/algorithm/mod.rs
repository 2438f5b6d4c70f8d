/// Fixed-capacity crop id sets for policy flags
pub mod bitset;
/// Per-cell layer selection and draw list assembly
pub mod compositor;
/// Grass border sprite selection by exact soil mask
pub mod grass;
/// Growth clock and growth policy
pub mod growth;
/// Shape pattern tables and mask resolution
pub mod patterns;
/// Session controller that owns the grid and publishes change events
pub mod session;
/// Tool transitions of the tile state machine
pub mod tools;
