//! Heuristic allocators that complete a candidate design.
//!
//! Each allocator extends a design in place to satisfy one derived
//! requirement. The call order is a hard contract: legs, then fuel, then
//! power, then armor. Fuel runs before power because generator demand depends
//! on the chosen tank configuration; armor runs last because plate count
//! depends on the final footprint. Later allocators read state only earlier
//! ones produce (the leg allocator feeds the sneaky-corner budget the fuel
//! allocator consumes).

pub mod armor;
pub mod fuel;
pub mod legs;
pub mod power;

pub use armor::allocate_armor;
pub use fuel::allocate_fuel;
pub use legs::allocate_legs;
pub use power::allocate_power;

/// The candidate cannot satisfy an allocator's requirement.
///
/// Not an error: the search engine drops the candidate and continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infeasible;
