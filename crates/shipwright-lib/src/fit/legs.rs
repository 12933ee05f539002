//! Leg/chassis allocation.

use crate::catalog::Catalog;
use crate::chassis::ChassisLayout;
use crate::design::{AreaMode, Design};

/// Below this many fixed engines the dense layout has nothing to anchor to.
const MIN_FIXED_ENGINES_FOR_DENSE: u32 = 4;

/// Compose landing legs onto the design.
///
/// An explicit layout is used verbatim: one corner anchor per leg group plus
/// the requested leg counts, all at zero footprint (legs are purely mass and
/// cost). Without an explicit layout a decision table picks between two
/// built-in layouts:
/// `odd fixed-engine count OR large fixed engine present OR count < 4 ->
/// conservative; else -> dense`.
pub fn allocate_legs(catalog: &Catalog, design: &mut Design, chassis: &ChassisLayout) {
    let slots = catalog.slots();

    if chassis.total_legs() > 0 {
        let groups = chassis.effective_groups();
        design.add(catalog, slots.hull_corner, groups as u32, AreaMode::Disabled);
        for (leg, &count) in slots.legs.iter().zip(chassis.legs.iter()) {
            design.add(catalog, *leg, count as u32, AreaMode::Disabled);
        }
        return;
    }

    let fixed = design.count(slots.engine_d30s);
    let conservative = design.count(slots.engine_rd51) > 0
        || fixed % 2 != 0
        || fixed < MIN_FIXED_ENGINES_FOR_DENSE;

    if conservative {
        // Two symmetric gear groups with small stabilizers.
        design.add_with_hull(catalog, slots.legs[1], 2);
        design.add(catalog, slots.legs[0], 2, AreaMode::Disabled);
    } else {
        // One corner-anchored gear, the rest chained off it.
        design.add_with_hull(catalog, slots.legs[1], 1);
        design.add(catalog, slots.legs[1], 6, AreaMode::Disabled);
        design.add(catalog, slots.legs[0], 2, AreaMode::Disabled);
    }
}
