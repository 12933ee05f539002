//! Fuel tank allocation.

use tracing::trace;

use crate::catalog::Catalog;
use crate::design::{AreaMode, Design};

use super::Infeasible;

const FLOW_EPSILON: f32 = 1e-6;

/// Fuel allocation parameters.
#[derive(Debug, Clone, Copy)]
pub struct FuelParams {
    /// Combat endurance target in seconds.
    pub combat_time: f32,
    /// Trade small tanks for large ones where the exchange pays off.
    pub use_big_tanks: bool,
    /// Fire suppressors to fit alongside the tanks.
    pub extinguishers: u32,
}

/// Fit enough fuel storage for the required combat time.
///
/// The requirement is rounded up to whole small tanks. In big-tank mode,
/// small-tank demand beyond what free sneaky corners absorb is exchanged for
/// large tanks at the capacity ratio; an exchange yielding zero large tanks
/// makes the candidate infeasible rather than silently falling back. Part of
/// the remaining small-tank demand then hides in sneaky corner pairs (one
/// hidden tank plus a half-hull filler per pair, no footprint), and the rest
/// is composed as ordinary tanks.
pub fn allocate_fuel(
    catalog: &Catalog,
    design: &mut Design,
    params: &FuelParams,
) -> Result<(), Infeasible> {
    let slots = catalog.slots();

    // Nothing burns fuel: no engines were enumerated for this candidate.
    if design.fuel_flow <= FLOW_EPSILON {
        trace!("candidate has no fuel flow, skipping");
        return Err(Infeasible);
    }

    let small_capacity = catalog.part(slots.tank_small).fuel;
    let mut num_tanks = (design.fuel_flow * params.combat_time / small_capacity).ceil() as i32;

    if params.use_big_tanks {
        let ratio = catalog.part(slots.tank_large).fuel / small_capacity;
        let num_big = ((num_tanks - design.sneaky_corners_left).max(0) as f32 / ratio) as i32;
        if num_big == 0 {
            trace!("big-tank exchange yields zero tanks, skipping");
            return Err(Infeasible);
        }
        num_tanks -= (num_big as f32 * ratio) as i32;
        debug_assert!(num_tanks >= 0);
        design.add(catalog, slots.tank_large, num_big as u32, AreaMode::Enabled);
    }

    // Each consumed corner pair hosts one hidden tank and a half-hull filler.
    let sneaky_tanks = (design.sneaky_corners_left / 2).min(num_tanks);
    num_tanks -= sneaky_tanks;
    design.sneaky_corners_left -= sneaky_tanks * 2;
    debug_assert!(num_tanks >= 0 && design.sneaky_corners_left >= 0);

    design.add_with_hull(catalog, slots.tank_small, num_tanks as u32);
    design.add(catalog, slots.tank_small, sneaky_tanks as u32, AreaMode::Disabled);
    design.add(
        catalog,
        slots.hull_half,
        (sneaky_tanks * 2) as u32,
        AreaMode::Disabled,
    );
    design.add_with_hull(catalog, slots.fire_suppressor, params.extinguishers);

    debug_assert!(design.fuel > 0.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_with_engines(engines: u32) -> (Catalog, Design) {
        let catalog = Catalog::builtin().unwrap();
        let mut design = Design::new(&catalog);
        let nk25 = catalog.slots().engine_nk25;
        design.add_with_hull(&catalog, nk25, engines);
        (catalog, design)
    }

    fn params(combat_time: f32, big: bool) -> FuelParams {
        FuelParams {
            combat_time,
            use_big_tanks: big,
            extinguishers: 2,
        }
    }

    #[test]
    fn capacity_covers_the_combat_time_target() {
        for corners in 0..16 {
            let (catalog, mut design) = setup_with_engines(4);
            design.sneaky_corners_left = corners;
            let required = design.fuel_flow * 200.0;

            allocate_fuel(&catalog, &mut design, &params(200.0, false)).unwrap();

            assert!(
                design.fuel >= required,
                "capacity {} below requirement {} with {} corners",
                design.fuel,
                required,
                corners
            );
            assert!(design.combat_time() >= 200.0);
        }
    }

    #[test]
    fn big_tank_capacity_also_covers_the_target() {
        for corners in 0..16 {
            let (catalog, mut design) = setup_with_engines(8);
            design.sneaky_corners_left = corners;
            let required = design.fuel_flow * 800.0;

            allocate_fuel(&catalog, &mut design, &params(800.0, true)).unwrap();

            assert!(design.count(catalog.slots().tank_large) > 0);
            assert!(design.fuel >= required);
        }
    }

    #[test]
    fn zero_fuel_flow_is_infeasible_not_fatal() {
        let catalog = Catalog::builtin().unwrap();
        let mut design = Design::new(&catalog);
        assert_eq!(
            allocate_fuel(&catalog, &mut design, &params(200.0, false)),
            Err(Infeasible)
        );
    }

    #[test]
    fn big_tank_mode_is_infeasible_when_nothing_exchanges() {
        // A tiny requirement: corners alone absorb it, zero big tanks fit.
        let (catalog, mut design) = setup_with_engines(1);
        design.sneaky_corners_left = 8;
        assert_eq!(
            allocate_fuel(&catalog, &mut design, &params(50.0, true)),
            Err(Infeasible)
        );
    }

    #[test]
    fn sneaky_corners_host_tanks_without_footprint() {
        let (catalog, mut design) = setup_with_engines(4);
        let slots = *catalog.slots();
        design.sneaky_corners_left = 6;
        let area_before = design.area;
        let budget_before = design.sneaky_corners_left;

        allocate_fuel(&catalog, &mut design, &params(400.0, false)).unwrap();

        let consumed = budget_before - design.sneaky_corners_left;
        assert!(consumed > 0 && consumed % 2 == 0);
        assert_eq!(design.count(slots.hull_half), consumed as u32);
        // Footprint grows only from the ordinary tanks and suppressors.
        let visible_tanks =
            design.count(slots.tank_small) as i32 - consumed / 2;
        let expected_area = visible_tanks * 2 + params(0.0, false).extinguishers as i32 * 2;
        assert_eq!(design.area - area_before, expected_area);
    }

    #[test]
    fn extinguisher_count_is_honored() {
        let (catalog, mut design) = setup_with_engines(4);
        let fire = catalog.slots().fire_suppressor;
        let p = FuelParams {
            combat_time: 200.0,
            use_big_tanks: false,
            extinguishers: 5,
        };
        allocate_fuel(&catalog, &mut design, &p).unwrap();
        assert_eq!(design.count(fire), 5);
    }
}
