//! Armor plate allocation.

use crate::catalog::Catalog;
use crate::design::Design;

/// Divisor for the flat-edge correction applied per fixed structural engine
/// type present. A tunable domain parameter; validated against reference
/// outputs rather than derived.
pub const ARMOR_EDGE_DIVISOR: f32 = 2.0;

const LAYERS_EPSILON: f32 = 1e-6;

/// Fit armor plates around the design's perimeter.
///
/// The perimeter is approximated as that of a square with the design's total
/// footprint area, minus the flat edge each fixed structural engine type
/// occupies. The corrected perimeter must stay positive; footprint accounting
/// elsewhere guarantees a minimum area, so a non-positive value is a
/// composition bug.
pub fn allocate_armor(catalog: &Catalog, design: &mut Design, layers: f32) {
    if layers < LAYERS_EPSILON {
        return;
    }

    let slots = catalog.slots();
    let mut circumference = (design.area as f32).sqrt() * 4.0;
    for engine in [slots.engine_d30s, slots.engine_rd51] {
        if design.count(engine) > 0 {
            let area = catalog
                .part(engine)
                .size
                .area()
                .expect("fixed engines occupy footprint") as f32;
            circumference -= area.sqrt() / ARMOR_EDGE_DIVISOR;
        }
    }
    assert!(
        circumference > 0.0,
        "flat-edge correction exceeded hull circumference"
    );

    let plates = (circumference * layers).ceil() as u32;
    design.add_with_hull(catalog, slots.armor_plate, plates);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, Design) {
        let catalog = Catalog::builtin().unwrap();
        let mut design = Design::new(&catalog);
        let slots = *catalog.slots();
        design.add_with_hull(&catalog, slots.engine_d30s, 4);
        design.add_with_hull(&catalog, slots.tank_small, 6);
        (catalog, design)
    }

    #[test]
    fn zero_layers_is_a_no_op() {
        let (catalog, mut design) = setup();
        let before = design.clone();
        allocate_armor(&catalog, &mut design, 0.0);
        assert_eq!(design, before);
    }

    #[test]
    fn plate_count_is_monotone_in_layer_count() {
        let (catalog, base) = setup();
        let plate = catalog.slots().armor_plate;
        let mut previous = 0;
        for tenths in 1..=40 {
            let layers = tenths as f32 / 10.0;
            let mut design = base.clone();
            allocate_armor(&catalog, &mut design, layers);
            let plates = design.count(plate);
            assert!(
                plates >= previous,
                "plates dropped from {previous} to {plates} at {layers} layers"
            );
            previous = plates;
        }
    }

    #[test]
    fn fixed_engine_presence_shrinks_the_plate_count() {
        let catalog = Catalog::builtin().unwrap();
        let slots = *catalog.slots();
        let plate = slots.armor_plate;

        let mut bare = Design::new(&catalog);
        bare.add_with_hull(&catalog, slots.tank_small, 8);
        let mut with_engines = bare.clone();
        with_engines.add_with_hull(&catalog, slots.engine_d30s, 2);
        // Equalize footprints so only the correction term differs.
        bare.add_with_hull(&catalog, slots.tank_small, 4);

        assert_eq!(bare.area, with_engines.area);
        allocate_armor(&catalog, &mut bare, 2.0);
        allocate_armor(&catalog, &mut with_engines, 2.0);
        assert!(with_engines.count(plate) <= bare.count(plate));
    }

    #[test]
    fn plates_arrive_with_unit_hulls() {
        let (catalog, mut design) = setup();
        let slots = *catalog.slots();
        allocate_armor(&catalog, &mut design, 1.0);
        let plates = design.count(slots.armor_plate);
        assert!(plates > 0);
        assert_eq!(design.count(slots.hull_unit), plates);
    }
}
