//! Power generator allocation.

use crate::catalog::Catalog;
use crate::design::Design;

/// Fit generators to cover the design's power deficit.
///
/// The requirement is the negated power balance scaled by the power-fraction
/// setting (running below 100% draw shrinks it). The remainder after dividing
/// by the large generator's output goes to one or two small generators when
/// they weigh less than another large one; large generators cover the rest,
/// rounded up.
pub fn allocate_power(catalog: &Catalog, design: &mut Design, power_fraction: f32) {
    let slots = catalog.slots();
    let mut required = -design.power * power_fraction;
    if required <= f32::EPSILON {
        return;
    }

    let small_output = catalog.part(slots.gen_small).power;
    let large_output = catalog.part(slots.gen_large).power;

    let remainder = required % large_output;
    if remainder <= 2.0 * small_output {
        let small_gens = if remainder > small_output { 2 } else { 1 };
        design.add_with_hull(catalog, slots.gen_small, small_gens);
        required = (required - small_output * small_gens as f32).max(0.0);
    }

    let large_gens = ((required + 1e-6) / large_output).ceil() as u32;
    design.add_with_hull(catalog, slots.gen_large, large_gens);
}
