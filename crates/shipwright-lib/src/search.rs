//! The combinatorial search engine.
//!
//! Enumerates engine counts within their intervals, completes each candidate
//! through the allocator chain, filters by the configured constraints, and
//! forwards accepted designs to the reporter until the match limit is hit.
//! Reported order is deterministic: lexicographic in enumeration-variable
//! order.

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::chassis::ChassisLayout;
use crate::design::Design;
use crate::error::Result;
use crate::fit::{allocate_armor, allocate_fuel, allocate_legs, allocate_power};
use crate::fit::fuel::FuelParams;
use crate::interval::Interval;

/// Parity constraint over the small vectoring engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineParity {
    #[default]
    Any,
    Even,
    Odd,
}

/// Search configuration: enumeration intervals, allocator parameters and
/// acceptance constraints.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Thrust-to-weight ratio acceptance interval.
    pub twr: Interval<f32>,
    /// Horizontal thrust-to-weight ratio acceptance interval.
    pub horizontal_twr: Interval<f32>,
    /// Total vectoring engine count enumeration interval.
    pub engines: Interval<i32>,
    /// Fixed engine count enumeration interval.
    pub fixed_engines: Interval<i32>,
    /// Hourly fuel usage acceptance interval.
    pub fuel_usage: Interval<f32>,
    /// Cost acceptance interval.
    pub cost: Interval<i32>,
    /// Combat endurance target in seconds.
    pub combat_time: f32,
    /// Fraction of the power draw that must be generated.
    pub power_fraction: f32,
    /// Armor layers to fit.
    pub armor_layers: f32,
    /// Flat mass offset applied to every candidate.
    pub extra_mass: f32,
    /// Flat power draw offset applied to every candidate.
    pub extra_power: f32,
    /// Fire suppressors fitted per candidate.
    pub extinguishers: u32,
    /// Stop after this many accepted designs.
    pub num_matches: usize,
    pub engine_parity: EngineParity,
    pub use_big_tanks: bool,
    pub use_big_engines: bool,
    pub chassis: ChassisLayout,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            twr: Interval::new(1.1, f32::MAX),
            horizontal_twr: Interval::new(0.0, f32::MAX),
            engines: Interval::new(1, 32),
            fixed_engines: Interval::new(2, 6),
            fuel_usage: Interval::new(0.0, f32::MAX),
            cost: Interval::new(0, i32::MAX),
            combat_time: 200.0,
            power_fraction: 1.0,
            armor_layers: 0.0,
            extra_mass: 0.0,
            extra_power: 0.0,
            extinguishers: 2,
            num_matches: usize::MAX,
            engine_parity: EngineParity::Any,
            use_big_tanks: false,
            use_big_engines: false,
            chassis: ChassisLayout::default(),
        }
    }
}

/// Renders accepted designs.
///
/// `ordinal` is the running acceptance index starting at zero. The return
/// value states whether the design counts toward the match limit; formats
/// that emit a header on the first call can decline once without losing a
/// match slot.
pub trait Reporter {
    fn report(&mut self, catalog: &Catalog, design: &Design, ordinal: usize) -> bool;
}

/// Engine counts for one enumerated point.
#[derive(Debug, Clone, Copy)]
struct EngineCounts {
    d30s: u32,
    rd51: u32,
    d30: u32,
    nk25: u32,
    rd59: u32,
}

/// Run the search, reporting accepted candidates in enumeration order.
///
/// Returns the number of accepted designs; zero means no feasible design
/// exists within the constraints. When big tanks were requested, a second
/// full pass with big tanks disabled additionally surfaces small-tank-only
/// candidates.
pub fn run_search(
    catalog: &Catalog,
    base: &Design,
    params: &SearchParams,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    params.chassis.validate()?;

    let mut pass = SearchPass {
        catalog,
        base,
        params,
        reporter,
        use_big_tanks: params.use_big_tanks,
        accepted: 0,
    };

    pass.enumerate();
    if params.use_big_tanks {
        debug!("big-tank pass done, re-enumerating with small tanks only");
        pass.use_big_tanks = false;
        pass.enumerate();
    }

    debug!(accepted = pass.accepted, "search finished");
    Ok(pass.accepted)
}

struct SearchPass<'a> {
    catalog: &'a Catalog,
    base: &'a Design,
    params: &'a SearchParams,
    reporter: &'a mut dyn Reporter,
    use_big_tanks: bool,
    accepted: usize,
}

impl SearchPass<'_> {
    fn done(&self) -> bool {
        self.accepted >= self.params.num_matches
    }

    fn enumerate(&mut self) {
        let params = self.params;
        let fixed_lo = params.fixed_engines.min.max(0);
        let fixed_hi = params.fixed_engines.max;
        let engines_lo = params.engines.min.max(0);
        let engines_hi = params.engines.max;
        debug!(
            fixed = ?(fixed_lo, fixed_hi),
            vectoring = ?(engines_lo, engines_hi),
            big_engines = params.use_big_engines,
            big_tanks = self.use_big_tanks,
            "enumerating candidates"
        );

        if params.use_big_engines {
            // Fixed thrust split between the small and large fixed types; the
            // large count is the remainder, never iterated independently.
            for fixed_total in fixed_lo..=fixed_hi {
                for d30s in 0..=fixed_total {
                    let rd51 = fixed_total - d30s;
                    for vectoring in engines_lo..=engines_hi {
                        for d30 in 0..=vectoring {
                            for nk25 in 0..=(vectoring - d30) {
                                let rd59 = vectoring - d30 - nk25;
                                self.try_candidate(EngineCounts {
                                    d30s: d30s as u32,
                                    rd51: rd51 as u32,
                                    d30: d30 as u32,
                                    nk25: nk25 as u32,
                                    rd59: rd59 as u32,
                                });
                                if self.done() {
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        } else {
            for d30s in fixed_lo..=fixed_hi {
                for vectoring in engines_lo..=engines_hi {
                    for d30 in 0..=vectoring {
                        let nk25 = vectoring - d30;
                        self.try_candidate(EngineCounts {
                            d30s: d30s as u32,
                            rd51: 0,
                            d30: d30 as u32,
                            nk25: nk25 as u32,
                            rd59: 0,
                        });
                        if self.done() {
                            return;
                        }
                    }
                }
            }
        }
    }

    fn try_candidate(&mut self, engines: EngineCounts) {
        let catalog = self.catalog;
        let params = self.params;
        let slots = catalog.slots();

        let mut design = self.base.clone();
        design.mass += params.extra_mass;
        design.power -= params.extra_power;

        design.add_with_hull(catalog, slots.engine_d30s, engines.d30s);
        design.add_with_hull(catalog, slots.engine_rd51, engines.rd51);
        design.add_with_hull(catalog, slots.engine_d30, engines.d30);
        design.add_with_hull(catalog, slots.engine_nk25, engines.nk25);
        design.add_with_hull(catalog, slots.engine_rd59, engines.rd59);

        allocate_legs(catalog, &mut design, &params.chassis);
        let fuel_params = FuelParams {
            combat_time: params.combat_time,
            use_big_tanks: self.use_big_tanks,
            extinguishers: params.extinguishers,
        };
        if allocate_fuel(catalog, &mut design, &fuel_params).is_err() {
            trace!(?engines, "infeasible candidate skipped");
            return;
        }
        allocate_power(catalog, &mut design, params.power_fraction);
        allocate_armor(catalog, &mut design, params.armor_layers);

        if !self.accept(&design) {
            return;
        }

        if self.reporter.report(catalog, &design, self.accepted) {
            self.accepted += 1;
        }
    }

    fn accept(&self, design: &Design) -> bool {
        let slots = self.catalog.slots();
        let params = self.params;

        let small_vectoring =
            design.count(slots.engine_d30) + design.count(slots.engine_nk25);
        match params.engine_parity {
            EngineParity::Any => {}
            EngineParity::Even => {
                if small_vectoring % 2 != 0 {
                    return false;
                }
            }
            EngineParity::Odd => {
                if small_vectoring % 2 == 0 {
                    return false;
                }
            }
        }

        params.twr.check(design.twr())
            && params.cost.check(design.cost)
            && params.fuel_usage.check(design.fuel_usage())
            && params.horizontal_twr.check(design.horizontal_twr())
    }
}
