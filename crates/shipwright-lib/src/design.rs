//! Design state: the mutable accumulator of aggregate physical properties.
//!
//! A design starts from the bridge, has the fixed armament composed onto it,
//! and is then cloned once per search candidate and extended in place by the
//! allocators. Aggregate totals are always the sum of `count x per-unit
//! attribute` over composed parts.

use crate::catalog::{Catalog, HullReq};
use crate::part::PartId;

/// Scale applied to thrust/mass so ratios land in the target unit system.
pub const TWR_SCALE: f32 = 100.0;
/// Cruising speed per unit of thrust-to-weight ratio.
pub const SPEED_PER_TWR: f32 = 90.0;
/// Combat fuel draw relative to cruise; usage outside combat is this many
/// times lower.
pub const COMBAT_FUEL_MULTIPLIER: f32 = 20.0;

const SECONDS_PER_HOUR: f32 = 3600.0;

/// Whether composing a part contributes its footprint area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaMode {
    Disabled,
    Enabled,
}

/// Aggregate physical and economic state of one candidate design.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub mass: f32,
    /// Net power balance; negative means generation is still required.
    pub power: f32,
    pub fuel: f32,
    /// Fuel consumption flow, stored as a positive magnitude.
    pub fuel_flow: f32,
    pub thrust: f32,
    /// Thrust excluding fixed vertical-only mounts.
    pub horizontal_thrust: f32,
    pub area: i32,
    pub cost: i32,
    /// Corner pieces still free to host hidden fuel tanks.
    pub sneaky_corners_left: i32,
    counts: Vec<u32>,
}

impl Design {
    /// Create a design containing only the bridge.
    ///
    /// The bridge carries its own structure and is the one quad-class part
    /// composed without a backing hull.
    pub fn new(catalog: &Catalog) -> Self {
        let mut design = Self {
            mass: 0.0,
            power: 0.0,
            fuel: 0.0,
            fuel_flow: 0.0,
            thrust: 0.0,
            horizontal_thrust: 0.0,
            area: 0,
            cost: 0,
            sneaky_corners_left: 0,
            counts: vec![0; catalog.len()],
        };
        design.add(catalog, catalog.slots().bridge, 1, AreaMode::Enabled);
        design
    }

    /// Current count of a composed part.
    pub fn count(&self, id: PartId) -> u32 {
        self.counts[id.index()]
    }

    /// Iterate non-zero part counts in catalog order.
    pub fn part_counts<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (PartId, u32)> + 'a {
        catalog
            .iter()
            .map(|(id, _)| (id, self.count(id)))
            .filter(|(_, count)| *count > 0)
    }

    /// Compose `count` units of a part onto the design.
    ///
    /// Panics when area mode is enabled for a part whose size class has no
    /// defined area; that is a composition bug, not user input.
    pub fn add(&mut self, catalog: &Catalog, id: PartId, count: u32, amode: AreaMode) {
        let part = catalog.part(id);
        let n = count as f32;

        if amode == AreaMode::Enabled {
            let area = part
                .size
                .area()
                .unwrap_or_else(|| panic!("area mode enabled for area-less part '{}'", part.name));
            self.area += area * count as i32;
        }

        self.mass += part.mass * n;
        self.power += part.power * n;
        self.cost += part.price * count as i32;
        if part.fuel >= 0.0 {
            self.fuel += part.fuel * n;
        } else {
            self.fuel_flow -= part.fuel * n;
        }
        self.thrust += part.thrust * n;
        if !part.fixed_mount {
            self.horizontal_thrust += part.thrust * n;
        }

        if count > 0 {
            self.counts[id.index()] += count;
            if id == catalog.slots().hull_corner {
                self.sneaky_corners_left += count as i32;
            }
        }
    }

    /// Compose a part with footprint enabled, plus its resolved hull at the
    /// same count with footprint disabled.
    pub fn add_with_hull(&mut self, catalog: &Catalog, id: PartId, count: u32) {
        self.add(catalog, id, count, AreaMode::Enabled);
        match catalog.hull_for(id) {
            HullReq::Backed(hull) => self.add(catalog, hull, count, AreaMode::Disabled),
            HullReq::SelfSufficient => {}
        }
    }

    /// Thrust-to-weight ratio, scaled to the target unit system.
    pub fn twr(&self) -> f32 {
        self.thrust * TWR_SCALE / self.mass
    }

    /// Thrust-to-weight ratio counting only vectoring mounts.
    pub fn horizontal_twr(&self) -> f32 {
        self.horizontal_thrust * TWR_SCALE / self.mass
    }

    /// Combat endurance: fuel capacity over consumption flow.
    pub fn combat_time(&self) -> f32 {
        self.fuel / self.fuel_flow
    }

    /// Cruising speed, a fixed multiple of the thrust-to-weight ratio.
    pub fn speed(&self) -> f32 {
        self.twr() * SPEED_PER_TWR
    }

    /// Hourly fuel usage at the combat duty cycle.
    pub fn fuel_usage(&self) -> f32 {
        SECONDS_PER_HOUR * COMBAT_FUEL_MULTIPLIER * self.fuel_flow / self.speed()
    }
}
