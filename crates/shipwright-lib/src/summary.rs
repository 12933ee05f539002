//! Serializable snapshot of an accepted design, the data contract between
//! the search engine and reporting collaborators.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::design::Design;

/// One composed part with its count and total mass share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartCount {
    pub name: String,
    pub count: u32,
    pub mass: f32,
}

/// Aggregates and part counts of one accepted design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignSummary {
    /// Acceptance ordinal within the search run.
    pub index: usize,
    pub cost: i32,
    pub mass: f32,
    pub area: i32,
    pub twr: f32,
    pub horizontal_twr: f32,
    pub combat_time: f32,
    pub speed: f32,
    pub fuel_usage: f32,
    /// Non-zero part counts in catalog order.
    pub parts: Vec<PartCount>,
}

impl DesignSummary {
    /// Snapshot a design with resolved part names.
    pub fn from_design(catalog: &Catalog, design: &Design, index: usize) -> Self {
        let parts = design
            .part_counts(catalog)
            .map(|(id, count)| {
                let part = catalog.part(id);
                PartCount {
                    name: part.name.to_string(),
                    count,
                    mass: part.mass * count as f32,
                }
            })
            .collect();

        Self {
            index,
            cost: design.cost,
            mass: design.mass,
            area: design.area,
            twr: design.twr(),
            horizontal_twr: design.horizontal_twr(),
            combat_time: design.combat_time(),
            speed: design.speed(),
            fuel_usage: design.fuel_usage(),
            parts,
        }
    }
}
