//! Part catalog: the immutable, keyed table of components and hull resolution.
//!
//! The catalog is built once at process start and passed by reference into
//! every component that needs lookups. Parts are compared and counted through
//! stable [`PartId`]s assigned at build time.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::part::{Part, PartId, SizeClass};

/// Structural backing requirement resolved from a part's size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullReq {
    /// The part must be backed by this hull part at the same count.
    Backed(PartId),
    /// The part carries its own structure; nothing extra is composed.
    SelfSufficient,
}

/// Well-known part ids resolved once at catalog build.
///
/// Allocators and reporters reach for these instead of doing string lookups in
/// the hot enumeration path. A missing slot means a broken catalog and fails
/// the build with an internal-defect error.
#[derive(Debug, Clone, Copy)]
pub struct Slots {
    pub bridge: PartId,
    pub ammo_small: PartId,
    pub ammo_large: PartId,
    pub armor_plate: PartId,
    pub fire_suppressor: PartId,
    pub tank_small: PartId,
    pub tank_large: PartId,
    pub gen_small: PartId,
    pub gen_large: PartId,
    pub hull_half: PartId,
    pub hull_unit: PartId,
    pub hull_long: PartId,
    pub hull_quad: PartId,
    pub hull_corner: PartId,
    pub engine_d30: PartId,
    pub engine_nk25: PartId,
    pub engine_d30s: PartId,
    pub engine_rd51: PartId,
    pub engine_rd59: PartId,
    /// Leg parts by size class, smallest first.
    pub legs: [PartId; 4],
}

/// Immutable part catalog with name-keyed lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<Part>,
    by_name: HashMap<&'static str, PartId>,
    slots: Slots,
}

//   name       mass        power   size     price    extras
static PART_TABLE: &[Part] = &[
    Part::new("g_37mm", 51.1427, -0.7, SizeClass::Quad, 3000).ammo(-1),
    Part::new("g_57mm", 51.1427, -0.7, SizeClass::Quad, 2000).ammo(-1),
    Part::new("g_100mm", 51.1427, -1.0, SizeClass::Quad, 2000).ammo(-1),
    Part::new("g_130mm", 51.1427, -1.0, SizeClass::Quad, 4000).ammo(-1),
    Part::new("g_180mm", 81.2129, -1.8, SizeClass::Quad, 4000).ammo(-2),
    Part::new("g_180mmx2", 81.2129, -2.4, SizeClass::Quad, 6000).ammo(-4),
    Part::new("ammo_1x2", 107.239, -0.8, SizeClass::Long, 500).ammo(1),
    Part::new("ammo_2x2", 197.294, -1.6, SizeClass::Quad, 1000).ammo(2),
    Part::new("arm_1x1", 64.3224, 0.0, SizeClass::Unit, 200),
    Part::new("bridge", 25.8142, 0.0, SizeClass::Quad, 0),
    Part::new("e_d30", 22.5695, -1.2, SizeClass::Corner, 1000).thrust(12.5, -0.15),
    Part::new("e_nk25", 30.0763, -1.3, SizeClass::Corner, 1500).thrust(18.0, -0.3125),
    Part::new("e_d30s", 18.5879, -0.2, SizeClass::Quad, 1000)
        .thrust(21.0, -0.2)
        .fixed_mount(),
    Part::new("e_rd51", 164.241, -2.5, SizeClass::Big, 6000)
        .thrust(110.0, -1.0)
        .fixed_mount(),
    Part::new("e_rd59", 149.318, -2.2, SizeClass::Big, 5500).thrust(85.0, -0.85),
    Part::new("tank_1x2", 37.3006, 0.0, SizeClass::Long, 10).fuel(40.0),
    Part::new("tank_4x4", 430.659, 0.0, SizeClass::Big, 80).fuel(450.0),
    Part::new("pwr_1x2", 43.3147, 2.8, SizeClass::Long, 150),
    Part::new("pwr_2x2", 93.252, 6.1, SizeClass::Quad, 200),
    Part::new("fire", 31.3276, 0.0, SizeClass::Long, 300),
    Part::new("h_05", 5.687, 0.0, SizeClass::Structural, 5),
    Part::new("h_1x1", 5.687, 0.0, SizeClass::Structural, 5),
    Part::new("h_1x2", 11.2612, 0.0, SizeClass::Structural, 10),
    Part::new("h_2x2", 25.8142, 0.0, SizeClass::Structural, 20),
    Part::new("h_cor", 25.8142, 0.0, SizeClass::Structural, 20),
    Part::new("leg_1", 2.83583, -0.05, SizeClass::Structural, 50),
    Part::new("leg_2", 17.9923, -0.1, SizeClass::Corner, 100),
    Part::new("leg_3", 39.334, -0.2, SizeClass::Corner, 200),
    Part::new("leg_4", 84.092, -0.35, SizeClass::Corner, 400),
];

impl Catalog {
    /// Build the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_parts(PART_TABLE)
    }

    fn from_parts(table: &[Part]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(table.len());
        for (index, part) in table.iter().enumerate() {
            let id = PartId(index as u16);
            if by_name.insert(part.name, id).is_some() {
                return Err(Error::DuplicatePart {
                    name: part.name.to_string(),
                });
            }
        }

        let slot = |name: &'static str| -> Result<PartId> {
            by_name.get(name).copied().ok_or(Error::MissingPart {
                name: name.to_string(),
            })
        };

        let slots = Slots {
            bridge: slot("bridge")?,
            ammo_small: slot("ammo_1x2")?,
            ammo_large: slot("ammo_2x2")?,
            armor_plate: slot("arm_1x1")?,
            fire_suppressor: slot("fire")?,
            tank_small: slot("tank_1x2")?,
            tank_large: slot("tank_4x4")?,
            gen_small: slot("pwr_1x2")?,
            gen_large: slot("pwr_2x2")?,
            hull_half: slot("h_05")?,
            hull_unit: slot("h_1x1")?,
            hull_long: slot("h_1x2")?,
            hull_quad: slot("h_2x2")?,
            hull_corner: slot("h_cor")?,
            engine_d30: slot("e_d30")?,
            engine_nk25: slot("e_nk25")?,
            engine_d30s: slot("e_d30s")?,
            engine_rd51: slot("e_rd51")?,
            engine_rd59: slot("e_rd59")?,
            legs: [slot("leg_1")?, slot("leg_2")?, slot("leg_3")?, slot("leg_4")?],
        };

        Ok(Self {
            parts: table.to_vec(),
            by_name,
            slots,
        })
    }

    /// Number of cataloged parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Resolve a part by id. Ids are only ever minted by this catalog, so an
    /// out-of-range id is a composition bug, not user input.
    pub fn part(&self, id: PartId) -> &Part {
        &self.parts[id.index()]
    }

    /// Well-known part ids.
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Look up a part id by exact name.
    pub fn lookup(&self, name: &str) -> Option<PartId> {
        self.by_name.get(name).copied()
    }

    /// Iterate parts in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PartId, &Part)> {
        self.parts
            .iter()
            .enumerate()
            .map(|(index, part)| (PartId(index as u16), part))
    }

    /// Resolve the structural hull requirement for a part's size class.
    ///
    /// Panics when called for a structural part; those back other parts and
    /// are never themselves backed.
    pub fn hull_for(&self, id: PartId) -> HullReq {
        let part = self.part(id);
        match part.size {
            SizeClass::Unit => HullReq::Backed(self.slots.hull_unit),
            SizeClass::Long => HullReq::Backed(self.slots.hull_long),
            SizeClass::Quad => HullReq::Backed(self.slots.hull_quad),
            SizeClass::Corner => HullReq::Backed(self.slots.hull_corner),
            SizeClass::Big => HullReq::SelfSufficient,
            SizeClass::Structural => {
                panic!("no hull mapping for structural part '{}'", part.name)
            }
        }
    }

    /// Sorted gun names without the `g_` prefix, as accepted in armament tokens.
    pub fn gun_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .parts
            .iter()
            .filter(|part| part.is_gun())
            .map(|part| part.name.trim_start_matches("g_"))
            .collect();
        names.sort_unstable();
        names
    }

    /// Look up a gun by its user-facing name (without the `g_` prefix).
    pub fn lookup_gun(&self, name: &str) -> Result<PartId> {
        let qualified = format!("g_{name}");
        self.lookup(&qualified).ok_or_else(|| Error::UnknownPart {
            name: name.to_string(),
            suggestions: self.suggest_guns(name),
        })
    }

    fn suggest_guns(&self, name: &str) -> Vec<String> {
        const MIN_SIMILARITY: f64 = 0.75;
        let mut scored: Vec<(f64, &str)> = self
            .gun_names()
            .into_iter()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= MIN_SIMILARITY)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(3)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
