//! Part definitions: the immutable components a design is composed from.

use serde::Serialize;

/// Stable identifier for a part, assigned in catalog registration order.
///
/// Ids are plain indices into the catalog's part table, which makes per-part
/// count bookkeeping on a design a flat vector instead of a map keyed by
/// pointer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PartId(pub(crate) u16);

impl PartId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Footprint size class of a part.
///
/// The size class determines both the part's footprint area and which
/// structural hull part, if any, must back it when composed onto a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeClass {
    /// 1x1 footprint, backed by a 1x1 hull.
    Unit,
    /// 1x2 footprint, backed by a 1x2 hull.
    Long,
    /// 2x2 footprint, backed by a 2x2 hull.
    Quad,
    /// Corner-mounted 2x2 footprint, backed by the corner hull piece.
    Corner,
    /// 4x4 footprint, self-sufficient (carries its own structure).
    Big,
    /// No footprint of its own; hulls, legs and fittings. Never backed.
    Structural,
}

impl SizeClass {
    /// Footprint area in grid cells, or `None` for structural parts.
    pub fn area(self) -> Option<i32> {
        match self {
            SizeClass::Unit => Some(1),
            SizeClass::Long => Some(2),
            SizeClass::Quad => Some(4),
            SizeClass::Corner => Some(4),
            SizeClass::Big => Some(16),
            SizeClass::Structural => None,
        }
    }
}

/// An immutable cataloged component.
///
/// Sign conventions: `power` is negative for consumers and positive for
/// generators; `fuel` is positive for storage capacity and negative for a
/// consumption flow rate; `ammo` is negative for guns (rounds consumed) and
/// positive for magazines (rounds stored).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub name: &'static str,
    pub mass: f32,
    pub power: f32,
    pub size: SizeClass,
    pub price: i32,
    pub thrust: f32,
    pub fuel: f32,
    pub ammo: i32,
    /// Vertical-only mount: thrust excluded from horizontal accounting.
    pub fixed_mount: bool,
}

impl Part {
    pub(crate) const fn new(
        name: &'static str,
        mass: f32,
        power: f32,
        size: SizeClass,
        price: i32,
    ) -> Self {
        Self {
            name,
            mass,
            power,
            size,
            price,
            thrust: 0.0,
            fuel: 0.0,
            ammo: 0,
            fixed_mount: false,
        }
    }

    pub(crate) const fn thrust(mut self, thrust: f32, fuel_flow: f32) -> Self {
        self.thrust = thrust;
        self.fuel = fuel_flow;
        self
    }

    pub(crate) const fn fuel(mut self, fuel: f32) -> Self {
        self.fuel = fuel;
        self
    }

    pub(crate) const fn ammo(mut self, ammo: i32) -> Self {
        self.ammo = ammo;
        self
    }

    pub(crate) const fn fixed_mount(mut self) -> Self {
        self.fixed_mount = true;
        self
    }

    /// Whether this part is a gun: it consumes ammunition when firing.
    pub fn is_gun(&self) -> bool {
        self.ammo < 0
    }
}
