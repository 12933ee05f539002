//! Shipwright library entry points.
//!
//! This crate composes candidate vehicle loadouts for a fixed armament from
//! an immutable part catalog, completes them with heuristic allocators (legs,
//! fuel, power, armor), and exhaustively enumerates engine configurations,
//! reporting every candidate that satisfies the configured constraints.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod armament;
pub mod catalog;
pub mod chassis;
pub mod design;
pub mod error;
pub mod fit;
pub mod interval;
pub mod part;
pub mod search;
pub mod summary;

pub use armament::{compose_armament, ArmamentSpec};
pub use catalog::{Catalog, HullReq, Slots};
pub use chassis::ChassisLayout;
pub use design::{AreaMode, Design};
pub use error::{Error, Result};
pub use interval::{Interval, IntervalMode, IntervalParseError};
pub use part::{Part, PartId, SizeClass};
pub use search::{run_search, EngineParity, Reporter, SearchParams};
pub use summary::{DesignSummary, PartCount};
