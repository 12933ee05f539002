//! Explicit chassis layout specification.

use crate::error::{Error, Result};

/// Leg counts across the four leg size classes plus the leg-group count.
///
/// Either fully unset (the leg allocator picks a heuristic layout) or
/// explicit. A non-zero leg-group count with an all-zero leg list is a usage
/// error and is rejected before any search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChassisLayout {
    /// Number of leg groups, each anchored to a corner piece.
    pub leg_groups: i32,
    /// Per-size-class leg counts, smallest class first.
    pub legs: [i32; 4],
}

impl ChassisLayout {
    /// Parse a `groups:l1,l2,l3,l4` specification. Trailing leg counts may be
    /// omitted and default to zero.
    pub fn parse(text: &str) -> Result<Self> {
        let fail = |reason: &str| Error::InvalidChassis {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        let (groups_text, legs_text) = text
            .split_once(':')
            .ok_or_else(|| fail("expected <groups>:<l1>,<l2>,<l3>,<l4>"))?;

        let leg_groups: i32 = groups_text
            .parse()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| fail("leg-group count must be a non-negative integer"))?;

        let mut legs = [0i32; 4];
        if !legs_text.is_empty() {
            for (index, token) in legs_text.split(',').enumerate() {
                if index >= legs.len() {
                    return Err(fail("at most four leg size classes"));
                }
                legs[index] = token
                    .parse()
                    .ok()
                    .filter(|n| *n >= 0)
                    .ok_or_else(|| fail("leg counts must be non-negative integers"))?;
            }
        }

        let layout = Self { leg_groups, legs };
        layout.validate()?;
        Ok(layout)
    }

    /// Total leg count across all size classes.
    pub fn total_legs(&self) -> i32 {
        self.legs.iter().sum()
    }

    /// Whether no explicit layout was supplied at all.
    pub fn is_unset(&self) -> bool {
        self.leg_groups == 0 && self.total_legs() == 0
    }

    /// Leg-group count to compose; an omitted group count with a non-empty
    /// leg list defaults to two groups.
    pub fn effective_groups(&self) -> i32 {
        if self.leg_groups == 0 && self.total_legs() > 0 {
            2
        } else {
            self.leg_groups
        }
    }

    /// Reject a non-zero leg-group count with no legs to put in it.
    pub fn validate(&self) -> Result<()> {
        if self.leg_groups > 0 && self.total_legs() == 0 {
            return Err(Error::InvalidChassis {
                text: format!("{}:{:?}", self.leg_groups, self.legs),
                reason: "leg groups requested but all leg counts are zero".to_string(),
            });
        }
        Ok(())
    }
}
