//! Armament parsing and base-design composition.
//!
//! Guns arrive as positional `count:gun-name` tokens. Each gun drags its
//! ammunition along: the rounds it consumes are packed into large magazines
//! two at a time, with a single small magazine for an odd remainder.

use crate::catalog::Catalog;
use crate::design::Design;
use crate::error::{Error, Result};

/// One parsed `count:gun-name` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmamentSpec {
    pub count: u32,
    pub name: String,
}

impl ArmamentSpec {
    /// Parse a `count:gun-name` token. The count must be positive.
    pub fn parse(token: &str) -> Result<Self> {
        let fail = || Error::InvalidArmament {
            token: token.to_string(),
        };
        let (count_text, name) = token.split_once(':').ok_or_else(fail)?;
        let count: u32 = count_text.parse().ok().filter(|n| *n > 0).ok_or_else(fail)?;
        if name.is_empty() {
            return Err(fail());
        }
        Ok(Self {
            count,
            name: name.to_string(),
        })
    }
}

/// Compose a parsed armament token onto a design.
///
/// Looks up the gun, rejects non-gun parts, and adds the gun plus the
/// magazines covering its ammunition consumption, hulls included.
pub fn compose_armament(catalog: &Catalog, design: &mut Design, spec: &ArmamentSpec) -> Result<()> {
    let gun_id = catalog.lookup_gun(&spec.name)?;
    let gun = catalog.part(gun_id);
    if !gun.is_gun() {
        return Err(Error::NotAGun {
            name: spec.name.clone(),
        });
    }

    design.add_with_hull(catalog, gun_id, spec.count);

    let rounds = (-gun.ammo) as u32 * spec.count;
    let slots = catalog.slots();
    design.add_with_hull(catalog, slots.ammo_large, rounds / 2);
    design.add_with_hull(catalog, slots.ammo_small, rounds % 2);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn parses_count_and_name() {
        let spec = ArmamentSpec::parse("4:130mm").unwrap();
        assert_eq!(spec.count, 4);
        assert_eq!(spec.name, "130mm");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["130mm", "0:130mm", "-2:130mm", "4:", "x:130mm", ""] {
            assert!(
                ArmamentSpec::parse(token).is_err(),
                "expected parse failure for {token:?}"
            );
        }
    }

    #[test]
    fn composes_gun_with_ammo_and_hulls() {
        let catalog = catalog();
        let slots = catalog.slots();
        let mut design = Design::new(&catalog);
        let spec = ArmamentSpec::parse("4:130mm").unwrap();
        compose_armament(&catalog, &mut design, &spec).unwrap();

        let gun_id = catalog.lookup("g_130mm").unwrap();
        assert_eq!(design.count(gun_id), 4);
        // 4 guns x 1 round each: two large magazines, no small remainder.
        assert_eq!(design.count(slots.ammo_large), 2);
        assert_eq!(design.count(slots.ammo_small), 0);
        // Guns and large magazines are 2x2: 4 guns + 2 magazines backed.
        assert_eq!(design.count(slots.hull_quad), 6);
    }

    #[test]
    fn odd_round_count_gets_a_small_magazine() {
        let catalog = catalog();
        let slots = catalog.slots();
        let mut design = Design::new(&catalog);
        let spec = ArmamentSpec::parse("3:37mm").unwrap();
        compose_armament(&catalog, &mut design, &spec).unwrap();
        assert_eq!(design.count(slots.ammo_large), 1);
        assert_eq!(design.count(slots.ammo_small), 1);
    }

    #[test]
    fn unknown_gun_is_a_usage_error_with_suggestions() {
        let catalog = catalog();
        let mut design = Design::new(&catalog);
        let spec = ArmamentSpec::parse("4:130").unwrap();
        let err = compose_armament(&catalog, &mut design, &spec).unwrap_err();
        assert!(matches!(err, Error::UnknownPart { .. }));
    }
}
