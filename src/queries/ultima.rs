//! Character and weapon joins
//!
//! Characters list weapons by name and may carry the same weapon more than
//! once; every listed occurrence counts.

use super::index::Index;
use crate::datasets::{Character, Weapon};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summed weapon stats of one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeaponTotals {
    pub damage: u64,
    pub range: u64,
}

impl WeaponTotals {
    fn add(self, weapon: &Weapon) -> Self {
        Self {
            damage: self.damage + u64::from(weapon.damage),
            range: self.range + u64::from(weapon.range),
        }
    }
}

fn armory(weapons: &[Weapon]) -> Index<'_, Weapon> {
    Index::build("weapons", weapons, |weapon| weapon.name.as_str())
}

/// Damage of every weapon every character carries, summed.
pub fn total_damage(characters: &[Character], weapons: &[Weapon]) -> Result<u64> {
    let armory = armory(weapons);
    characters
        .iter()
        .flat_map(|character| &character.weapons)
        .map(|name| armory.resolve(name).map(|weapon| u64::from(weapon.damage)))
        .sum()
}

/// Per character, a single-entry mapping from name to summed damage and range.
pub fn characters_by_total(
    characters: &[Character],
    weapons: &[Weapon],
) -> Result<Vec<BTreeMap<String, WeaponTotals>>> {
    let armory = armory(weapons);
    characters
        .iter()
        .map(|character| -> Result<BTreeMap<String, WeaponTotals>> {
            let totals = character
                .weapons
                .iter()
                .try_fold(WeaponTotals::default(), |totals, name| {
                    armory.resolve(name).map(|weapon| totals.add(weapon))
                })?;
            Ok(BTreeMap::from([(character.name.clone(), totals)]))
        })
        .collect()
}
