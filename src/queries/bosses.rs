//! Boss and sidekick join

use crate::datasets::{Boss, Sidekick};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BossLoyalty {
    pub boss_name: String,
    pub sidekick_loyalty: u32,
}

/// Total loyalty of each boss's sidekicks, in boss order.
///
/// Sidekicks reference their boss by name. A boss nobody follows gets 0 and
/// sidekicks naming an unknown boss are not counted anywhere.
pub fn boss_loyalty(bosses: &[Boss], sidekicks: &[Sidekick]) -> Vec<BossLoyalty> {
    bosses
        .iter()
        .map(|boss| BossLoyalty {
            boss_name: boss.name.clone(),
            sidekick_loyalty: sidekicks
                .iter()
                .filter(|sidekick| sidekick.boss == boss.name)
                .map(|sidekick| sidekick.loyalty_to_boss)
                .sum(),
        })
        .collect()
}
