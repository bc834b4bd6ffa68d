//! Constellation and star queries
//!
//! Stars and constellations reference each other in both directions: a
//! constellation lists the names of its stars, and a star names the
//! constellation it belongs to. The two directions do not always agree. A
//! star such as Hadar may carry no constellation while still being bright
//! enough to be in the star list, and constellations list faint stars the
//! star list does not carry.

use super::index::Index;
use super::primitives::group_by;
use crate::datasets::{Constellation, Star};
use std::collections::BTreeMap;

/// Stars listed by any constellation, following the constellations' lists.
///
/// Names a constellation lists but the star dataset lacks are skipped.
pub fn stars_in_constellations(constellations: &[Constellation], stars: &[Star]) -> Vec<Star> {
    let catalog = Index::build("stars", stars, |star| star.name.as_str());
    constellations
        .iter()
        .flat_map(|constellation| &constellation.stars)
        .filter_map(|name| catalog.get(name))
        .cloned()
        .collect()
}

pub fn stars_by_color(stars: &[Star]) -> BTreeMap<String, Vec<Star>> {
    group_by(stars.iter().cloned(), |star| star.color.clone())
}

/// Constellation named by each star, in star order and with repeats.
///
/// Stars without a constellation are left out.
pub fn constellations_stars_exist_in(stars: &[Star]) -> Vec<String> {
    stars
        .iter()
        .filter(|star| !star.constellation.is_empty())
        .map(|star| star.constellation.clone())
        .collect()
}
