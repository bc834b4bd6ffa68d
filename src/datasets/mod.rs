//! Fixture datasets
//!
//! Every family of records the queries run over, bundled into a single
//! read-only [`Datasets`] value. Records keep declaration order, which is the
//! iteration order every query relies on.
//!
//! # Loading
//!
//! - [`Datasets::builtin`] parses the fixtures shipped with the crate
//! - [`Datasets::load_dir`] overlays `<family>.json` / `<family>.yaml` files
//!   from a directory on top of the builtin fixtures

pub mod loader;
pub mod relational;
pub mod single;

pub use loader::FixtureFormat;
pub use relational::*;
pub use single::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dataset family; queries are grouped by the family they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Kitties,
    Clubs,
    Mods,
    Cakes,
    Classrooms,
    NationalParks,
    Breweries,
    Turing,
    Bosses,
    Astronomy,
    Ultima,
    Dinosaurs,
}

impl Family {
    pub const ALL: [Family; 12] = [
        Family::Kitties,
        Family::Clubs,
        Family::Mods,
        Family::Cakes,
        Family::Classrooms,
        Family::NationalParks,
        Family::Breweries,
        Family::Turing,
        Family::Bosses,
        Family::Astronomy,
        Family::Ultima,
        Family::Dinosaurs,
    ];

    /// Group name, also the fixture file stem
    pub fn name(&self) -> &'static str {
        match self {
            Family::Kitties => "kitties",
            Family::Clubs => "clubs",
            Family::Mods => "mods",
            Family::Cakes => "cakes",
            Family::Classrooms => "classrooms",
            Family::NationalParks => "nationalParks",
            Family::Breweries => "breweries",
            Family::Turing => "turing",
            Family::Bosses => "bosses",
            Family::Astronomy => "astronomy",
            Family::Ultima => "ultima",
            Family::Dinosaurs => "dinosaurs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All fixture datasets, loaded once and never mutated by queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasets {
    pub kitties: Vec<Kitty>,
    pub clubs: Vec<Club>,
    pub mods: Vec<ModuleStats>,
    pub cakes: Vec<Cake>,
    pub classrooms: Vec<Classroom>,
    pub national_parks: Vec<NationalPark>,
    pub breweries: Vec<Brewery>,
    pub turing: Turing,
    pub bosses: Bosses,
    pub astronomy: Astronomy,
    pub ultima: Ultima,
    pub dinosaurs: Dinosaurs,
}
