//! Record types for the multi-dataset families
//!
//! Foreign keys are plain strings or numbers matching a field of the
//! referenced record: cohorts and instructors share `module`, sidekicks name
//! their boss, characters list weapon names and movies list human and
//! dinosaur names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub module: u32,
    pub teaches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub cohort: u32,
    pub module: u32,
    pub student_count: u32,
    pub curriculum: Vec<String>,
}

impl Cohort {
    /// Key used for this cohort in keyed results, e.g. `cohort1806`
    pub fn label(&self) -> String {
        format!("cohort{}", self.cohort)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turing {
    pub instructors: Vec<Instructor>,
    pub cohorts: Vec<Cohort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    #[serde(default)]
    pub sidekicks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidekick {
    pub name: String,
    /// Name of the boss, not an id
    pub boss: String,
    pub loyalty_to_boss: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bosses {
    pub bosses: Vec<Boss>,
    pub sidekicks: Vec<Sidekick>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constellation {
    pub key: String,
    pub names: Vec<String>,
    pub stars: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub name: String,
    pub visual_magnitude: f64,
    /// Empty when the star is not assigned to a constellation
    #[serde(default)]
    pub constellation: String,
    pub light_years_from_earth: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    pub constellations: Vec<Constellation>,
    pub stars: Vec<Star>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    pub range: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Weapon names; a weapon may be listed more than once
    pub weapons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ultima {
    pub weapons: Vec<Weapon>,
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub name: String,
    #[serde(default)]
    pub is_carnivore: bool,
    pub is_awesome: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Human {
    pub name: String,
    pub year_born: u32,
    pub nationality: String,
    pub imdb_star_meter_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub year_released: u32,
    pub cast: Vec<String>,
    pub dinos: Vec<String>,
}

impl Movie {
    /// Age of `human` in the year this movie was released.
    ///
    /// Negative when the human was born after the release.
    pub fn age_of(&self, human: &Human) -> i64 {
        i64::from(self.year_released) - i64::from(human.year_born)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dinosaurs {
    pub dinosaurs: Vec<Dinosaur>,
    pub humans: Vec<Human>,
    pub movies: Vec<Movie>,
}
