//! Pure dataset queries
//!
//! Every function in this module is:
//! - Pure: no I/O, no logging, no shared state
//! - Read-only: datasets are borrowed and never modified
//! - Deterministic: the same datasets always produce equal results
//!
//! Single-dataset queries live in [`single`]; the joins across datasets are
//! grouped by family. Joins that follow a foreign key fail with
//! [`crate::error::Error::ReferenceNotFound`] when the key does not resolve.

pub mod astronomy;
pub mod bosses;
pub mod dinosaurs;
pub mod index;
pub mod primitives;
pub mod single;
pub mod turing;
pub mod ultima;

pub use astronomy::{constellations_stars_exist_in, stars_by_color, stars_in_constellations};
pub use bosses::{boss_loyalty, BossLoyalty};
pub use dinosaurs::{
    actors_ages_in_movies, average_age_per_movie, count_awesome_dinosaurs, uncast_actors,
    ActorAges, UncastActor,
};
pub use index::Index;
pub use primitives::{count_occurrences, group_by, sorted_by_key, unique_values, Direction};
pub use turing::{
    curriculum_per_teacher, modules_per_teacher, students_for_each_instructor,
    students_per_instructor, InstructorStudents,
};
pub use ultima::{characters_by_total, total_damage, WeaponTotals};
