//! Test data builders for scaled and hand-assembled datasets

use super::{character, cohort, dinosaur, human, instructor, weapon};
use crate::datasets::{Character, Datasets, Movie, Weapon};

/// Builder for a [`Datasets`] value, starting from empty families.
///
/// ```
/// use dataset_queries::testing::{weapon, character, DatasetsBuilder};
///
/// let datasets = DatasetsBuilder::new()
///     .with_weapons(vec![weapon("dagger", 2, 1)])
///     .with_characters(vec![character("Shamino", &["dagger"])])
///     .build();
/// assert_eq!(datasets.ultima.characters.len(), 1);
/// ```
#[derive(Default)]
pub struct DatasetsBuilder {
    datasets: Datasets,
}

impl DatasetsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing value, e.g. the builtin fixtures
    pub fn from_datasets(datasets: Datasets) -> Self {
        Self { datasets }
    }

    pub fn with_weapons(mut self, weapons: Vec<Weapon>) -> Self {
        self.datasets.ultima.weapons = weapons;
        self
    }

    pub fn with_characters(mut self, characters: Vec<Character>) -> Self {
        self.datasets.ultima.characters = characters;
        self
    }

    /// Synthetic relational families sized by `scale`.
    ///
    /// Every reference resolves and every module has at least one
    /// instructor, so every join query succeeds on the result. A `scale` of
    /// 0 is treated as 1.
    pub fn scaled(mut self, scale: usize) -> Self {
        let scale = scale.max(1);
        let topics: Vec<String> = (0..8).map(|t| format!("topic{t}")).collect();
        let topic = |i: usize| topics[i % topics.len()].as_str();

        self.datasets.turing.cohorts = (0..4)
            .map(|m| {
                let module = m as u32 + 1;
                cohort(1800 + module, module, 20 + module, &[topic(m), topic(m + 4)])
            })
            .collect();
        self.datasets.turing.instructors = (0..scale.max(4))
            .map(|i| instructor(&format!("instructor{i}"), (i % 4) as u32 + 1, &[topic(i)]))
            .collect();

        self.datasets.ultima.weapons = (0..scale)
            .map(|i| weapon(&format!("weapon{i}"), (i % 30) as u32, (i % 7) as u32))
            .collect();
        self.datasets.ultima.characters = (0..scale)
            .map(|i| {
                let first = format!("weapon{i}");
                let second = format!("weapon{}", (i * 7) % scale);
                character(&format!("character{i}"), &[&first, &second])
            })
            .collect();

        self.datasets.dinosaurs.dinosaurs = (0..scale)
            .map(|i| dinosaur(&format!("dino{i}"), i % 3 != 0))
            .collect();
        self.datasets.dinosaurs.humans = (0..scale)
            .map(|i| human(&format!("human{i}"), 1940 + (i % 50) as u32, "Synthetic", 0))
            .collect();
        self.datasets.dinosaurs.movies = (0..scale.div_ceil(10))
            .map(|m| {
                MovieBuilder::new(&format!("movie{m}"))
                    .director(&format!("director{}", m % 5))
                    .released(2000 + (m % 20) as u32)
                    .cast((m * 10..(m * 10 + 10).min(scale)).map(|i| format!("human{i}")))
                    .dinos((m * 10..(m * 10 + 10).min(scale)).map(|i| format!("dino{i}")))
                    .build()
            })
            .collect();
        self
    }

    pub fn build(self) -> Datasets {
        self.datasets
    }
}

/// Builder for a single [`Movie`]
pub struct MovieBuilder {
    movie: Movie,
}

impl MovieBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            movie: Movie {
                title: title.to_string(),
                director: "Unknown".to_string(),
                year_released: 2000,
                cast: Vec::new(),
                dinos: Vec::new(),
            },
        }
    }

    pub fn director(mut self, director: &str) -> Self {
        self.movie.director = director.to_string();
        self
    }

    pub fn released(mut self, year: u32) -> Self {
        self.movie.year_released = year;
        self
    }

    pub fn cast(mut self, cast: impl IntoIterator<Item = String>) -> Self {
        self.movie.cast.extend(cast);
        self
    }

    pub fn dinos(mut self, dinos: impl IntoIterator<Item = String>) -> Self {
        self.movie.dinos.extend(dinos);
        self
    }

    pub fn build(self) -> Movie {
        self.movie
    }
}
