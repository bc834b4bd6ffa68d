//! Movie, cast and dinosaur joins
//!
//! Movies reference humans (cast) and dinosaurs by name. A person's age in a
//! movie is the release year minus their birth year.

use super::index::Index;
use crate::datasets::{Dinosaur, Human, Movie};
use crate::error::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

fn people(humans: &[Human]) -> Index<'_, Human> {
    Index::build("humans", humans, |human| human.name.as_str())
}

/// Awesome dinosaurs appearing in each movie, keyed by title
pub fn count_awesome_dinosaurs(
    movies: &[Movie],
    dinosaurs: &[Dinosaur],
) -> Result<BTreeMap<String, usize>> {
    let species = Index::build("dinosaurs", dinosaurs, |dino| dino.name.as_str());
    movies
        .iter()
        .map(|movie| -> Result<(String, usize)> {
            let mut awesome = 0;
            for name in &movie.dinos {
                if species.resolve(name)?.is_awesome {
                    awesome += 1;
                }
            }
            Ok((movie.title.clone(), awesome))
        })
        .collect()
}

/// Director to title to the average cast age in the release year.
///
/// Averages are floored, also when negative. A movie with no cast averages
/// to 0.
pub fn average_age_per_movie(
    movies: &[Movie],
    humans: &[Human],
) -> Result<BTreeMap<String, BTreeMap<String, i64>>> {
    let people = people(humans);
    let mut by_director: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();

    for movie in movies {
        let mut total = 0i64;
        for name in &movie.cast {
            total += movie.age_of(people.resolve(name)?);
        }
        let average = match movie.cast.len() as i64 {
            0 => 0,
            count => total.div_euclid(count),
        };

        by_director
            .entry(movie.director.clone())
            .or_default()
            .insert(movie.title.clone(), average);
    }

    Ok(by_director)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UncastActor {
    pub name: String,
    pub nationality: String,
    pub imdb_star_meter_rating: u32,
}

/// Humans cast in no movie, sorted by nationality.
///
/// The sort is stable, so humans sharing a nationality keep dataset order.
pub fn uncast_actors(movies: &[Movie], humans: &[Human]) -> Vec<UncastActor> {
    let cast: HashSet<&str> = movies
        .iter()
        .flat_map(|movie| movie.cast.iter().map(String::as_str))
        .collect();

    let mut uncast: Vec<UncastActor> = humans
        .iter()
        .filter(|human| !cast.contains(human.name.as_str()))
        .map(|human| UncastActor {
            name: human.name.clone(),
            nationality: human.nationality.clone(),
            imdb_star_meter_rating: human.imdb_star_meter_rating,
        })
        .collect();
    uncast.sort_by(|a, b| a.nationality.cmp(&b.nationality));
    uncast
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorAges {
    pub name: String,
    pub ages: Vec<i64>,
}

/// Ages of every cast human across the movies they appear in.
///
/// Humans keep dataset order and are listed only if cast at least once;
/// ages follow the order of the movie list.
pub fn actors_ages_in_movies(movies: &[Movie], humans: &[Human]) -> Result<Vec<ActorAges>> {
    let people = people(humans);
    let mut ages: HashMap<&str, Vec<i64>> = HashMap::new();

    for movie in movies {
        for name in &movie.cast {
            let human = people.resolve(name)?;
            ages.entry(human.name.as_str())
                .or_default()
                .push(movie.age_of(human));
        }
    }

    Ok(humans
        .iter()
        .filter_map(|human| {
            ages.remove(human.name.as_str()).map(|ages| ActorAges {
                name: human.name.clone(),
                ages,
            })
        })
        .collect())
}
