//! Query registry
//!
//! Every query is registered under the dataset family it reads and a
//! camelCase name, bound to a loaded [`Datasets`] bundle and evaluated to a
//! `serde_json::Value`. The CLI goes through this registry; library users can
//! call [`crate::queries`] directly.

use crate::datasets::{Datasets, Family};
use crate::error::{Error, Result};
use crate::queries;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

#[cfg(test)]
mod tests;

/// Evaluates a query against the datasets it is bound to
pub type QueryFn = fn(&Datasets) -> Result<Value>;

/// A named, zero-argument query
#[derive(Clone, Copy)]
pub struct QueryDef {
    pub group: Family,
    pub name: &'static str,
    pub description: &'static str,
    pub run: QueryFn,
}

impl std::fmt::Debug for QueryDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryDef")
            .field("group", &self.group)
            .field("name", &self.name)
            .finish()
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn query(group: Family, name: &'static str, description: &'static str, run: QueryFn) -> QueryDef {
    QueryDef {
        group,
        name,
        description,
        run,
    }
}

/// All queries in declaration order, grouped by family
pub fn builtin_queries() -> Vec<QueryDef> {
    use Family::*;

    vec![
        query(Kitties, "orangeKittyNames", "Names of the orange kitties", |d| {
            to_value(queries::single::orange_kitty_names(&d.kitties))
        }),
        query(Kitties, "sortByAge", "Kitties from oldest to youngest", |d| {
            to_value(queries::single::sort_by_age(&d.kitties))
        }),
        query(Kitties, "growUp", "Every kitty two years older", |d| {
            queries::single::grow_up(&d.kitties).and_then(to_value)
        }),
        query(Clubs, "membersBelongingToClubs", "Clubs each member belongs to", |d| {
            to_value(queries::single::members_belonging_to_clubs(&d.clubs))
        }),
        query(Mods, "studentsPerMod", "Students per instructor in each mod", |d| {
            queries::single::students_per_mod(&d.mods).and_then(to_value)
        }),
        query(Cakes, "stockPerCake", "Stock of each cake flavor", |d| {
            to_value(queries::single::stock_per_cake(&d.cakes))
        }),
        query(Cakes, "onlyInStock", "Cakes with stock left", |d| {
            to_value(queries::single::only_in_stock(&d.cakes))
        }),
        query(Cakes, "totalInventory", "Cakes in stock across flavors", |d| {
            to_value(queries::single::total_inventory(&d.cakes))
        }),
        query(Cakes, "allToppings", "Distinct toppings", |d| {
            to_value(queries::single::all_toppings(&d.cakes))
        }),
        query(Cakes, "groceryList", "Cakes needing each topping", |d| {
            to_value(queries::single::grocery_list(&d.cakes))
        }),
        query(Classrooms, "feClassrooms", "Front-end classrooms", |d| {
            to_value(queries::single::fe_classrooms(&d.classrooms))
        }),
        query(Classrooms, "totalCapacities", "Capacity per program", |d| {
            to_value(queries::single::total_capacities(&d.classrooms))
        }),
        query(Classrooms, "sortByCapacity", "Classrooms from smallest to largest", |d| {
            to_value(queries::single::sort_by_capacity(&d.classrooms))
        }),
        query(NationalParks, "getParkVisitList", "Parks visited and still to visit", |d| {
            to_value(queries::single::park_visit_list(&d.national_parks))
        }),
        query(NationalParks, "getParkInEachState", "Park in each state", |d| {
            to_value(queries::single::park_in_each_state(&d.national_parks))
        }),
        query(NationalParks, "getParkActivities", "Distinct park activities", |d| {
            to_value(queries::single::park_activities(&d.national_parks))
        }),
        query(Breweries, "getBeerCount", "Beers across breweries", |d| {
            to_value(queries::single::beer_count(&d.breweries))
        }),
        query(Breweries, "getBreweryBeerCount", "Beers per brewery", |d| {
            to_value(queries::single::brewery_beer_count(&d.breweries))
        }),
        query(Breweries, "findHighestAbvBeer", "Strongest beer", |d| {
            to_value(queries::single::highest_abv_beer(&d.breweries))
        }),
        query(Turing, "studentsForEachInstructor", "Students in each instructor's module", |d| {
            let turing = &d.turing;
            queries::students_for_each_instructor(&turing.instructors, &turing.cohorts)
                .and_then(to_value)
        }),
        query(Turing, "studentsPerInstructor", "Students per instructor by cohort", |d| {
            let turing = &d.turing;
            queries::students_per_instructor(&turing.cohorts, &turing.instructors)
                .and_then(to_value)
        }),
        query(Turing, "modulesPerTeacher", "Modules each instructor could teach", |d| {
            let turing = &d.turing;
            to_value(queries::modules_per_teacher(&turing.instructors, &turing.cohorts))
        }),
        query(Turing, "curriculumPerTeacher", "Instructors able to teach each topic", |d| {
            let turing = &d.turing;
            to_value(queries::curriculum_per_teacher(&turing.cohorts, &turing.instructors))
        }),
        query(Bosses, "bossLoyalty", "Summed sidekick loyalty per boss", |d| {
            to_value(queries::boss_loyalty(&d.bosses.bosses, &d.bosses.sidekicks))
        }),
        query(Astronomy, "starsInConstellations", "Stars listed by constellations", |d| {
            let astronomy = &d.astronomy;
            to_value(queries::stars_in_constellations(
                &astronomy.constellations,
                &astronomy.stars,
            ))
        }),
        query(Astronomy, "starsByColor", "Stars grouped by color", |d| {
            to_value(queries::stars_by_color(&d.astronomy.stars))
        }),
        query(Astronomy, "constellationsStarsExistIn", "Constellation of each star", |d| {
            to_value(queries::constellations_stars_exist_in(&d.astronomy.stars))
        }),
        query(Ultima, "totalDamage", "Damage of every carried weapon", |d| {
            queries::total_damage(&d.ultima.characters, &d.ultima.weapons).and_then(to_value)
        }),
        query(Ultima, "charactersByTotal", "Damage and range per character", |d| {
            queries::characters_by_total(&d.ultima.characters, &d.ultima.weapons)
                .and_then(to_value)
        }),
        query(Dinosaurs, "countAwesomeDinosaurs", "Awesome dinosaurs per movie", |d| {
            let dinos = &d.dinosaurs;
            queries::count_awesome_dinosaurs(&dinos.movies, &dinos.dinosaurs).and_then(to_value)
        }),
        query(Dinosaurs, "averageAgePerMovie", "Average cast age by director", |d| {
            let dinos = &d.dinosaurs;
            queries::average_age_per_movie(&dinos.movies, &dinos.humans).and_then(to_value)
        }),
        query(Dinosaurs, "uncastActors", "Humans never cast, by nationality", |d| {
            let dinos = &d.dinosaurs;
            to_value(queries::uncast_actors(&dinos.movies, &dinos.humans))
        }),
        query(Dinosaurs, "actorsAgesInMovies", "Ages of each actor across movies", |d| {
            let dinos = &d.dinosaurs;
            queries::actors_ages_in_movies(&dinos.movies, &dinos.humans).and_then(to_value)
        }),
    ]
}

/// Registry of the builtin queries bound to one [`Datasets`] bundle
pub struct QueryRegistry<'a> {
    datasets: &'a Datasets,
    queries: Vec<QueryDef>,
}

impl<'a> QueryRegistry<'a> {
    pub fn new(datasets: &'a Datasets) -> Self {
        Self {
            datasets,
            queries: builtin_queries(),
        }
    }

    /// Every query in declaration order
    pub fn list(&self) -> &[QueryDef] {
        &self.queries
    }

    /// Families that have at least one query, in declaration order
    pub fn groups(&self) -> Vec<Family> {
        let mut groups: Vec<Family> = Vec::new();
        for def in &self.queries {
            if !groups.contains(&def.group) {
                groups.push(def.group);
            }
        }
        groups
    }

    /// Queries registered under `group`
    pub fn group(&self, group: &str) -> Result<Vec<&QueryDef>> {
        let family =
            Family::from_name(group).ok_or_else(|| Error::UnknownGroup(group.to_string()))?;
        Ok(self.queries.iter().filter(|def| def.group == family).collect())
    }

    pub fn find(&self, group: &str, name: &str) -> Result<&QueryDef> {
        self.group(group)?
            .into_iter()
            .find(|def| def.name == name)
            .ok_or_else(|| Error::UnknownQuery {
                group: group.to_string(),
                query: name.to_string(),
            })
    }

    /// Evaluate one query
    pub fn run(&self, group: &str, name: &str) -> Result<Value> {
        let def = self.find(group, name)?;
        debug!("Running query {}.{}", def.group, def.name);
        let value = (def.run)(self.datasets)?;
        trace!("Query {}.{} returned {}", def.group, def.name, value);
        Ok(value)
    }

    /// Evaluate every query, keyed by group then query name.
    ///
    /// Stops at the first query that fails.
    pub fn run_all(&self) -> Result<Value> {
        let mut results = Map::new();
        for group in self.groups() {
            let mut group_results = Map::new();
            for def in self.queries.iter().filter(|def| def.group == group) {
                debug!("Running query {}.{}", def.group, def.name);
                group_results.insert(def.name.to_string(), (def.run)(self.datasets)?);
            }
            results.insert(group.name().to_string(), Value::Object(group_results));
        }
        Ok(Value::Object(results))
    }
}
