//! Single-dataset queries
//!
//! Map, filter, reduce, dedupe and sort exercises over one dataset each.
//! Inputs are borrowed read-only; every result is freshly built. Empty
//! inputs produce the identity value (empty vec, zero, empty map, `None`).

use super::primitives::{count_occurrences, sorted_by_key, unique_values, Direction};
use crate::datasets::{Beer, Brewery, Cake, Classroom, Club, Kitty, ModuleStats, NationalPark, Program};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// kitties

pub fn orange_kitty_names(kitties: &[Kitty]) -> Vec<String> {
    kitties
        .iter()
        .filter(|kitty| kitty.color == "orange")
        .map(|kitty| kitty.name.clone())
        .collect()
}

/// Oldest first; kitties of the same age keep their dataset order.
pub fn sort_by_age(kitties: &[Kitty]) -> Vec<Kitty> {
    sorted_by_key(kitties, |kitty| kitty.age, Direction::Descending)
}

/// Every kitty two years older, in dataset order.
///
/// An age that would not fit a `u32` fails with [`Error::Overflow`].
pub fn grow_up(kitties: &[Kitty]) -> Result<Vec<Kitty>> {
    kitties
        .iter()
        .map(|kitty| {
            let age = kitty
                .age
                .checked_add(2)
                .ok_or_else(|| Error::Overflow(format!("age of {}", kitty.name)))?;
            Ok(Kitty {
                age,
                ..kitty.clone()
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// clubs

/// Member name to the clubs they belong to, in club order
pub fn members_belonging_to_clubs(clubs: &[Club]) -> BTreeMap<String, Vec<String>> {
    let mut members: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for club in clubs {
        for name in &club.members {
            members
                .entry(name.clone())
                .or_default()
                .push(club.club.clone());
        }
    }
    members
}

// ---------------------------------------------------------------------------
// mods

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRatio {
    #[serde(rename = "mod")]
    pub module: u32,
    pub students_per_instructor: f64,
}

/// Students per instructor for every module.
///
/// A module without instructors fails with [`Error::DivisionByZero`].
pub fn students_per_mod(mods: &[ModuleStats]) -> Result<Vec<ModuleRatio>> {
    mods.iter()
        .map(|stats| {
            if stats.instructors == 0 {
                return Err(Error::DivisionByZero(format!(
                    "mod {} has no instructors",
                    stats.module
                )));
            }
            Ok(ModuleRatio {
                module: stats.module,
                students_per_instructor: f64::from(stats.students) / f64::from(stats.instructors),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// cakes

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CakeStock {
    pub flavor: String,
    pub in_stock: u32,
}

pub fn stock_per_cake(cakes: &[Cake]) -> Vec<CakeStock> {
    cakes
        .iter()
        .map(|cake| CakeStock {
            flavor: cake.cake_flavor.clone(),
            in_stock: cake.in_stock,
        })
        .collect()
}

pub fn only_in_stock(cakes: &[Cake]) -> Vec<Cake> {
    cakes.iter().filter(|cake| cake.in_stock > 0).cloned().collect()
}

pub fn total_inventory(cakes: &[Cake]) -> u64 {
    cakes.iter().map(|cake| u64::from(cake.in_stock)).sum()
}

/// Every topping needed across all cakes, first-seen order
pub fn all_toppings(cakes: &[Cake]) -> Vec<String> {
    unique_values(cakes.iter().flat_map(|cake| cake.toppings.iter().cloned()))
}

/// Topping to the number of cakes that need it
pub fn grocery_list(cakes: &[Cake]) -> BTreeMap<String, usize> {
    count_occurrences(cakes.iter().flat_map(|cake| cake.toppings.iter().cloned()))
}

// ---------------------------------------------------------------------------
// classrooms

pub fn fe_classrooms(classrooms: &[Classroom]) -> Vec<Classroom> {
    classrooms
        .iter()
        .filter(|room| room.program == Program::Frontend)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacities {
    pub fe_capacity: u64,
    pub be_capacity: u64,
}

pub fn total_capacities(classrooms: &[Classroom]) -> Capacities {
    classrooms
        .iter()
        .fold(Capacities::default(), |mut totals, room| {
            match room.program {
                Program::Frontend => totals.fe_capacity += u64::from(room.capacity),
                Program::Backend => totals.be_capacity += u64::from(room.capacity),
            }
            totals
        })
}

/// Smallest first; equal capacities keep their dataset order.
pub fn sort_by_capacity(classrooms: &[Classroom]) -> Vec<Classroom> {
    sorted_by_key(classrooms, |room| room.capacity, Direction::Ascending)
}

// ---------------------------------------------------------------------------
// national parks

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkVisitList {
    pub parks_to_visit: Vec<String>,
    pub parks_visited: Vec<String>,
}

pub fn park_visit_list(parks: &[NationalPark]) -> ParkVisitList {
    let (visited, to_visit): (Vec<_>, Vec<_>) = parks.iter().partition(|park| park.visited);
    ParkVisitList {
        parks_to_visit: to_visit.into_iter().map(|park| park.name.clone()).collect(),
        parks_visited: visited.into_iter().map(|park| park.name.clone()).collect(),
    }
}

/// One single-entry mapping per park: state to park name
pub fn park_in_each_state(parks: &[NationalPark]) -> Vec<BTreeMap<String, String>> {
    parks
        .iter()
        .map(|park| BTreeMap::from([(park.location.clone(), park.name.clone())]))
        .collect()
}

pub fn park_activities(parks: &[NationalPark]) -> Vec<String> {
    unique_values(parks.iter().flat_map(|park| park.activities.iter().cloned()))
}

// ---------------------------------------------------------------------------
// breweries

pub fn beer_count(breweries: &[Brewery]) -> usize {
    breweries.iter().map(|brewery| brewery.beers.len()).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreweryBeerCount {
    pub name: String,
    pub beer_count: usize,
}

pub fn brewery_beer_count(breweries: &[Brewery]) -> Vec<BreweryBeerCount> {
    breweries
        .iter()
        .map(|brewery| BreweryBeerCount {
            name: brewery.name.clone(),
            beer_count: brewery.beers.len(),
        })
        .collect()
}

/// The strongest beer across all breweries; the first one wins a tie.
pub fn highest_abv_beer(breweries: &[Brewery]) -> Option<Beer> {
    breweries
        .iter()
        .flat_map(|brewery| &brewery.beers)
        .fold(None, |best: Option<&Beer>, beer| match best {
            Some(current) if current.abv >= beer.abv => Some(current),
            _ => Some(beer),
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_approx_eq, builtin};

    fn names<'a>(values: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
        values.into_iter().map(String::as_str).collect()
    }

    #[test]
    fn test_orange_kitty_names() {
        let datasets = builtin();
        assert_eq!(orange_kitty_names(&datasets.kitties), vec!["Tiger", "Snickers"]);
    }

    #[test]
    fn test_sort_by_age_descending() {
        let datasets = builtin();
        let sorted = sort_by_age(&datasets.kitties);

        let order: Vec<(&str, u32)> = sorted.iter().map(|k| (k.name.as_str(), k.age)).collect();
        assert_eq!(order, vec![("Snickers", 8), ("Tiger", 5), ("Max", 4), ("Felicia", 2)]);
        // The dataset itself is not reordered
        assert_eq!(datasets.kitties[0].name, "Tiger");
    }

    #[test]
    fn test_grow_up_adds_two_years() {
        let datasets = builtin();
        let grown = grow_up(&datasets.kitties).unwrap();

        let ages: Vec<u32> = grown.iter().map(|k| k.age).collect();
        assert_eq!(ages, vec![7, 10, 4, 6]);
        assert_eq!(grown[2].color, "grey");
        assert_eq!(datasets.kitties[0].age, 5);
    }

    #[test]
    fn test_grow_up_age_overflow() {
        let kitties = vec![Kitty {
            name: "Methuselah".into(),
            age: u32::MAX - 1,
            color: "grey".into(),
        }];

        let err = grow_up(&kitties).unwrap_err();
        assert!(matches!(err, Error::Overflow(ref what) if what.contains("Methuselah")));
    }

    #[test]
    fn test_members_belonging_to_clubs() {
        let datasets = builtin();
        let members = members_belonging_to_clubs(&datasets.clubs);

        assert_eq!(members.len(), 9);
        assert_eq!(names(&members["Pam"]), vec!["Drama", "Band", "Astronomy", "Art", "Lit"]);
        assert_eq!(names(&members["Louisa"]), vec!["Drama", "Newspaper", "FBLA"]);
        assert_eq!(names(&members["Will"]), vec!["Newspaper", "FBLA"]);
    }

    #[test]
    fn test_students_per_mod() {
        let datasets = builtin();
        let ratios = students_per_mod(&datasets.mods).unwrap();

        let modules: Vec<u32> = ratios.iter().map(|r| r.module).collect();
        assert_eq!(modules, vec![1, 2, 3, 4]);
        for (ratio, expected) in ratios.iter().zip([9.0, 11.0, 10.0, 8.0]) {
            assert_approx_eq(ratio.students_per_instructor, expected, 1e-9);
        }
    }

    #[test]
    fn test_students_per_mod_without_instructors() {
        let mods = vec![ModuleStats {
            module: 5,
            students: 10,
            instructors: 0,
        }];
        let err = students_per_mod(&mods).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero(_)));
    }

    #[test]
    fn test_stock_per_cake() {
        let datasets = builtin();
        let stock = stock_per_cake(&datasets.cakes);

        assert_eq!(stock.len(), 6);
        assert_eq!(
            stock[0],
            CakeStock {
                flavor: "dark chocolate".into(),
                in_stock: 15
            }
        );
    }

    #[test]
    fn test_only_in_stock_preserves_order() {
        let datasets = builtin();
        let in_stock = only_in_stock(&datasets.cakes);

        let flavors: Vec<&str> = in_stock.iter().map(|c| c.cake_flavor.as_str()).collect();
        assert_eq!(flavors, vec!["dark chocolate", "yellow", "honey", "almond"]);
        assert!(in_stock.iter().all(|c| c.in_stock > 0));
    }

    #[test]
    fn test_total_inventory() {
        let datasets = builtin();
        assert_eq!(total_inventory(&datasets.cakes), 37);
        assert_eq!(total_inventory(&[]), 0);
    }

    #[test]
    fn test_totals_beyond_u32() {
        let cake = Cake {
            cake_flavor: "vanilla".into(),
            filling: None,
            frosting: "buttercream".into(),
            toppings: vec![],
            in_stock: u32::MAX,
        };
        assert_eq!(total_inventory(&[cake.clone(), cake]), 2 * u64::from(u32::MAX));

        let room = Classroom {
            room_letter: "Z".into(),
            program: Program::Backend,
            capacity: u32::MAX,
        };
        let totals = total_capacities(&[room.clone(), room]);
        assert_eq!(totals.be_capacity, 2 * u64::from(u32::MAX));
        assert_eq!(totals.fe_capacity, 0);
    }

    #[test]
    fn test_all_toppings_unique() {
        let datasets = builtin();
        assert_eq!(
            all_toppings(&datasets.cakes),
            vec![
                "dutch process cocoa",
                "toasted sugar",
                "smoked sea salt",
                "berries",
                "edible flowers",
                "honeycomb",
                "toasted almonds",
                "cherries",
            ]
        );
    }

    #[test]
    fn test_grocery_list() {
        let datasets = builtin();
        let list = grocery_list(&datasets.cakes);

        assert_eq!(list["dutch process cocoa"], 1);
        assert_eq!(list["toasted sugar"], 4);
        assert_eq!(list["smoked sea salt"], 3);
        assert_eq!(list["berries"], 3);
        assert_eq!(list["honeycomb"], 2);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_fe_classrooms() {
        let datasets = builtin();
        let rooms = fe_classrooms(&datasets.classrooms);

        let letters: Vec<&str> = rooms.iter().map(|r| r.room_letter.as_str()).collect();
        assert_eq!(letters, vec!["A", "C", "E", "G", "I"]);
    }

    #[test]
    fn test_total_capacities() {
        let datasets = builtin();
        assert_eq!(
            total_capacities(&datasets.classrooms),
            Capacities {
                fe_capacity: 142,
                be_capacity: 123
            }
        );
        assert_eq!(total_capacities(&[]), Capacities::default());
    }

    #[test]
    fn test_sort_by_capacity_is_stable() {
        let datasets = builtin();
        let sorted = sort_by_capacity(&datasets.classrooms);

        let letters: Vec<&str> = sorted.iter().map(|r| r.room_letter.as_str()).collect();
        assert_eq!(letters, vec!["H", "F", "E", "C", "J", "B", "G", "D", "A", "I"]);
    }

    #[test]
    fn test_park_visit_list() {
        let datasets = builtin();
        let list = park_visit_list(&datasets.national_parks);

        assert_eq!(list.parks_to_visit, vec!["Rocky Mountain", "Zion"]);
        assert_eq!(list.parks_visited, vec!["Yellowstone", "Acadia", "Everglades"]);
    }

    #[test]
    fn test_park_in_each_state() {
        let datasets = builtin();
        let pairs = park_in_each_state(&datasets.national_parks);

        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], BTreeMap::from([("Wyoming".to_string(), "Yellowstone".to_string())]));
        assert!(pairs.iter().all(|pair| pair.len() == 1));
    }

    #[test]
    fn test_park_activities() {
        let datasets = builtin();
        assert_eq!(
            park_activities(&datasets.national_parks),
            vec![
                "hiking",
                "snow shoeing",
                "camping",
                "white water rafting",
                "rock climbing",
                "bird watching",
                "backpacking",
                "canyoneering",
                "fishing",
                "canoeing",
            ]
        );
    }

    #[test]
    fn test_beer_counts() {
        let datasets = builtin();
        assert_eq!(beer_count(&datasets.breweries), 8);

        let counts = brewery_beer_count(&datasets.breweries);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.name.as_str(), c.beer_count)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Little Machine Brew", 2),
                ("Ratio Beerworks", 3),
                ("Wynkoop Brewing", 2),
                ("Platt Park Brewing", 1),
            ]
        );
    }

    #[test]
    fn test_highest_abv_beer() {
        let datasets = builtin();
        let beer = highest_abv_beer(&datasets.breweries).unwrap();

        assert_eq!(beer.name, "Barrel Aged Nature's Sweater");
        assert_eq!(beer.kind, "Barley Wine");
        assert_eq!(highest_abv_beer(&[]), None);
    }

    #[test]
    fn test_highest_abv_beer_tie_keeps_first() {
        let beer = |name: &str| Beer {
            name: name.into(),
            kind: "Stout".into(),
            abv: 8.0,
            ibu: 50,
        };
        let breweries = vec![
            Brewery {
                name: "One".into(),
                address: String::new(),
                beers: vec![beer("first")],
            },
            Brewery {
                name: "Two".into(),
                address: String::new(),
                beers: vec![beer("second")],
            },
        ];

        assert_eq!(highest_abv_beer(&breweries).unwrap().name, "first");
    }
}
