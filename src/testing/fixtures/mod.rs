//! Record builders
//!
//! Short constructors for the records tests build by hand. Fields a query
//! never reads get neutral defaults.

pub mod builders;

use crate::datasets::{
    Boss, Character, Cohort, Constellation, Dinosaur, Human, Instructor, Movie, Sidekick, Star,
    Weapon,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn instructor(name: &str, module: u32, teaches: &[&str]) -> Instructor {
    Instructor {
        name: name.to_string(),
        module,
        teaches: strings(teaches),
    }
}

pub fn cohort(id: u32, module: u32, student_count: u32, curriculum: &[&str]) -> Cohort {
    Cohort {
        cohort: id,
        module,
        student_count,
        curriculum: strings(curriculum),
    }
}

/// A boss with no sidekicks listed; loyalty joins go through [`Sidekick::boss`].
pub fn boss(name: &str) -> Boss {
    Boss {
        name: name.to_string(),
        sidekicks: Vec::new(),
    }
}

pub fn sidekick(name: &str, boss: &str, loyalty: u32) -> Sidekick {
    Sidekick {
        name: name.to_string(),
        boss: boss.to_string(),
        loyalty_to_boss: loyalty,
    }
}

pub fn weapon(name: &str, damage: u32, range: u32) -> Weapon {
    Weapon {
        name: name.to_string(),
        damage,
        range,
    }
}

pub fn character(name: &str, weapons: &[&str]) -> Character {
    Character {
        name: name.to_string(),
        weapons: strings(weapons),
    }
}

pub fn dinosaur(name: &str, is_awesome: bool) -> Dinosaur {
    Dinosaur {
        name: name.to_string(),
        is_carnivore: false,
        is_awesome,
    }
}

pub fn human(name: &str, year_born: u32, nationality: &str, rating: u32) -> Human {
    Human {
        name: name.to_string(),
        year_born,
        nationality: nationality.to_string(),
        imdb_star_meter_rating: rating,
    }
}

pub fn movie(title: &str, director: &str, year: u32, cast: &[&str], dinos: &[&str]) -> Movie {
    Movie {
        title: title.to_string(),
        director: director.to_string(),
        year_released: year,
        cast: strings(cast),
        dinos: strings(dinos),
    }
}

/// A star with zero magnitude and distance; pass `""` for no constellation.
pub fn star(name: &str, constellation: &str, color: &str) -> Star {
    Star {
        name: name.to_string(),
        visual_magnitude: 0.0,
        constellation: constellation.to_string(),
        light_years_from_earth: 0.0,
        color: color.to_string(),
    }
}

pub fn constellation(key: &str, names: &[&str], stars: &[&str]) -> Constellation {
    Constellation {
        key: key.to_string(),
        names: strings(names),
        stars: strings(stars),
    }
}
