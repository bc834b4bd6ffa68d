//! Fixture loading from the embedded defaults or a directory on disk

use super::{Datasets, Family};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const KITTIES: &str = include_str!("../../fixtures/kitties.json");
const CLUBS: &str = include_str!("../../fixtures/clubs.json");
const MODS: &str = include_str!("../../fixtures/mods.json");
const CAKES: &str = include_str!("../../fixtures/cakes.json");
const CLASSROOMS: &str = include_str!("../../fixtures/classrooms.json");
const NATIONAL_PARKS: &str = include_str!("../../fixtures/nationalParks.json");
const BREWERIES: &str = include_str!("../../fixtures/breweries.json");
const TURING: &str = include_str!("../../fixtures/turing.json");
const BOSSES: &str = include_str!("../../fixtures/bosses.json");
const ASTRONOMY: &str = include_str!("../../fixtures/astronomy.json");
const ULTIMA: &str = include_str!("../../fixtures/ultima.json");
const DINOSAURS: &str = include_str!("../../fixtures/dinosaurs.json");

/// On-disk encoding of a fixture file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// Extensions probed for each family, in priority order
    const EXTENSIONS: [(&'static str, FixtureFormat); 3] = [
        ("json", FixtureFormat::Json),
        ("yaml", FixtureFormat::Yaml),
        ("yml", FixtureFormat::Yaml),
    ];

    fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        match self {
            FixtureFormat::Json => Ok(serde_json::from_str(content)?),
            FixtureFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

fn builtin_source(family: Family) -> &'static str {
    match family {
        Family::Kitties => KITTIES,
        Family::Clubs => CLUBS,
        Family::Mods => MODS,
        Family::Cakes => CAKES,
        Family::Classrooms => CLASSROOMS,
        Family::NationalParks => NATIONAL_PARKS,
        Family::Breweries => BREWERIES,
        Family::Turing => TURING,
        Family::Bosses => BOSSES,
        Family::Astronomy => ASTRONOMY,
        Family::Ultima => ULTIMA,
        Family::Dinosaurs => DINOSAURS,
    }
}

/// Find `<family>.json`, `<family>.yaml` or `<family>.yml` in `dir`
pub fn find_fixture_file(dir: &Path, family: Family) -> Option<(PathBuf, FixtureFormat)> {
    FixtureFormat::EXTENSIONS
        .iter()
        .map(|(ext, format)| (dir.join(format!("{}.{ext}", family.name())), *format))
        .find(|(path, _)| path.is_file())
}

impl Datasets {
    /// The fixtures shipped with the crate
    pub fn builtin() -> Result<Self> {
        let mut datasets = Datasets::default();
        for family in Family::ALL {
            datasets.replace(family, FixtureFormat::Json, builtin_source(family))?;
        }
        Ok(datasets)
    }

    /// Load fixtures from `dir`, keeping the builtin family for any file
    /// the directory does not provide.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "Fixtures directory not found: {}",
                dir.display()
            )));
        }

        let mut datasets = Self::builtin()?;
        for family in Family::ALL {
            match find_fixture_file(dir, family) {
                Some((path, format)) => {
                    debug!("Loading {} fixtures from {}", family, path.display());
                    let content =
                        fs::read_to_string(&path).map_err(|e| Error::fixture(&path, e))?;
                    datasets
                        .replace(family, format, &content)
                        .map_err(|e| Error::fixture(&path, e))?;
                }
                None => trace!("No {} fixture in {}, using builtin", family, dir.display()),
            }
        }

        Ok(datasets)
    }

    /// Replace one family with the records parsed from `content`
    pub fn replace(&mut self, family: Family, format: FixtureFormat, content: &str) -> Result<()> {
        match family {
            Family::Kitties => self.kitties = format.parse(content)?,
            Family::Clubs => self.clubs = format.parse(content)?,
            Family::Mods => self.mods = format.parse(content)?,
            Family::Cakes => self.cakes = format.parse(content)?,
            Family::Classrooms => self.classrooms = format.parse(content)?,
            Family::NationalParks => self.national_parks = format.parse(content)?,
            Family::Breweries => self.breweries = format.parse(content)?,
            Family::Turing => self.turing = format.parse(content)?,
            Family::Bosses => self.bosses = format.parse(content)?,
            Family::Astronomy => self.astronomy = format.parse(content)?,
            Family::Ultima => self.ultima = format.parse(content)?,
            Family::Dinosaurs => self.dinosaurs = format.parse(content)?,
        }
        Ok(())
    }
}
