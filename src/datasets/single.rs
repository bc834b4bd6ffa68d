//! Record types for the single-dataset families

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kitty {
    pub name: String,
    pub age: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub club: String,
    pub members: Vec<String>,
}

/// Head counts for one Turing module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStats {
    #[serde(rename = "mod")]
    pub module: u32,
    pub students: u32,
    pub instructors: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cake {
    pub cake_flavor: String,
    pub filling: Option<String>,
    pub frosting: String,
    pub toppings: Vec<String>,
    pub in_stock: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "FE")]
    Frontend,
    #[serde(rename = "BE")]
    Backend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub room_letter: String,
    pub program: Program,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalPark {
    pub name: String,
    /// State the park is in
    pub location: String,
    pub visited: bool,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brewery {
    pub name: String,
    pub address: String,
    pub beers: Vec<Beer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub abv: f64,
    pub ibu: u32,
}
