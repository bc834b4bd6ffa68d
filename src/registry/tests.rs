use super::*;
use crate::testing::{builtin, character, weapon, DatasetsBuilder};
use std::collections::HashSet;

#[test]
fn test_builtin_queries_are_unique() {
    let queries = builtin_queries();
    let keys: HashSet<(Family, &str)> = queries.iter().map(|q| (q.group, q.name)).collect();

    assert_eq!(queries.len(), 33);
    assert_eq!(keys.len(), queries.len());
}

#[test]
fn test_every_family_has_queries() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    assert_eq!(registry.groups(), Family::ALL.to_vec());
}

#[test]
fn test_group_lists_queries_in_order() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    let names: Vec<&str> = registry
        .group("turing")
        .unwrap()
        .into_iter()
        .map(|q| q.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "studentsForEachInstructor",
            "studentsPerInstructor",
            "modulesPerTeacher",
            "curriculumPerTeacher",
        ]
    );
}

#[test]
fn test_run_total_damage() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    assert_eq!(registry.run("ultima", "totalDamage").unwrap(), serde_json::json!(113));
}

#[test]
fn test_run_boss_loyalty() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    let value = registry.run("bosses", "bossLoyalty").unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"bossName": "Jafar", "sidekickLoyalty": 3},
            {"bossName": "Ursula", "sidekickLoyalty": 20},
            {"bossName": "Scar", "sidekickLoyalty": 16},
        ])
    );
}

#[test]
fn test_run_unknown_group() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    let err = registry.run("pets", "totalDamage").unwrap_err();
    assert!(matches!(err, Error::UnknownGroup(ref g) if g == "pets"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_run_unknown_query() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    let err = registry.run("ultima", "totalRange").unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownQuery { ref group, ref query } if group == "ultima" && query == "totalRange"
    ));
}

#[test]
fn test_run_propagates_query_errors() {
    let datasets = DatasetsBuilder::new()
        .with_weapons(vec![weapon("dagger", 2, 1)])
        .with_characters(vec![character("Avatar", &["trident"])])
        .build();
    let registry = QueryRegistry::new(&datasets);

    let err = registry.run("ultima", "totalDamage").unwrap_err();
    crate::testing::assert_reference_not_found(&err, "weapons", "trident");
}

#[test]
fn test_run_all_covers_every_query() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    let all = registry.run_all().unwrap();
    let groups = all.as_object().unwrap();
    assert_eq!(groups.len(), 12);

    let total: usize = groups.values().map(|g| g.as_object().unwrap().len()).sum();
    assert_eq!(total, 33);
    assert_eq!(all["ultima"]["totalDamage"], serde_json::json!(113));
    assert_eq!(all["breweries"]["findHighestAbvBeer"]["name"], "Barrel Aged Nature's Sweater");
}

#[test]
fn test_run_is_idempotent() {
    let datasets = builtin();
    let registry = QueryRegistry::new(&datasets);

    for def in registry.list() {
        let first = registry.run(def.group.name(), def.name).unwrap();
        let second = registry.run(def.group.name(), def.name).unwrap();
        assert_eq!(first, second, "{}.{}", def.group, def.name);
    }
    assert_eq!(datasets, builtin());
}

#[test]
fn test_highest_abv_beer_without_beers_is_null() {
    let datasets = DatasetsBuilder::new().build();
    let registry = QueryRegistry::new(&datasets);

    assert_eq!(
        registry.run("breweries", "findHighestAbvBeer").unwrap(),
        Value::Null
    );
}
