//! Test helper functions and custom assertions

pub mod assertions;

use crate::datasets::Family;
use std::path::Path;

/// Write `content` as the fixture file for `family` in `dir`
pub fn write_fixture(
    dir: &Path,
    family: Family,
    extension: &str,
    content: &str,
) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join(format!("{}.{extension}", family.name())), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("fixtures");
        write_fixture(&dir, Family::NationalParks, "yaml", "[]").unwrap();

        assert!(dir.join("nationalParks.yaml").exists());
    }
}
