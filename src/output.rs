//! Rendering query results

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Output format for query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render(&self, value: &Value) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json() {
        let value = json!({"bossName": "Scar", "sidekickLoyalty": 16});
        let rendered = OutputFormat::Json.render(&value).unwrap();

        assert!(rendered.contains("\"bossName\": \"Scar\""));
        assert_eq!(serde_json::from_str::<Value>(&rendered).unwrap(), value);
    }

    #[test]
    fn test_render_yaml() {
        let rendered = OutputFormat::Yaml.render(&json!({"totalDamage": 113})).unwrap();
        assert_eq!(rendered.trim(), "totalDamage: 113");
    }

    #[test]
    fn test_format_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let wrapper: Wrapper = toml::from_str("format = \"yaml\"").unwrap();
        assert_eq!(wrapper.format, OutputFormat::Yaml);
        assert_eq!(OutputFormat::default().to_string(), "json");
    }
}
