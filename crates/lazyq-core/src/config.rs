//! Tutorial configuration that the CLI can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialConfig {
    /// Load products from this file instead of the built-in sample catalog.
    pub catalog_path: Option<String>,

    /// Run only these sections (case-insensitive). Empty means all.
    pub sections: Vec<String>,

    pub output: OutputFormat,

    /// Separator the AGGREGATE section joins product names with.
    pub name_separator: String,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            sections: Vec::new(),
            output: OutputFormat::Text,
            name_separator: "/ ".to_string(),
        }
    }
}

impl TutorialConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `LAZYQ_CATALOG`: catalog file path
    /// - `LAZYQ_SECTIONS`: comma-separated section names
    /// - `LAZYQ_OUTPUT`: `text` or `json`
    /// - `LAZYQ_NAME_SEPARATOR`: separator for the AGGREGATE section
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TutorialConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("LAZYQ_CATALOG") {
            if !s.trim().is_empty() {
                cfg.catalog_path = Some(s);
            }
        }

        if let Some(s) = lookup("LAZYQ_SECTIONS") {
            cfg.sections = parse_section_list(&s);
        }

        if let Some(s) = lookup("LAZYQ_OUTPUT") {
            if let Ok(v) = s.parse::<OutputFormat>() {
                cfg.output = v;
            }
        }

        if let Some(s) = lookup("LAZYQ_NAME_SEPARATOR") {
            cfg.name_separator = s;
        }

        cfg
    }

    /// True when `name` should run under the current section filter.
    pub fn wants_section(&self, name: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

pub fn parse_section_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
