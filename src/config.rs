//! Per-calendar configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CalconvError, CalconvResult};

/// Mapping from converter alias to its declaration, as configured per calendar.
pub type AliasTable = BTreeMap<String, ConverterDecl>;

/// A configured converter entry.
///
/// `converter` names the implementing type; `events` maps event kinds to
/// the convertible-event profile the factory hands to that converter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterDecl {
    pub converter: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, String>,
}

impl ConverterDecl {
    /// Declaration pointing at a converter type, with no event mappings.
    pub fn new(converter: &str) -> Self {
        ConverterDecl {
            converter: converter.to_string(),
            events: BTreeMap::new(),
        }
    }
}

/// Configuration stored in a calendar's config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct CalendarConfig {
    #[serde(default)]
    pub converters: AliasTable,
}

impl CalendarConfig {
    /// Table of registered converter aliases.
    pub fn registered_converters(&self) -> &AliasTable {
        &self.converters
    }

    /// Load config from a TOML file; a missing file yields the default.
    pub fn load(path: &Path) -> CalconvResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: CalendarConfig =
                toml::from_str(&content).map_err(|e| CalconvError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config as pretty TOML.
    pub fn save(&self, path: &Path) -> CalconvResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalconvError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }
}
