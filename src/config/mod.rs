// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Values given on
//! the command line take precedence over the file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "vidplay";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Catalog to load; the built-in catalog is used when unset.
    pub catalog_file: Option<PathBuf>,
    /// Log destination; logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub colour: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_file: None,
            log_file: None,
            log_level: "warn".to_string(),
            colour: true,
        }
    }
}

/// Command-line values that override the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_colour: bool,
}

impl AppConfig {
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(path) = overrides.catalog_file {
            self.catalog_file = Some(path);
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.no_colour {
            self.colour = false;
        }
        self
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_what_is_given() {
        let config = AppConfig::default().apply(Overrides {
            catalog_file: Some(PathBuf::from("videos.txt")),
            no_colour: true,
            ..Overrides::default()
        });

        assert_eq!(config.catalog_file, Some(PathBuf::from("videos.txt")));
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, "warn");
        assert!(!config.colour);
    }

    #[test]
    fn no_overrides_is_identity() {
        let config = AppConfig::default();
        assert_eq!(config.clone().apply(Overrides::default()), config);
    }
}
