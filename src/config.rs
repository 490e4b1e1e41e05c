//! Configuration loading and management
//!
//! Handles parsing of `biblio.toml` configuration files. Configuration only
//! covers the peripheral glue (where the CSV data files live); the catalog
//! itself needs none.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the config file looked up next to the data.
pub const CONFIG_FILE: &str = "biblio.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data file locations
    #[serde(default)]
    pub data: DataConfig,
}

/// Locations of the comma-delimited data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the data files
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Author records file name
    #[serde(default = "default_authors")]
    pub authors: String,

    /// Patron records file name
    #[serde(default = "default_patrons")]
    pub patrons: String,

    /// Book records file name
    #[serde(default = "default_books")]
    pub books: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_authors() -> String {
    "authors.csv".to_string()
}

fn default_patrons() -> String {
    "patrons.csv".to_string()
}

fn default_books() -> String {
    "books.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            authors: default_authors(),
            patrons: default_patrons(),
            books: default_books(),
        }
    }
}

impl DataConfig {
    /// Default file names under an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn authors_path(&self) -> PathBuf {
        self.dir.join(&self.authors)
    }

    pub fn patrons_path(&self) -> PathBuf {
        self.dir.join(&self.patrons)
    }

    pub fn books_path(&self) -> PathBuf {
        self.dir.join(&self.books)
    }
}

impl Config {
    /// Parses an explicit config file.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads `biblio.toml` from the current directory if present, falling
    /// back to defaults. Invalid TOML falls back too rather than blocking
    /// every command.
    pub fn load_or_default() -> Config {
        let path = PathBuf::from(CONFIG_FILE);
        if !path.exists() {
            return Config::default();
        }
        Config::load_file(&path).unwrap_or_default()
    }
}
