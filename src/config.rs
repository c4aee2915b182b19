use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::scan::{ScanOptions, DEFAULT_RELATED_TERMS, DEFAULT_TERM};

/// Document scanned when no path is given on the command line
pub const DEFAULT_DOCUMENT: &str = "Big Data-EarthScape_Climate_Agency.docx";

/// Scan configuration for rsrscan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Document path, relative to the working directory
    pub document: PathBuf,
    /// Substring marking a paragraph as RSR data
    pub term: String,
    /// Keywords searched for when no RSR data is found
    pub related_terms: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            term: DEFAULT_TERM.to_string(),
            related_terms: DEFAULT_RELATED_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from config directory
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                let content = fs::read_to_string(&config_path)?;
                return Self::from_toml(&content);
            }
        }

        Ok(ScanConfig::default())
    }

    /// Load configuration, falling back to defaults when the file is unusable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring unreadable config file");
            ScanConfig::default()
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to config directory, returning where it was written
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(config_path) = Self::get_config_path() else {
            return Ok(None);
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(Some(config_path))
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rsrscan").join("config.toml"))
    }

    /// Initialize default config file
    pub fn init_default() -> Result<Option<PathBuf>> {
        ScanConfig::default().save()
    }

    /// Apply command-line values on top of the loaded configuration
    pub fn with_overrides(
        mut self,
        document: Option<PathBuf>,
        term: Option<String>,
        related_terms: Vec<String>,
    ) -> Self {
        if let Some(document) = document {
            self.document = document;
        }
        if let Some(term) = term {
            self.term = term;
        }
        if !related_terms.is_empty() {
            self.related_terms = related_terms;
        }
        self
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(&self.term, &self.related_terms)
    }
}
