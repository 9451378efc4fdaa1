//! Configuration file support for mvn-resolve.
//!
//! Provides YAML-based configuration through `mvn-resolve.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use mvn_resolve::application::dto::OutputFormat;
use mvn_resolve::maven_resolution::domain::{GavKey, RepositoryUrl};
use mvn_resolve::shared::error::ResolveError;
use mvn_resolve::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use mvn_resolve::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "mvn-resolve.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line options take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Initial dependencies, resolved before the ones given on the command line
    pub dependencies: Option<Vec<String>>,
    pub repositories: Option<Vec<String>>,
    pub scopes: Option<Vec<String>>,
    pub blacklist: Option<Vec<String>>,
    pub pom_cache_dir: Option<PathBuf>,
    pub ignore_optional: Option<bool>,
    pub exclude_runtime: Option<bool>,
    pub check_artifact_existence: Option<bool>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn config_error(path: &Path, reason: String, hint: &str) -> anyhow::Error {
    ResolveError::ConfigError {
        path: path.to_path_buf(),
        reason,
        hint: hint.to_string(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(ref repositories) = config.repositories {
        if repositories.is_empty() {
            return Err(config_error(
                path,
                "repositories must not be empty".to_string(),
                "Remove the key to use the default repositories, or list at least one URL.",
            ));
        }
        for (i, url) in repositories.iter().enumerate() {
            if let Err(e) = RepositoryUrl::new(url) {
                return Err(config_error(
                    path,
                    format!("repositories[{}] '{}' is invalid: {}", i, url, e),
                    "Repository URLs must be absolute http:// or https:// URLs.",
                ));
            }
        }
    }

    if let Some(ref blacklist) = config.blacklist {
        for (i, entry) in blacklist.iter().enumerate() {
            if GavKey::parse(entry).is_err() {
                return Err(config_error(
                    path,
                    format!("blacklist[{}] '{}' is not groupId:artifactId", i, entry),
                    "Each blacklist entry must look like \"org.jetbrains.kotlin:kotlin-stdlib\".",
                ));
            }
        }
    }

    if let Some(ref scopes) = config.scopes {
        if let Some(i) = scopes.iter().position(|scope| scope.trim().is_empty()) {
            return Err(config_error(
                path,
                format!("scopes[{}] must not be empty", i),
                "Use Maven scope names such as compile or runtime.",
            ));
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            return Err(config_error(path, e, "Set format to json or markdown."));
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
