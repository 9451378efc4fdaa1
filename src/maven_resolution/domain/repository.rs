use super::coordinates::ArtifactRef;
use super::version;
use crate::shared::error::ResolveError;
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Repositories consulted when none are configured, in priority order
pub const DEFAULT_REPOSITORIES: [&str; 3] = [
    "https://dl.google.com/dl/android/maven2/",
    "https://maven.google.com/",
    "https://repo.maven.apache.org/maven2/",
];

/// NewType for a remote repository base URL, normalized to end in exactly one `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryUrl(String);

impl RepositoryUrl {
    /// Validates and normalizes a repository base URL
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidRepositoryUrl` if the URL does not parse
    /// or does not use the http/https scheme
    pub fn new(raw: &str) -> std::result::Result<Self, ResolveError> {
        let trimmed = raw.trim();
        let parsed = url::Url::parse(trimmed).map_err(|e| ResolveError::InvalidRepositoryUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ResolveError::InvalidRepositoryUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self(format!("{}/", trimmed.trim_end_matches('/'))))
    }

    /// The repositories used when the caller configures none
    pub fn defaults() -> Vec<Self> {
        DEFAULT_REPOSITORIES
            .iter()
            .filter_map(|url| Self::new(url).ok())
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds `{repo}{layout path}.{extension}` for an artifact
    ///
    /// Returns `None` when the version cannot name a concrete file or a
    /// coordinate component is unsafe to place in a URL.
    pub fn artifact_url(&self, artifact: ArtifactRef<'_>, extension: &str) -> Option<String> {
        let path = layout_path(artifact).ok()?;
        Some(format!("{}{}.{}", self.0, path, extension))
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository layout path without extension:
/// `{group/as/path}/{artifact}/{version}/{artifact}-{version}`
///
/// The version is cleaned of range syntax first.
///
/// # Errors
/// Returns an error when the version is an unresolvable keyword or any
/// component fails validation
pub fn layout_path(artifact: ArtifactRef<'_>) -> Result<String> {
    let Some(version) = version::clean(artifact.version) else {
        anyhow::bail!(
            "Cannot construct artifact URL for {}:{} with unresolvable version '{}'.",
            artifact.group_id,
            artifact.artifact_id,
            artifact.version
        );
    };
    validate_components(artifact.group_id, artifact.artifact_id, &version)?;

    let group_path = artifact.group_id.replace('.', "/");
    Ok(format!(
        "{}/{}/{}/{}-{}",
        group_path, artifact.artifact_id, version, artifact.artifact_id, version
    ))
}

/// On-disk location of a cached POM under `root`, mirroring the repository
/// layout. The raw (uncleaned) version is used as the directory name.
///
/// # Errors
/// Returns an error when any component would escape the cache directory
pub fn pom_cache_path(root: &Path, artifact: ArtifactRef<'_>) -> Result<PathBuf> {
    validate_components(artifact.group_id, artifact.artifact_id, artifact.version)?;

    let mut path = root.to_path_buf();
    for segment in artifact.group_id.split('.') {
        path.push(segment);
    }
    path.push(artifact.artifact_id);
    path.push(artifact.version);
    path.push(format!("{}-{}.pom", artifact.artifact_id, artifact.version));
    Ok(path)
}

fn validate_components(group_id: &str, artifact_id: &str, version: &str) -> Result<()> {
    validate_path_component(group_id, "groupId")?;
    validate_path_component(artifact_id, "artifactId")?;
    validate_path_component(version, "version")?;
    Ok(())
}
