use super::coordinates::{ArtifactRef, GavKey};

/// Packaging assumed until a POM says otherwise
pub const DEFAULT_PACKAGING: &str = "jar";

/// Packaging recorded for artifacts only known as parent POMs
pub const PARENT_PACKAGING: &str = "pom";

/// The currently-winning version of one `groupId:artifactId`
///
/// Entries are mutated in place whenever a higher version wins and are
/// never removed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub key: GavKey,
    pub version: String,
    pub packaging: String,
    pub first_depender: String,
}

impl ResolvedArtifact {
    pub fn new(
        key: GavKey,
        version: impl Into<String>,
        packaging: impl Into<String>,
        first_depender: impl Into<String>,
    ) -> Self {
        Self {
            key,
            version: version.into(),
            packaging: packaging.into(),
            first_depender: first_depender.into(),
        }
    }

    pub fn artifact(&self) -> ArtifactRef<'_> {
        ArtifactRef::new(self.key.group_id(), self.key.artifact_id(), &self.version)
    }

    /// Full `groupId:artifactId:version` string, the output sort key
    pub fn gav(&self) -> String {
        self.artifact().to_string()
    }
}

/// A resolved artifact together with its download location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArtifact {
    pub artifact: ResolvedArtifact,
    pub download_url: Option<String>,
}

impl LocatedArtifact {
    pub fn artifact_exists(&self) -> bool {
        self.download_url.is_some()
    }
}
