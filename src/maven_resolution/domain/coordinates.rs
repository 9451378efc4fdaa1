use crate::shared::error::ResolveError;
use std::fmt;

/// Depender recorded for artifacts requested directly by the caller
pub const ROOT_PROJECT: &str = "root project";

/// Scope assumed when a dependency declares none
pub const DEFAULT_SCOPE: &str = "compile";

/// Scopes recognised in the fourth field of an initial dependency string
pub const KNOWN_SCOPES: [&str; 6] = ["compile", "runtime", "provided", "test", "system", "import"];

/// NewType for the `groupId:artifactId` pair, the unit of version mediation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GavKey {
    group_id: String,
    artifact_id: String,
}

impl GavKey {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Parses a `groupId:artifactId` string such as a blacklist entry
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidCoordinate` unless the input has exactly
    /// two non-empty colon-separated parts
    pub fn parse(coordinate: &str) -> Result<Self, ResolveError> {
        let parts: Vec<&str> = coordinate.trim().split(':').collect();
        match parts.as_slice() {
            [group_id, artifact_id] if !group_id.is_empty() && !artifact_id.is_empty() => {
                Ok(Self::new(*group_id, *artifact_id))
            }
            _ => Err(ResolveError::InvalidCoordinate {
                coordinate: coordinate.to_string(),
                reason: "expected exactly two non-empty parts separated by ':'".to_string(),
            }),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for GavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Borrowed `groupId:artifactId:version` triple used for lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactRef<'a> {
    pub group_id: &'a str,
    pub artifact_id: &'a str,
    pub version: &'a str,
}

impl<'a> ArtifactRef<'a> {
    pub fn new(group_id: &'a str, artifact_id: &'a str, version: &'a str) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
        }
    }
}

impl fmt::Display for ArtifactRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A candidate awaiting POM retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
}

impl QueueEntry {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: scope.into(),
        }
    }

    pub fn key(&self) -> GavKey {
        GavKey::new(self.group_id.as_str(), self.artifact_id.as_str())
    }

    pub fn artifact(&self) -> ArtifactRef<'_> {
        ArtifactRef::new(&self.group_id, &self.artifact_id, &self.version)
    }

    /// Full `groupId:artifactId:version` string
    pub fn gav(&self) -> String {
        self.artifact().to_string()
    }
}

/// The `<parent>` reference of a POM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ParentRef {
    pub fn key(&self) -> GavKey {
        GavKey::new(self.group_id.as_str(), self.artifact_id.as_str())
    }

    /// Parent POMs are expanded like any other node, in compile scope
    pub fn into_queue_entry(self) -> QueueEntry {
        QueueEntry::new(self.group_id, self.artifact_id, self.version, DEFAULT_SCOPE)
    }
}

/// Result of parsing one initial dependency string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedParse {
    Ok(QueueEntry),
    MalformedInput(String),
}

impl SeedParse {
    /// Parses `group:artifact:version`, `group:artifact:version:scope`, or
    /// the legacy `group:artifact:packaging:version` form.
    ///
    /// A four-part string is read as carrying a scope only when its last
    /// field is a known scope name; otherwise the third field is ignored and
    /// the fourth taken as the version.
    pub fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split(':').collect();
        match parts.as_slice() {
            [group_id, artifact_id, version] => {
                SeedParse::Ok(QueueEntry::new(*group_id, *artifact_id, *version, DEFAULT_SCOPE))
            }
            [group_id, artifact_id, version, scope] if KNOWN_SCOPES.contains(scope) => {
                SeedParse::Ok(QueueEntry::new(*group_id, *artifact_id, *version, *scope))
            }
            [group_id, artifact_id, _, version] => {
                SeedParse::Ok(QueueEntry::new(*group_id, *artifact_id, *version, DEFAULT_SCOPE))
            }
            _ => SeedParse::MalformedInput(input.to_string()),
        }
    }
}
