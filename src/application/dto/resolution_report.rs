use crate::maven_resolution::domain::{LocatedArtifact, PARENT_PACKAGING};
use serde::Serialize;

/// One row of the resolved dependency list
///
/// Field names follow the JSON contract of the build tooling that consumes
/// the report (`groupId`, `artifactId`, snake_case for the rest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub first_depender: String,
    pub download_url: Option<String>,
    pub artifact_exists: bool,
}

impl ResolvedDependency {
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Parent-only entries carry metadata and have no binary to download
    pub fn is_metadata_only(&self) -> bool {
        self.packaging == PARENT_PACKAGING
    }
}

impl From<LocatedArtifact> for ResolvedDependency {
    fn from(located: LocatedArtifact) -> Self {
        let artifact_exists = located.artifact_exists();
        let artifact = located.artifact;
        Self {
            group_id: artifact.key.group_id().to_string(),
            artifact_id: artifact.key.artifact_id().to_string(),
            version: artifact.version,
            packaging: artifact.packaging,
            first_depender: artifact.first_depender,
            download_url: located.download_url,
            artifact_exists,
        }
    }
}

/// Marker serialized as `"status": "failed"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Failed,
}

/// Outcome of one resolution run
///
/// Serialized untagged, so the two variants produce the two JSON shapes
/// `{total_unique_dependencies, dependencies, warnings}` and
/// `{error, status, warnings}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolutionReport {
    Completed {
        total_unique_dependencies: usize,
        dependencies: Vec<ResolvedDependency>,
        warnings: Vec<String>,
    },
    Failed {
        error: String,
        status: ReportStatus,
        warnings: Vec<String>,
    },
}

impl ResolutionReport {
    /// A successful report; the count always matches the list
    pub fn completed(dependencies: Vec<ResolvedDependency>, warnings: Vec<String>) -> Self {
        Self::Completed {
            total_unique_dependencies: dependencies.len(),
            dependencies,
            warnings,
        }
    }

    /// A failed report keeping the warnings gathered before the fault
    pub fn failed(error: &anyhow::Error, warnings: Vec<String>) -> Self {
        Self::Failed {
            error: format!(
                "FATAL ERROR: An unhandled exception occurred during analysis: {:#}",
                error
            ),
            status: ReportStatus::Failed,
            warnings,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Resolved dependencies; empty for a failed report
    pub fn dependencies(&self) -> &[ResolvedDependency] {
        match self {
            Self::Completed { dependencies, .. } => dependencies,
            Self::Failed { .. } => &[],
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Self::Completed { warnings, .. } | Self::Failed { warnings, .. } => warnings,
        }
    }

    /// Dependencies a build cannot use: binaries without a download URL
    pub fn missing_artifacts(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.dependencies()
            .iter()
            .filter(|dependency| !dependency.is_metadata_only() && dependency.download_url.is_none())
    }
}
