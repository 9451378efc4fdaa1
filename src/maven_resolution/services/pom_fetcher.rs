use super::diagnostics::Diagnostics;
use crate::maven_resolution::domain::{version, ArtifactRef, RepositoryUrl};
use crate::ports::outbound::{PomCache, PomRepository};
use std::collections::HashMap;

/// Extension of POM files in the repository layout
const POM_EXTENSION: &str = "pom";

/// Three-tier POM lookup: memory, then disk, then remote repositories
///
/// The memory tier lives only as long as the fetcher, which is created per
/// resolution run. Only successful lookups are remembered.
pub struct PomFetcher<'a> {
    repositories: &'a [RepositoryUrl],
    remote: &'a dyn PomRepository,
    disk_cache: Option<&'a dyn PomCache>,
    memory: HashMap<String, String>,
}

impl<'a> PomFetcher<'a> {
    pub fn new(
        repositories: &'a [RepositoryUrl],
        remote: &'a dyn PomRepository,
        disk_cache: Option<&'a dyn PomCache>,
    ) -> Self {
        Self {
            repositories,
            remote,
            disk_cache,
            memory: HashMap::new(),
        }
    }

    /// Returns the POM text for `artifact`, or `None` when no tier has it.
    ///
    /// A miss in every remote repository is recorded as a warning. A version
    /// that names no concrete release (`LATEST`, `RELEASE`, `SNAPSHOT`) is a
    /// silent miss.
    pub fn fetch(
        &mut self,
        artifact: ArtifactRef<'_>,
        diagnostics: &mut Diagnostics<'_>,
    ) -> Option<String> {
        let gav = artifact.to_string();
        if let Some(content) = self.memory.get(&gav) {
            return Some(content.clone());
        }

        if let Some(content) = self.load_from_disk(artifact, diagnostics) {
            self.memory.insert(gav, content.clone());
            return Some(content);
        }

        if version::clean(artifact.version).is_none() {
            return None;
        }

        for repository in self.repositories {
            let Some(url) = repository.artifact_url(artifact, POM_EXTENSION) else {
                continue;
            };
            let Ok(content) = self.remote.fetch_pom(&url) else {
                continue;
            };

            self.save_to_disk(artifact, &content, diagnostics);
            diagnostics.info(&format!("INFO: Fetched POM from remote: {}", url));
            self.memory.insert(gav, content.clone());
            return Some(content);
        }

        diagnostics.warn(format!(
            "WARNING: Failed to fetch POM for {} from any configured repository.",
            gav
        ));
        None
    }

    fn load_from_disk(
        &self,
        artifact: ArtifactRef<'_>,
        diagnostics: &mut Diagnostics<'_>,
    ) -> Option<String> {
        let cache = self.disk_cache?;
        let path = cache.locate(artifact).ok()?;

        match cache.load(artifact) {
            Ok(Some(content)) => {
                diagnostics.info(&format!(
                    "INFO: Loaded POM from disk cache: {}",
                    path.display()
                ));
                Some(content)
            }
            Ok(None) => None,
            Err(e) => {
                diagnostics.warn(format!(
                    "WARNING: Could not read POM from disk cache {}: {}",
                    path.display(),
                    e
                ));
                None
            }
        }
    }

    fn save_to_disk(&self, artifact: ArtifactRef<'_>, content: &str, diagnostics: &mut Diagnostics<'_>) {
        let Some(cache) = self.disk_cache else {
            return;
        };

        match cache.store(artifact, content) {
            Ok(path) => diagnostics.info(&format!(
                "INFO: Saved POM to disk cache: {}",
                path.display()
            )),
            Err(e) => diagnostics.warn(format!(
                "WARNING: Could not write POM for {} to disk cache: {}",
                artifact, e
            )),
        }
    }
}
