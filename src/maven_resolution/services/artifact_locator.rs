use super::diagnostics::Diagnostics;
use crate::maven_resolution::domain::{RepositoryUrl, ResolvedArtifact};
use crate::maven_resolution::policies::PackagingPolicy;
use crate::ports::outbound::ArtifactProbe;

/// Picks the download URL of a resolved artifact
///
/// Without existence checking the first repository always wins, so a URL
/// is produced for every artifact whose coordinates can form one.
pub struct ArtifactLocator<'a> {
    repositories: &'a [RepositoryUrl],
    probe: &'a dyn ArtifactProbe,
    check_existence: bool,
}

impl<'a> ArtifactLocator<'a> {
    pub fn new(
        repositories: &'a [RepositoryUrl],
        probe: &'a dyn ArtifactProbe,
        check_existence: bool,
    ) -> Self {
        Self {
            repositories,
            probe,
            check_existence,
        }
    }

    pub fn locate(
        &self,
        artifact: &ResolvedArtifact,
        diagnostics: &mut Diagnostics<'_>,
    ) -> Option<String> {
        let extension = PackagingPolicy::extension_for(&artifact.packaging);

        let found = self
            .repositories
            .iter()
            .filter_map(|repository| repository.artifact_url(artifact.artifact(), extension))
            .find(|url| !self.check_existence || self.probe.exists(url));

        if found.is_none() {
            diagnostics.warn(format!(
                "WARNING: Artifact file not found in any configured repository for {} (packaging: {}).",
                artifact.gav(),
                artifact.packaging
            ));
        }
        found
    }
}
