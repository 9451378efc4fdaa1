use crate::maven_resolution::domain::ArtifactRef;
use crate::shared::Result;
use std::path::PathBuf;

/// PomCache port for the persistent POM cache
///
/// Unlike the in-memory cache, this tier survives between runs. Entries are
/// never invalidated; concurrent writers simply overwrite each other.
pub trait PomCache {
    /// Creates the cache root if it does not exist yet
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    fn prepare(&self) -> Result<()>;

    /// Where the POM for `artifact` is (or would be) stored
    ///
    /// # Errors
    /// Returns an error when a coordinate component is unsafe to use as a path segment
    fn locate(&self, artifact: ArtifactRef<'_>) -> Result<PathBuf>;

    /// Reads a cached POM
    ///
    /// # Returns
    /// `Ok(None)` when nothing is cached for `artifact`
    ///
    /// # Errors
    /// Returns an error if an entry exists but cannot be read
    fn load(&self, artifact: ArtifactRef<'_>) -> Result<Option<String>>;

    /// Stores a POM, creating intermediate directories, and returns the file written
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn store(&self, artifact: ArtifactRef<'_>, content: &str) -> Result<PathBuf>;
}
