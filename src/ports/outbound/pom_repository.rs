use crate::shared::Result;

/// PomRepository port for downloading POM descriptors
///
/// This port abstracts the remote Maven repository. The resolution core
/// builds the repository-layout URL and walks the configured repositories
/// itself, so an implementation only performs a single retrieval.
pub trait PomRepository {
    /// Retrieves the POM text at `url`
    ///
    /// # Arguments
    /// * `url` - Full URL of a `.pom` file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request times out or the connection fails
    /// - The repository answers with a non-success status
    /// - The body is not valid text
    fn fetch_pom(&self, url: &str) -> Result<String>;
}
