/// ArtifactProbe port for checking that an artifact file is downloadable
pub trait ArtifactProbe {
    /// Returns true when `url` answers a HEAD request with a success status.
    /// Any failure, including a timeout, counts as "not there".
    fn exists(&self, url: &str) -> bool;
}
