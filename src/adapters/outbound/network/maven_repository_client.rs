use crate::ports::outbound::{ArtifactProbe, PomRepository};
use crate::shared::security::MAX_POM_FILE_SIZE;
use crate::shared::Result;
use std::io::Read;
use std::time::Duration;

/// Timeout for POM downloads
const POM_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for artifact existence probes
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// MavenRepositoryClient adapter for plain HTTP(S) Maven repositories
///
/// This adapter implements the PomRepository and ArtifactProbe ports with a
/// blocking reqwest client. Requests are single attempts: a timeout or an
/// error status is reported to the caller, which moves on to the next
/// repository. Redirects are followed. POM bodies larger than
/// `MAX_POM_FILE_SIZE` are refused, the same limit the disk cache enforces.
pub struct MavenRepositoryClient {
    client: reqwest::blocking::Client,
}

impl MavenRepositoryClient {
    /// Creates a new client with the crate's user agent
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("mvn-resolve/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(POM_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl PomRepository for MavenRepositoryClient {
    fn fetch_pom(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).timeout(POM_TIMEOUT).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Repository returned status code {} for {}", response.status(), url);
        }

        if let Some(length) = response.content_length() {
            check_body_size(length, url)?;
        }

        read_capped_body(response, url)
    }
}

fn check_body_size(size: u64, url: &str) -> Result<()> {
    if size > MAX_POM_FILE_SIZE {
        anyhow::bail!(
            "POM at {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            url,
            size,
            MAX_POM_FILE_SIZE
        );
    }
    Ok(())
}

/// Reads at most one byte past the limit, so bodies without a
/// `Content-Length` are capped too
fn read_capped_body<R: Read>(reader: R, url: &str) -> Result<String> {
    let mut body = Vec::new();
    reader.take(MAX_POM_FILE_SIZE + 1).read_to_end(&mut body)?;
    check_body_size(body.len() as u64, url)?;

    Ok(String::from_utf8_lossy(&body).into_owned())
}

impl ArtifactProbe for MavenRepositoryClient {
    fn exists(&self, url: &str) -> bool {
        match self.client.head(url).timeout(PROBE_TIMEOUT).send() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
