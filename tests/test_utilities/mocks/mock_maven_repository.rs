use mvn_resolve::maven_resolution::domain::ArtifactRef;
use mvn_resolve::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// In-memory Maven repository serving POMs and artifact files by URL
///
/// Clones share the request log, so a test can hand one clone to the use
/// case and inspect the other afterwards.
#[derive(Default, Clone)]
pub struct MockMavenRepository {
    poms: HashMap<String, String>,
    artifacts: HashSet<String>,
    fetched: Arc<Mutex<Vec<String>>>,
    probed: Arc<Mutex<Vec<String>>>,
}

impl MockMavenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn url(repository: &str, coordinate: &str, extension: &str) -> String {
        let parts: Vec<&str> = coordinate.split(':').collect();
        let [group_id, artifact_id, version] = parts[..] else {
            panic!("expected group:artifact:version, got {}", coordinate);
        };
        RepositoryUrl::new(repository)
            .unwrap()
            .artifact_url(ArtifactRef::new(group_id, artifact_id, version), extension)
            .unwrap()
    }

    /// Serves `content` as the POM of `coordinate` from `repository`
    pub fn with_pom(mut self, repository: &str, coordinate: &str, content: &str) -> Self {
        self.poms
            .insert(Self::url(repository, coordinate, "pom"), content.to_string());
        self
    }

    /// Makes the artifact file of `coordinate` exist in `repository`
    pub fn with_artifact(mut self, repository: &str, coordinate: &str, extension: &str) -> Self {
        self.artifacts.insert(Self::url(repository, coordinate, extension));
        self
    }

    /// Every URL requested with GET, in order
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn fetch_count(&self, fragment: &str) -> usize {
        self.fetched_urls()
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }

    pub fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl PomRepository for MockMavenRepository {
    fn fetch_pom(&self, url: &str) -> Result<String> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.poms
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Repository returned status code 404 Not Found for {}", url))
    }
}

impl ArtifactProbe for MockMavenRepository {
    fn exists(&self, url: &str) -> bool {
        self.probed.lock().unwrap().push(url.to_string());
        self.artifacts.contains(url)
    }
}

/// Builds a POM document
///
/// `dependencies` entries are `group:artifact:version[:scope[:optional]]`;
/// an empty version omits the `<version>` element.
pub fn pom(packaging: Option<&str>, parent: Option<&str>, properties: &[(&str, &str)], dependencies: &[&str]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <modelVersion>4.0.0</modelVersion>\n",
    );

    if let Some(parent) = parent {
        let parts: Vec<&str> = parent.split(':').collect();
        xml.push_str(&format!(
            "  <parent>\n    <groupId>{}</groupId>\n    <artifactId>{}</artifactId>\n    <version>{}</version>\n  </parent>\n",
            parts[0], parts[1], parts[2]
        ));
    }

    if let Some(packaging) = packaging {
        xml.push_str(&format!("  <packaging>{}</packaging>\n", packaging));
    }

    if !properties.is_empty() {
        xml.push_str("  <properties>\n");
        for (name, value) in properties {
            xml.push_str(&format!("    <{0}>{1}</{0}>\n", name, value));
        }
        xml.push_str("  </properties>\n");
    }

    if !dependencies.is_empty() {
        xml.push_str("  <dependencies>\n");
        for dependency in dependencies {
            let parts: Vec<&str> = dependency.split(':').collect();
            xml.push_str("    <dependency>\n");
            xml.push_str(&format!("      <groupId>{}</groupId>\n", parts[0]));
            xml.push_str(&format!("      <artifactId>{}</artifactId>\n", parts[1]));
            if !parts[2].is_empty() {
                xml.push_str(&format!("      <version>{}</version>\n", parts[2]));
            }
            if let Some(scope) = parts.get(3) {
                xml.push_str(&format!("      <scope>{}</scope>\n", scope));
            }
            if parts.get(4) == Some(&"optional") {
                xml.push_str("      <optional>true</optional>\n");
            }
            xml.push_str("    </dependency>\n");
        }
        xml.push_str("  </dependencies>\n");
    }

    xml.push_str("</project>\n");
    xml
}
