use super::artifact_locator::ArtifactLocator;
use super::diagnostics::Diagnostics;
use super::pom_fetcher::PomFetcher;
use super::pom_parser::{self, DependencyFilter, PropertyMap};
use crate::maven_resolution::domain::{
    ArtifactRef, LocatedArtifact, ParentRef, PomDocument, PomElement, QueueEntry, RepositoryUrl,
    ResolutionState, SeedParse, DEFAULT_PACKAGING, PARENT_PACKAGING, ROOT_PROJECT,
};
use crate::maven_resolution::policies::MediationPolicy;
use crate::ports::outbound::{ArtifactProbe, PomCache, PomRepository, ProgressReporter};
use crate::shared::Result;

/// Options fixed for the duration of a run
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Remote repositories in priority order
    pub repositories: Vec<RepositoryUrl>,
    pub filter: DependencyFilter,
    pub check_artifact_existence: bool,
}

/// Breadth-first transitive resolution with "highest version wins" mediation
///
/// An engine performs exactly one run. Everything it accumulates (winners,
/// the queued set, fetched POMs, warnings) is dropped with it, so callers
/// build a fresh engine per request.
pub struct ResolutionEngine<'a> {
    settings: &'a EngineSettings,
    disk_cache: Option<&'a dyn PomCache>,
    fetcher: PomFetcher<'a>,
    locator: ArtifactLocator<'a>,
    state: ResolutionState,
    diagnostics: Diagnostics<'a>,
    processed: usize,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(
        settings: &'a EngineSettings,
        remote: &'a dyn PomRepository,
        probe: &'a dyn ArtifactProbe,
        disk_cache: Option<&'a dyn PomCache>,
        reporter: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            settings,
            disk_cache,
            fetcher: PomFetcher::new(&settings.repositories, remote, disk_cache),
            locator: ArtifactLocator::new(
                &settings.repositories,
                probe,
                settings.check_artifact_existence,
            ),
            state: ResolutionState::new(),
            diagnostics: Diagnostics::new(reporter),
            processed: 0,
        }
    }

    /// Resolves `seeds` and returns every winner with its download location,
    /// sorted by `groupId:artifactId:version`
    ///
    /// # Errors
    /// Returns an error only when the disk cache directory cannot be
    /// prepared. Per-node failures are recorded as warnings.
    pub fn run(&mut self, seeds: &[String]) -> Result<Vec<LocatedArtifact>> {
        if let Some(cache) = self.disk_cache {
            cache.prepare()?;
        }

        self.seed(seeds);

        while let Some(entry) = self.state.pop() {
            self.process(entry);
        }

        Ok(self.finalize())
    }

    pub fn warnings(&self) -> &[String] {
        self.diagnostics.warnings()
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.diagnostics.into_warnings()
    }

    /// Initial dependencies bypass the scope filter but not the blacklist
    fn seed(&mut self, seeds: &[String]) {
        for seed in seeds {
            match SeedParse::parse(seed) {
                SeedParse::Ok(entry) => {
                    if self.settings.filter.is_blacklisted(&entry.key()) {
                        continue;
                    }
                    self.mediate(entry, ROOT_PROJECT, DEFAULT_PACKAGING);
                }
                SeedParse::MalformedInput(original) => self.diagnostics.warn(format!(
                    "WARNING: Skipping malformed initial dependency: {}",
                    original
                )),
            }
        }
    }

    fn mediate(&mut self, candidate: QueueEntry, introduced_by: &str, packaging: &str) {
        if let Some(conflict) =
            MediationPolicy::mediate(&mut self.state, candidate, introduced_by, packaging)
        {
            self.diagnostics.warn(conflict);
        }
    }

    fn process(&mut self, entry: QueueEntry) {
        // overtaken by a higher version while queued
        if !self.state.is_current_winner(&entry) {
            return;
        }

        self.processed += 1;
        self.diagnostics.progress(
            self.processed,
            self.processed + self.state.pending(),
            &entry.gav(),
        );

        let Some(content) = self.fetcher.fetch(entry.artifact(), &mut self.diagnostics) else {
            return;
        };

        if let Err(e) = self.expand(&entry, &content) {
            let message = match e.downcast_ref::<roxmltree::Error>() {
                Some(parse_error) => format!(
                    "ERROR: Error parsing POM for {}:{}: {}",
                    entry.key(),
                    entry.version,
                    parse_error
                ),
                None => format!(
                    "ERROR: An unexpected error occurred for {}:{}: {}",
                    entry.key(),
                    entry.version,
                    e
                ),
            };
            self.diagnostics.warn(message);
        }
    }

    fn expand(&mut self, entry: &QueueEntry, content: &str) -> Result<()> {
        let document = PomDocument::parse(content)?;
        let root = document.root();

        if let Some(packaging) = pom_parser::parse_packaging(&root) {
            self.state.update_packaging(entry, &packaging);
        }

        let depender = entry.gav();
        let properties = match pom_parser::parse_parent_ref(&root) {
            Some(parent) => self.inherit_properties(parent, &root, &depender)?,
            None => pom_parser::parse_properties(&root),
        };

        let dependencies =
            pom_parser::parse_dependencies(&root, &properties, &self.settings.filter);
        for dependency in dependencies {
            self.mediate(dependency, &depender, DEFAULT_PACKAGING);
        }
        Ok(())
    }

    /// Mediates the parent like any other dependency, then layers this POM's
    /// properties over those of the winning parent version. Only the direct
    /// parent contributes; grandparents are not consulted.
    fn inherit_properties<E: PomElement>(
        &mut self,
        parent: ParentRef,
        root: &E,
        depender: &str,
    ) -> Result<PropertyMap> {
        let own = pom_parser::parse_properties(root);
        let key = parent.key();
        if self.settings.filter.is_blacklisted(&key) {
            return Ok(own);
        }

        self.mediate(parent.into_queue_entry(), depender, PARENT_PACKAGING);

        let Some(parent_version) = self.state.winner(&key).map(|winner| winner.version.clone())
        else {
            return Ok(own);
        };
        let parent_artifact = ArtifactRef::new(key.group_id(), key.artifact_id(), &parent_version);
        let Some(parent_content) = self.fetcher.fetch(parent_artifact, &mut self.diagnostics)
        else {
            return Ok(own);
        };

        let parent_document = PomDocument::parse(&parent_content)?;
        let mut properties = pom_parser::parse_properties(&parent_document.root());
        properties.extend(own);
        Ok(properties)
    }

    fn finalize(&mut self) -> Vec<LocatedArtifact> {
        let mut located = Vec::with_capacity(self.state.resolved_count());
        for artifact in self.state.resolved() {
            let download_url = self.locator.locate(artifact, &mut self.diagnostics);
            located.push(LocatedArtifact {
                artifact: artifact.clone(),
                download_url,
            });
        }
        located.sort_by_cached_key(|entry| entry.artifact.gav());
        located
    }
}
