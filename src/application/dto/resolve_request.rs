use crate::maven_resolution::domain::{GavKey, RepositoryUrl};
use crate::shared::error::ResolveError;
use crate::shared::Result;
use std::path::PathBuf;

/// Scopes followed when the caller names none
pub const DEFAULT_SCOPES: [&str; 2] = ["compile", "runtime"];

/// ResolveRequest - Input of the dependency resolution use case
///
/// Initial dependencies are kept as raw strings: a malformed one is a
/// warning in the report, not a rejected request.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// `group:artifact:version[:scope]` strings
    pub dependencies: Vec<String>,
    /// Repositories in priority order
    pub repositories: Vec<RepositoryUrl>,
    /// Scopes whose transitive dependencies are followed
    pub include_scopes: Vec<String>,
    pub ignore_optional: bool,
    /// Drops `runtime` from `include_scopes`
    pub exclude_runtime: bool,
    pub blacklist: Vec<GavKey>,
    /// Root of the persistent POM cache, if any
    pub pom_cache_dir: Option<PathBuf>,
    /// HEAD-probe artifact URLs instead of trusting the first repository
    pub check_artifact_existence: bool,
}

impl ResolveRequest {
    /// A request with the default repositories, scopes and toggles
    pub fn new(dependencies: Vec<String>) -> Self {
        Self {
            dependencies,
            repositories: RepositoryUrl::defaults(),
            include_scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            ignore_optional: true,
            exclude_runtime: false,
            blacklist: Vec::new(),
            pom_cache_dir: None,
            check_artifact_existence: false,
        }
    }

    pub fn builder() -> ResolveRequestBuilder {
        ResolveRequestBuilder::default()
    }

    /// The include set after applying `exclude_runtime`
    pub fn effective_scopes(&self) -> Vec<String> {
        self.include_scopes
            .iter()
            .filter(|scope| !(self.exclude_runtime && scope.as_str() == "runtime"))
            .cloned()
            .collect()
    }
}

/// Builds a [`ResolveRequest`] from unvalidated strings, as they arrive
/// from the command line or the config file
#[derive(Debug, Default)]
pub struct ResolveRequestBuilder {
    dependencies: Vec<String>,
    repositories: Option<Vec<String>>,
    scopes: Option<Vec<String>>,
    ignore_optional: Option<bool>,
    exclude_runtime: bool,
    blacklist: Vec<String>,
    pom_cache_dir: Option<PathBuf>,
    check_artifact_existence: bool,
}

impl ResolveRequestBuilder {
    pub fn dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Replaces the default repositories
    pub fn repositories(mut self, repositories: Vec<String>) -> Self {
        self.repositories = Some(repositories);
        self
    }

    /// Replaces the default scopes
    pub fn scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = Some(scopes);
        self
    }

    pub fn ignore_optional(mut self, ignore_optional: bool) -> Self {
        self.ignore_optional = Some(ignore_optional);
        self
    }

    pub fn exclude_runtime(mut self, exclude_runtime: bool) -> Self {
        self.exclude_runtime = exclude_runtime;
        self
    }

    pub fn blacklist(mut self, blacklist: Vec<String>) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn pom_cache_dir(mut self, pom_cache_dir: Option<PathBuf>) -> Self {
        self.pom_cache_dir = pom_cache_dir;
        self
    }

    pub fn check_artifact_existence(mut self, check_artifact_existence: bool) -> Self {
        self.check_artifact_existence = check_artifact_existence;
        self
    }

    /// Validates the collected options
    ///
    /// # Errors
    /// Returns an error if:
    /// - A repository URL is not an http(s) URL
    /// - An explicit repository list is empty
    /// - A blacklist entry is not `group:artifact`
    pub fn build(self) -> Result<ResolveRequest> {
        let repositories = match self.repositories {
            None => RepositoryUrl::defaults(),
            Some(urls) if urls.is_empty() => {
                return Err(ResolveError::Validation {
                    message: "at least one repository URL is required".to_string(),
                }
                .into());
            }
            Some(urls) => urls
                .iter()
                .map(|url| RepositoryUrl::new(url))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        let blacklist = self
            .blacklist
            .iter()
            .map(|entry| GavKey::parse(entry))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let include_scopes = self
            .scopes
            .unwrap_or_else(|| DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect());

        Ok(ResolveRequest {
            dependencies: self.dependencies,
            repositories,
            include_scopes,
            ignore_optional: self.ignore_optional.unwrap_or(true),
            exclude_runtime: self.exclude_runtime,
            blacklist,
            pom_cache_dir: self.pom_cache_dir,
            check_artifact_existence: self.check_artifact_existence,
        })
    }
}
