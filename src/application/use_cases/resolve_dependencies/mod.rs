use crate::application::dto::{ResolutionReport, ResolveRequest, ResolvedDependency};
use crate::maven_resolution::services::{DependencyFilter, EngineSettings, ResolutionEngine};
use crate::ports::inbound::DependencyResolutionPort;
use crate::ports::outbound::{ArtifactProbe, PomCache, PomRepository, ProgressReporter};

/// ResolveDependenciesUseCase - Core use case for transitive resolution
///
/// This use case wires a fresh resolution engine to the injected adapters
/// for every request, so no traversal state survives between runs. Only the
/// disk cache behind `PC` persists.
///
/// # Type Parameters
/// * `R` - PomRepository and ArtifactProbe implementation (remote repositories)
/// * `PC` - PomCache implementation (persistent POM cache)
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<R, PC, PR> {
    repository: R,
    pom_cache: Option<PC>,
    progress_reporter: PR,
}

impl<R, PC, PR> ResolveDependenciesUseCase<R, PC, PR>
where
    R: PomRepository + ArtifactProbe,
    PC: PomCache,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(repository: R, pom_cache: Option<PC>, progress_reporter: PR) -> Self {
        Self {
            repository,
            pom_cache,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Arguments
    /// * `request` - Seeds, repositories and filtering options
    ///
    /// # Returns
    /// A completed report, or a failed report when the run could not finish.
    /// This method does not return errors.
    pub fn execute(&self, request: ResolveRequest) -> ResolutionReport {
        let settings = Self::build_settings(&request);
        let pom_cache = self.pom_cache.as_ref().map(|cache| cache as &dyn PomCache);

        self.progress_reporter.report(&format!(
            "🔍 Resolving {} initial dependencies against {} repositories...",
            request.dependencies.len(),
            settings.repositories.len()
        ));

        let mut engine = ResolutionEngine::new(
            &settings,
            &self.repository,
            &self.repository,
            pom_cache,
            &self.progress_reporter,
        );

        match engine.run(&request.dependencies) {
            Ok(located) => {
                let dependencies: Vec<ResolvedDependency> =
                    located.into_iter().map(ResolvedDependency::from).collect();
                self.progress_reporter.report_completion(&format!(
                    "✅ Resolved {} unique dependencies ({} warnings)",
                    dependencies.len(),
                    engine.warnings().len()
                ));
                ResolutionReport::completed(dependencies, engine.into_warnings())
            }
            Err(e) => {
                let report = ResolutionReport::failed(&e, engine.into_warnings());
                if let ResolutionReport::Failed { error, .. } = &report {
                    self.progress_reporter.report_error(error);
                }
                report
            }
        }
    }

    fn build_settings(request: &ResolveRequest) -> EngineSettings {
        EngineSettings {
            repositories: request.repositories.clone(),
            filter: DependencyFilter::new(
                request.effective_scopes(),
                request.blacklist.iter().cloned(),
                request.ignore_optional,
            ),
            check_artifact_existence: request.check_artifact_existence,
        }
    }
}

impl<R, PC, PR> DependencyResolutionPort for ResolveDependenciesUseCase<R, PC, PR>
where
    R: PomRepository + ArtifactProbe,
    PC: PomCache,
    PR: ProgressReporter,
{
    fn resolve(&self, request: ResolveRequest) -> ResolutionReport {
        self.execute(request)
    }
}
