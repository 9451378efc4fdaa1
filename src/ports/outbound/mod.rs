/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core uses
/// to reach remote repositories, the on-disk POM cache and the console.
pub mod artifact_probe;
pub mod output_presenter;
pub mod pom_cache;
pub mod pom_repository;
pub mod progress_reporter;
pub mod report_formatter;

pub use artifact_probe::ArtifactProbe;
pub use output_presenter::OutputPresenter;
pub use pom_cache::PomCache;
pub use pom_repository::PomRepository;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
