mod artifact_locator;
mod diagnostics;
pub mod pom_fetcher;
pub mod pom_parser;
mod resolution_engine;

pub use artifact_locator::ArtifactLocator;
pub use diagnostics::Diagnostics;
pub use pom_fetcher::PomFetcher;
pub use pom_parser::{DependencyFilter, PropertyMap};
pub use resolution_engine::{EngineSettings, ResolutionEngine};
