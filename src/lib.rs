//! mvn-resolve - Maven transitive dependency resolver
//!
//! This library walks the POM graph of a set of initial Maven dependencies,
//! mediates version conflicts with "highest version wins", and reports one
//! version per `groupId:artifactId` with its packaging, first depender and
//! download URL. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`maven_resolution`): Versions, coordinates, POM parsing
//!   and the resolution engine
//! - **Application Layer** (`application`): Use cases, request/report DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_resolve::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ResolveDependenciesUseCase::new(
//!     MavenRepositoryClient::new()?,
//!     Some(DiskPomCache::new(PathBuf::from(".pom-cache"))),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ResolveRequest::builder()
//!     .dependencies(vec!["androidx.core:core:1.13.1".to_string()])
//!     .build()?;
//! let report = use_case.execute(request);
//!
//! println!("{}", JsonReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod maven_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{DiskPomCache, FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
    pub use crate::adapters::outbound::network::MavenRepositoryClient;
    pub use crate::application::dto::{
        OutputFormat, ResolutionReport, ResolveRequest, ResolvedDependency,
    };
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::maven_resolution::domain::{GavKey, RepositoryUrl};
    pub use crate::ports::inbound::DependencyResolutionPort;
    pub use crate::ports::outbound::{
        ArtifactProbe, OutputPresenter, PomCache, PomRepository, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
