/// Mock implementations for testing
mod mock_maven_repository;
mod mock_progress_reporter;

pub use mock_maven_repository::{pom, MockMavenRepository};
pub use mock_progress_reporter::MockProgressReporter;
