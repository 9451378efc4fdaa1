/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod resolution_report;
mod resolve_request;

pub use output_format::OutputFormat;
pub use resolution_report::{ReportStatus, ResolutionReport, ResolvedDependency};
pub use resolve_request::{ResolveRequest, ResolveRequestBuilder};
