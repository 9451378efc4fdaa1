use crate::application::dto::{ResolutionReport, ResolveRequest};

/// DependencyResolutionPort - Inbound port for the resolution use case
///
/// This is the application's public entry point. It never fails: faults
/// that escape the traversal come back as a failed report carrying the
/// warnings gathered before the fault.
pub trait DependencyResolutionPort {
    /// Resolves the transitive closure of the requested coordinates
    ///
    /// # Arguments
    /// * `request` - Seeds, repositories and filtering options
    ///
    /// # Returns
    /// A completed report with sorted dependencies, or a failed report
    fn resolve(&self, request: ResolveRequest) -> ResolutionReport;
}
