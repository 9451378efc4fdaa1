/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: HTTP repository access,
/// the on-disk POM cache, console progress and report output.
pub mod outbound;
