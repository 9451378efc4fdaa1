/// Domain layer for Maven dependency resolution
///
/// - `domain`: value objects, traversal state, version comparison
/// - `policies`: mediation and packaging rules
/// - `services`: POM parsing, fetching, artifact location and the traversal engine
pub mod domain;
pub mod policies;
pub mod services;
