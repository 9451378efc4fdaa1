pub mod coordinates;
pub mod pom;
pub mod repository;
pub mod resolution_state;
pub mod resolved_artifact;
pub mod version;

pub use coordinates::{
    ArtifactRef, GavKey, ParentRef, QueueEntry, SeedParse, DEFAULT_SCOPE, KNOWN_SCOPES,
    ROOT_PROJECT,
};
pub use pom::{PomDocument, PomElement, XmlElement};
pub use repository::{RepositoryUrl, DEFAULT_REPOSITORIES};
pub use resolution_state::ResolutionState;
pub use resolved_artifact::{LocatedArtifact, ResolvedArtifact, DEFAULT_PACKAGING, PARENT_PACKAGING};
