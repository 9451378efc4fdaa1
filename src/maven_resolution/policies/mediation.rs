use crate::maven_resolution::domain::{version, QueueEntry, ResolutionState, ResolvedArtifact};

/// MediationPolicy implements "highest version wins"
///
/// The same rule applies to initial dependencies, parent POMs and
/// transitive dependencies. An incompatibility between the existing winner
/// and the candidate only produces a warning; it never blocks the upgrade.
pub struct MediationPolicy;

impl MediationPolicy {
    /// Mediates `candidate` against the current winner for its key and
    /// schedules it when it wins. Returns the advisory warning when the two
    /// versions are judged incompatible.
    ///
    /// # Arguments
    /// * `state` - Traversal state holding winners and the worklist
    /// * `candidate` - The requested version and its scope
    /// * `introduced_by` - GAV of the node declaring the candidate, or `root project`
    /// * `packaging` - Packaging recorded when the candidate wins
    pub fn mediate(
        state: &mut ResolutionState,
        candidate: QueueEntry,
        introduced_by: &str,
        packaging: &str,
    ) -> Option<String> {
        let key = candidate.key();

        let existing = state.winner(&key);
        let conflict = existing
            .filter(|existing| {
                !version::compatible(Some(&existing.version), Some(&candidate.version))
            })
            .map(|existing| {
                format!(
                    "WARNING: Incompatible version conflict for {}. \
                     Already resolved to {} (introduced by: {}), \
                     new candidate {} (introduced by: {}).",
                    key,
                    existing.version,
                    existing.first_depender,
                    candidate.version,
                    introduced_by
                )
            });

        let kept = existing
            .is_some_and(|existing| !version::is_higher(Some(&existing.version), &candidate.version));
        if kept {
            return conflict;
        }

        state.set_winner(ResolvedArtifact::new(
            key,
            candidate.version.as_str(),
            packaging,
            introduced_by,
        ));
        state.enqueue(candidate);

        conflict
    }
}
