use super::coordinates::{GavKey, QueueEntry};
use super::resolved_artifact::ResolvedArtifact;
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};

/// Traversal state for one resolution run
///
/// Holds the winner per `groupId:artifactId`, the FIFO worklist and the set
/// of every `groupId:artifactId:version` ever scheduled. A triple is
/// scheduled at most once per run, even if it later loses mediation.
#[derive(Debug, Default)]
pub struct ResolutionState {
    resolved: IndexMap<GavKey, ResolvedArtifact>,
    queued: HashSet<String>,
    queue: VecDeque<QueueEntry>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn winner(&self, key: &GavKey) -> Option<&ResolvedArtifact> {
        self.resolved.get(key)
    }

    /// True when `entry` is still the winning version for its key
    pub fn is_current_winner(&self, entry: &QueueEntry) -> bool {
        self.resolved
            .get(&entry.key())
            .is_some_and(|winner| winner.version == entry.version)
    }

    /// Inserts or overwrites the winner for `artifact.key`, keeping the
    /// key's original position in resolution order
    pub fn set_winner(&mut self, artifact: ResolvedArtifact) {
        self.resolved.insert(artifact.key.clone(), artifact);
    }

    /// Records POM-declared packaging, but only for the version that still wins
    pub fn update_packaging(&mut self, entry: &QueueEntry, packaging: &str) {
        if let Some(winner) = self.resolved.get_mut(&entry.key()) {
            if winner.version == entry.version {
                winner.packaging = packaging.to_string();
            }
        }
    }

    /// Schedules an entry unless the same triple was scheduled before.
    /// Returns whether the entry was added.
    pub fn enqueue(&mut self, entry: QueueEntry) -> bool {
        if !self.queued.insert(entry.gav()) {
            return false;
        }
        self.queue.push_back(entry);
        true
    }

    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    /// Winners in the order their keys were first resolved
    pub fn resolved(&self) -> impl Iterator<Item = &ResolvedArtifact> {
        self.resolved.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(version: &str) -> QueueEntry {
        QueueEntry::new("g", "a", version, "compile")
    }

    #[test]
    fn test_enqueue_is_idempotent_per_triple() {
        let mut state = ResolutionState::new();
        assert!(state.enqueue(entry("1.0")));
        assert!(!state.enqueue(entry("1.0")));
        assert!(state.enqueue(entry("2.0")));
        assert_eq!(state.pending(), 2);
    }

    #[test]
    fn test_triple_not_requeued_after_pop() {
        let mut state = ResolutionState::new();
        state.enqueue(entry("1.0"));
        assert_eq!(state.pop(), Some(entry("1.0")));
        assert!(!state.enqueue(entry("1.0")));
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut state = ResolutionState::new();
        state.enqueue(QueueEntry::new("g", "first", "1", "compile"));
        state.enqueue(QueueEntry::new("g", "second", "1", "compile"));
        assert_eq!(state.pop().unwrap().artifact_id, "first");
        assert_eq!(state.pop().unwrap().artifact_id, "second");
    }

    #[test]
    fn test_is_current_winner() {
        let mut state = ResolutionState::new();
        assert!(!state.is_current_winner(&entry("1.0")));

        state.set_winner(ResolvedArtifact::new(GavKey::new("g", "a"), "2.0", "jar", "root project"));
        assert!(state.is_current_winner(&entry("2.0")));
        assert!(!state.is_current_winner(&entry("1.0")));
    }

    #[test]
    fn test_update_packaging_ignores_stale_versions() {
        let mut state = ResolutionState::new();
        state.set_winner(ResolvedArtifact::new(GavKey::new("g", "a"), "2.0", "jar", "root project"));

        state.update_packaging(&entry("1.0"), "aar");
        assert_eq!(state.winner(&GavKey::new("g", "a")).unwrap().packaging, "jar");

        state.update_packaging(&entry("2.0"), "aar");
        assert_eq!(state.winner(&GavKey::new("g", "a")).unwrap().packaging, "aar");
    }

    #[test]
    fn test_set_winner_keeps_resolution_order() {
        let mut state = ResolutionState::new();
        state.set_winner(ResolvedArtifact::new(GavKey::new("g", "b"), "1.0", "jar", "root project"));
        state.set_winner(ResolvedArtifact::new(GavKey::new("g", "a"), "1.0", "jar", "root project"));
        state.set_winner(ResolvedArtifact::new(GavKey::new("g", "b"), "2.0", "jar", "g:x:1"));

        let order: Vec<String> = state.resolved().map(|a| a.gav()).collect();
        assert_eq!(order, vec!["g:b:2.0", "g:a:1.0"]);
        assert_eq!(state.resolved_count(), 2);
    }
}
