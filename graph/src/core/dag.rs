use super::record::CommitRecord;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Commit dependency graph keyed by full commit ID.
///
/// Keys keep the order they were first inserted in, which is the order
/// nodes and edges are emitted when the graph is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    records: IndexMap<String, CommitRecord>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Insert a record. An existing key is overwritten in place and keeps
    /// its original position.
    pub fn insert(&mut self, id: String, record: CommitRecord) -> Option<CommitRecord> {
        self.records.insert(id, record)
    }

    /// Get the record for a commit
    pub fn get(&self, id: &str) -> Option<&CommitRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Iterate over (id, record) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommitRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Commit IDs in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Count of nodes
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of parent -> child edges, including edges from parents
    /// outside the graph
    pub fn edge_count(&self) -> usize {
        self.records.values().map(|r| r.parents.len()).sum()
    }

    /// Get all root commits (no parents)
    pub fn roots(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, record)| record.is_root())
            .map(|(id, _)| id)
            .collect()
    }

    /// Get all merge commits (multiple parents)
    pub fn merges(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, record)| record.is_merge())
            .map(|(id, _)| id)
            .collect()
    }

    /// Parent IDs referenced by some record but not present as nodes,
    /// typically commits older than the cutoff date
    pub fn external_parents(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .values()
            .flat_map(|record| record.parents.iter())
            .filter(|parent| !self.records.contains_key(parent.as_str()))
            .filter(|parent| seen.insert(parent.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_commits: self.len(),
            total_edges: self.edge_count(),
            merge_commits: self.merges().len(),
            root_commits: self.roots().len(),
            external_parents: self.external_parents().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub total_commits: usize,
    pub total_edges: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub external_parents: usize,
}
