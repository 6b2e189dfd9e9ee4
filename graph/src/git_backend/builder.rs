use super::error::HistoryError;
use super::source::HistorySource;
use crate::core::{CommitRecord, DependencyGraph};
use tracing::debug;

/// Builds a [`DependencyGraph`] by querying a history source per commit
pub struct GraphBuilder<S> {
    source: S,
}

impl<S: HistorySource> GraphBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Query every commit in `ids`, in the given order, and collect the
    /// results. Parents are queried before message and files. A repeated
    /// id overwrites the earlier record.
    pub fn build<I, T>(&self, ids: I) -> Result<DependencyGraph, HistoryError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut graph = DependencyGraph::new();

        for id in ids {
            let id = id.as_ref();
            let parents = self.source.commit_parents(id)?;
            let (message, files) = self.source.commit_message_and_files(id)?;

            if graph
                .insert(id.to_string(), CommitRecord::new(message, files, parents))
                .is_some()
            {
                debug!(commit = %id, "commit listed twice, keeping the last record");
            }
        }

        debug!(commits = graph.len(), edges = graph.edge_count(), "built dependency graph");
        Ok(graph)
    }
}

/// Build the graph for `ids` from `source`
pub fn build_dependency_graph<S, I, T>(source: S, ids: I) -> Result<DependencyGraph, HistoryError>
where
    S: HistorySource,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    GraphBuilder::new(source).build(ids)
}
