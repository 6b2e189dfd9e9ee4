pub mod core;
pub mod git_backend;
pub mod render;

pub use core::{CommitRecord, DependencyGraph, GraphStats};
pub use git_backend::{build_dependency_graph, GitCli, GraphBuilder, HistoryError, HistorySource};
pub use render::{to_mermaid, MermaidSerializer};
