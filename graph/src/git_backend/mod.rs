pub mod error;
pub mod parse;
pub mod source;
pub mod cli;
pub mod builder;

pub use error::HistoryError;
pub use source::HistorySource;
pub use cli::GitCli;
pub use builder::{build_dependency_graph, GraphBuilder};
