pub mod record;
pub mod dag;

pub use record::{short_id, CommitRecord, SHORT_ID_LEN};
pub use dag::{DependencyGraph, GraphStats};
