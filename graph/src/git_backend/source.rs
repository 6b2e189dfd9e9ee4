use super::error::HistoryError;
use chrono::NaiveDate;

/// Read-only queries the graph builder needs from a repository.
pub trait HistorySource {
    /// Commit IDs authored since `since`, oldest first
    fn list_commits_since(&self, since: NaiveDate) -> Result<Vec<String>, HistoryError>;

    /// First line of the commit message and the paths the commit changed
    fn commit_message_and_files(&self, id: &str) -> Result<(String, Vec<String>), HistoryError>;

    /// Parent IDs of a commit, empty for a root commit
    fn commit_parents(&self, id: &str) -> Result<Vec<String>, HistoryError>;
}

impl<S: HistorySource + ?Sized> HistorySource for &S {
    fn list_commits_since(&self, since: NaiveDate) -> Result<Vec<String>, HistoryError> {
        (**self).list_commits_since(since)
    }

    fn commit_message_and_files(&self, id: &str) -> Result<(String, Vec<String>), HistoryError> {
        (**self).commit_message_and_files(id)
    }

    fn commit_parents(&self, id: &str) -> Result<Vec<String>, HistoryError> {
        (**self).commit_parents(id)
    }
}
