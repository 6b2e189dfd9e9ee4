/// Length of the abbreviated commit id used in rendered output
pub const SHORT_ID_LEN: usize = 7;

/// Metadata collected for one commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitRecord {
    /// First line of the commit message (may be empty)
    pub message: String,
    /// Paths changed by the commit, in the order git reported them
    pub files: Vec<String>,
    /// Parent commit IDs, in the order git reported them
    pub parents: Vec<String>,
}

impl CommitRecord {
    pub fn new(message: String, files: Vec<String>, parents: Vec<String>) -> Self {
        Self {
            message,
            files,
            parents,
        }
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// Abbreviate a commit id for display. Ids shorter than the prefix are
/// returned whole.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}
