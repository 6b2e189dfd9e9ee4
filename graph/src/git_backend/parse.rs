//! Parsers for the text printed by the git queries.

/// Parse `git log --pretty=format:%H` output. Git lists newest first;
/// the result is oldest first.
pub fn parse_commit_list(stdout: &str) -> Vec<String> {
    let mut commits: Vec<String> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    commits.reverse();
    commits
}

/// Parse `git log -1 --pretty=format:%s` output into a single-line message
pub fn parse_message(stdout: &str) -> String {
    stdout.lines().next().unwrap_or("").trim().to_string()
}

/// Parse `git diff-tree --name-only` output, one path per line
pub fn parse_files(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Parse `git rev-list --parents -n 1 <id>` output. The first token is the
/// commit itself and is dropped.
pub fn parse_parents(stdout: &str) -> Vec<String> {
    stdout
        .split_whitespace()
        .skip(1)
        .map(String::from)
        .collect()
}
