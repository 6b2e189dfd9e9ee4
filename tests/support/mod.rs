#![allow(dead_code)]

use anyhow::Result;
use git2::{Commit, Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

pub fn create_test_repo() -> Result<(TempDir, Repository)> {
    let dir = TempDir::new()?;
    let repo = Repository::init(dir.path())?;

    let mut config = repo.config()?;
    config.set_str("user.name", "Test User")?;
    config.set_str("user.email", "test@example.com")?;

    Ok((dir, repo))
}

pub fn commit_files(
    repo: &Repository,
    files: &[(&str, &str)],
    message: &str,
    parents: &[&Commit],
) -> Result<Oid> {
    let workdir = repo.workdir().expect("non-bare repo");
    let mut index = repo.index()?;
    for (path, contents) in files {
        fs::write(workdir.join(path), contents)?;
        index.add_path(Path::new(path))?;
    }
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let sig = Signature::now("Test User", "test@example.com")?;
    Ok(repo.commit(Some("HEAD"), &sig, &sig, message, &tree, parents)?)
}

/// Two commits: a root adding `file1.py` and a child adding two more files
pub fn two_commit_repo() -> Result<(TempDir, Oid, Oid)> {
    let (dir, repo) = create_test_repo()?;
    let first = commit_files(&repo, &[("file1.py", "print(1)\n")], "Initial commit", &[])?;
    let parent = repo.find_commit(first)?;
    let second = commit_files(
        &repo,
        &[("file2.py", "a\n"), ("file3.py", "b\n")],
        "Added new features",
        &[&parent],
    )?;
    Ok((dir, first, second))
}

pub fn short(oid: Oid) -> String {
    oid.to_string()[..7].to_string()
}
