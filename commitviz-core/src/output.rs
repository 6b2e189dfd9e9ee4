use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opens the Mermaid fenced block
pub const FENCE_OPEN: &str = "```mermaid\n";
/// Closes the Mermaid fenced block
pub const FENCE_CLOSE: &str = "\n```";

#[derive(Debug, Error)]
#[error("failed to write diagram to {}", .path.display())]
pub struct OutputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Write `diagram` to `path` as a Markdown fenced code block, creating or
/// truncating the file.
pub fn write_markdown<P: AsRef<Path>>(diagram: &str, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let wrap = |source: std::io::Error| OutputError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(FENCE_OPEN.as_bytes()).map_err(wrap)?;
    file.write_all(diagram.as_bytes()).map_err(wrap)?;
    file.write_all(FENCE_CLOSE.as_bytes()).map_err(wrap)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exact_contents() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("output.md");

        write_markdown("graph TD\n    ...", &path)?;

        assert_eq!(fs::read_to_string(&path)?, "```mermaid\ngraph TD\n    ...\n```");
        Ok(())
    }

    #[test]
    fn test_truncates_existing_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("output.md");
        fs::write(&path, "a much longer previous diagram that must disappear")?;

        write_markdown("graph TD", &path)?;

        assert_eq!(fs::read_to_string(&path)?, "```mermaid\ngraph TD\n```");
        Ok(())
    }

    #[test]
    fn test_unwritable_path() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("no-such-dir").join("output.md");

        let err = write_markdown("graph TD", &path).unwrap_err();
        assert_eq!(err.path, path);
        Ok(())
    }
}
