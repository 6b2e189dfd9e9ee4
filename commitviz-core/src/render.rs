use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Log file receiving the renderer's stderr when it fails
pub const ERROR_LOG_FILE: &str = "error_log.txt";

/// Result of a render attempt. Rendering never aborts the run, so failures
/// are reported here instead of as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Renderer exited successfully
    Rendered { image: PathBuf },
    /// Renderer exited non-zero; its stderr was written to the error log
    Failed { stderr: String },
    /// Renderer could not be started at all
    LaunchFailed { message: String },
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

/// Runs an external diagram renderer as `<program> -i <input> -o <output>`
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    program: PathBuf,
    error_log: PathBuf,
}

impl ImageRenderer {
    pub fn new<P: AsRef<Path>>(program: P) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            error_log: PathBuf::from(ERROR_LOG_FILE),
        }
    }

    /// Write failures somewhere other than `error_log.txt` in the working
    /// directory
    pub fn with_error_log<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.error_log = path.as_ref().to_path_buf();
        self
    }

    pub fn error_log(&self) -> &Path {
        &self.error_log
    }

    pub fn render<I, O>(&self, input: I, output: O) -> RenderOutcome
    where
        I: AsRef<Path>,
        O: AsRef<Path>,
    {
        let (input, output) = (input.as_ref(), output.as_ref());
        debug!(
            program = %self.program.display(),
            input = %input.display(),
            output = %output.display(),
            "running renderer"
        );

        let result = Command::new(&self.program)
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) => {
                warn!(program = %self.program.display(), error = %e, "failed to launch renderer");
                return RenderOutcome::LaunchFailed {
                    message: e.to_string(),
                };
            }
        };

        if out.status.success() {
            return RenderOutcome::Rendered {
                image: output.to_path_buf(),
            };
        }

        let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
        if let Err(e) = fs::write(&self.error_log, &stderr) {
            warn!(
                path = %self.error_log.display(),
                error = %e,
                "failed to write renderer error log"
            );
        }
        warn!(status = %out.status, "renderer failed");

        RenderOutcome::Failed { stderr }
    }
}

/// Image path for a Markdown output file: same base name, `.png` extension
pub fn image_path_for<P: AsRef<Path>>(markdown: P) -> PathBuf {
    markdown.as_ref().with_extension("png")
}
