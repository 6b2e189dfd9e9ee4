pub mod config;
pub mod output;
pub mod render;

pub use config::{parse_date, Config, ConfigError, DATE_FORMAT};
pub use output::{write_markdown, OutputError, FENCE_CLOSE, FENCE_OPEN};
pub use render::{image_path_for, ImageRenderer, RenderOutcome, ERROR_LOG_FILE};
