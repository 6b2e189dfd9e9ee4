use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use commitviz_core::{
    image_path_for, parse_date, write_markdown, Config, ImageRenderer, RenderOutcome,
};
use graph::{build_dependency_graph, to_mermaid, GitCli, HistorySource};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "commitviz")]
#[command(about = "Render git commit history as a Mermaid dependency graph", long_about = None)]
struct Cli {
    /// Diagram renderer executable, called as `<renderer> -i <input> -o <output>`
    #[arg(required_unless_present = "config", conflicts_with = "config")]
    renderer: Option<PathBuf>,

    /// Path to the repository
    #[arg(required_unless_present = "config", conflicts_with = "config")]
    repo: Option<PathBuf>,

    /// Markdown file to write the diagram to
    #[arg(required_unless_present = "config", conflicts_with = "config")]
    output: Option<PathBuf>,

    /// Only include commits since this date (YYYY-MM-DD)
    #[arg(
        required_unless_present = "config",
        conflicts_with = "config",
        value_parser = parse_date
    )]
    date: Option<NaiveDate>,

    /// Read renderer, repository, output and date from a one-row CSV file
    #[arg(short, long, value_name = "CSV")]
    config: Option<PathBuf>,

    /// Git executable
    #[arg(long, default_value = "git")]
    git: String,

    /// Write the Markdown file only, skip the renderer
    #[arg(long)]
    no_image: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        if let Some(path) = &self.config {
            return Config::from_csv_path(path)
                .with_context(|| format!("failed to load config from {}", path.display()));
        }

        match (&self.renderer, &self.repo, &self.output, self.date) {
            (Some(renderer), Some(repo), Some(output), Some(since)) => Ok(Config {
                renderer_path: renderer.clone(),
                repo_path: repo.clone(),
                output_path: output.clone(),
                since,
            }),
            _ => anyhow::bail!("renderer, repository, output and date are required without --config"),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &Config, git_program: &str, render_image: bool) -> Result<()> {
    let git = GitCli::new(&config.repo_path).with_program(git_program);

    let commits = git
        .list_commits_since(config.since)
        .context("failed to list commits")?;
    info!(count = commits.len(), since = %config.since, "listed commits");

    let graph = build_dependency_graph(&git, &commits).context("failed to read commit history")?;
    let stats = graph.stats();
    info!(
        commits = stats.total_commits,
        edges = stats.total_edges,
        merges = stats.merge_commits,
        external_parents = stats.external_parents,
        "built dependency graph"
    );

    let diagram = to_mermaid(&graph);
    write_markdown(&diagram, &config.output_path)?;
    println!("Mermaid diagram written to {}", config.output_path.display());

    if !render_image {
        return Ok(());
    }

    let image = image_path_for(&config.output_path);
    match ImageRenderer::new(&config.renderer_path).render(&config.output_path, &image) {
        RenderOutcome::Rendered { image } => {
            println!("Graph image generated: {}", image.display());
        }
        RenderOutcome::Failed { stderr } => {
            eprintln!("Image generation failed: {}", stderr.trim_end());
        }
        RenderOutcome::LaunchFailed { message } => {
            eprintln!("Could not run renderer {}: {}", config.renderer_path.display(), message);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.load_config()?;
    run(&config, &cli.git, !cli.no_image)
}
